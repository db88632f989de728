// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The input controller: a pure state machine over key-up events.
//!
//! ```text
//!            non-empty value             non-empty value
//!   ┌──────┐ ─────────────────► ┌────────┐ ◄──────────┐
//!   │ Idle │                    │ Active │ ───────────┘
//!   └──────┘ ◄───────────────── └────────┘
//!       ▲     empty value | cancel
//!       └── empty value | cancel
//! ```
//!
//! [`transition`] decides; it never touches the index, the tree, or the page.
//! The [`Effect`]s it returns are carried out by [`crate::session::Session`].

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Key code of the cancel key (Escape).
pub const CANCEL_KEY_CODE: u32 = 27;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Cancel,
    Other(u32),
}

impl Key {
    pub fn from_code(code: u32) -> Self {
        if code == CANCEL_KEY_CODE {
            Key::Cancel
        } else {
            Key::Other(code)
        }
    }
}

/// A key-up on the search input, with the input's value after the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub value: String,
}

impl KeyEvent {
    pub fn new(code: u32, value: impl Into<String>) -> Self {
        Self {
            key: Key::from_code(code),
            value: value.into(),
        }
    }

    /// A printable keystroke leaving `value` in the input.
    pub fn typed(value: impl Into<String>) -> Self {
        Self {
            key: Key::Other(0),
            value: value.into(),
        }
    }

    /// The cancel key, pressed while the input holds `value`.
    pub fn cancel(value: impl Into<String>) -> Self {
        Self {
            key: Key::Cancel,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InputState {
    #[default]
    Idle,
    Active {
        query: String,
    },
}

impl InputState {
    pub fn is_active(&self) -> bool {
        matches!(self, InputState::Active { .. })
    }

    pub fn query(&self) -> Option<&str> {
        match self {
            InputState::Idle => None,
            InputState::Active { query } => Some(query),
        }
    }
}

/// Work for the driver, in the order it must happen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Suppress the browser's default handling of the key.
    PreventDefault,
    /// Search, map, and filter the tree for this query.
    RunQuery(String),
    /// Show the whole tree and drop the searched marker.
    ResetFilter,
    ClearInput,
    BlurInput,
}

/// Decide the next state and the effects for one key-up.
///
/// Any non-empty value (re)runs the query, even when the key did not change
/// it. An empty value resets. The cancel key always resets, clears the input,
/// drops focus, and suppresses the default action.
pub fn transition(state: &InputState, event: &KeyEvent) -> (InputState, Vec<Effect>) {
    let (next, effects) = match event.key {
        Key::Cancel => (
            InputState::Idle,
            vec![
                Effect::PreventDefault,
                Effect::ResetFilter,
                Effect::ClearInput,
                Effect::BlurInput,
            ],
        ),
        Key::Other(_) if event.value.is_empty() => (InputState::Idle, vec![Effect::ResetFilter]),
        Key::Other(_) => (
            InputState::Active {
                query: event.value.clone(),
            },
            vec![Effect::RunQuery(event.value.clone())],
        ),
    };
    trace!(from = ?state, to = ?next, key = ?event.key, "input transition");
    (next, effects)
}
