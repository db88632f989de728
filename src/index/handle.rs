// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The write-once slot holding the loaded index.
//!
//! One handle per page session. The query engine holds a clone and reads
//! through it; the loader is the only writer, and only once. Tests build a
//! handle that is already `Ready` with a fake matcher, so nothing here knows
//! about fetching or decoding.

use crate::search::Matcher;
use crate::verify::LoadError;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Default)]
enum IndexState {
    #[default]
    Uninitialized,
    Loading,
    Ready(Arc<dyn Matcher>),
    Failed(String),
}

/// Payload-free view of the lifecycle, for hosts and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexStatus {
    Uninitialized,
    Loading,
    Ready,
    Failed,
}

/// Shared handle to the process-wide index slot.
#[derive(Clone, Default)]
pub struct IndexHandle {
    state: Arc<RwLock<IndexState>>,
}

impl fmt::Debug for IndexHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexHandle")
            .field("status", &self.status())
            .finish()
    }
}

impl IndexHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle that is `Ready` from the start.
    pub fn ready(matcher: impl Matcher + 'static) -> Self {
        Self {
            state: Arc::new(RwLock::new(IndexState::Ready(Arc::new(matcher)))),
        }
    }

    pub fn status(&self) -> IndexStatus {
        match &*self.state.read() {
            IndexState::Uninitialized => IndexStatus::Uninitialized,
            IndexState::Loading => IndexStatus::Loading,
            IndexState::Ready(_) => IndexStatus::Ready,
            IndexState::Failed(_) => IndexStatus::Failed,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status() == IndexStatus::Ready
    }

    /// The reason the load failed, if it did.
    pub fn failure(&self) -> Option<String> {
        match &*self.state.read() {
            IndexState::Failed(reason) => Some(reason.clone()),
            _ => None,
        }
    }

    /// The loaded matcher, or `None` while uninitialized, loading, or failed.
    pub fn matcher(&self) -> Option<Arc<dyn Matcher>> {
        match &*self.state.read() {
            IndexState::Ready(matcher) => Some(Arc::clone(matcher)),
            _ => None,
        }
    }

    /// `Uninitialized → Loading`. Any other starting state is refused.
    pub fn begin_load(&self) -> Result<(), LoadError> {
        let mut state = self.state.write();
        match &*state {
            IndexState::Uninitialized => {
                *state = IndexState::Loading;
                debug!("search index loading");
                Ok(())
            }
            other => Err(refusal(other)),
        }
    }

    /// `Loading → Ready`.
    ///
    /// Publishing straight from `Uninitialized` is allowed for hosts that load
    /// synchronously. A `Ready` or `Failed` slot is never overwritten.
    pub fn publish(&self, matcher: Arc<dyn Matcher>) -> Result<(), LoadError> {
        let mut state = self.state.write();
        match &*state {
            IndexState::Uninitialized | IndexState::Loading => {
                *state = IndexState::Ready(matcher);
                debug!("search index ready");
                Ok(())
            }
            other => Err(refusal(other)),
        }
    }

    /// `Loading → Failed`. Terminal for the session.
    pub fn fail(&self, err: &LoadError) -> Result<(), LoadError> {
        let mut state = self.state.write();
        match &*state {
            IndexState::Uninitialized | IndexState::Loading => {
                warn!(error = %err, "search index unavailable; filtering degrades to no matches");
                *state = IndexState::Failed(err.to_string());
                Ok(())
            }
            other => Err(refusal(other)),
        }
    }
}

fn refusal(state: &IndexState) -> LoadError {
    match state {
        IndexState::Ready(_) => LoadError::AlreadyLoaded,
        IndexState::Failed(reason) => LoadError::PreviouslyFailed(reason.clone()),
        IndexState::Uninitialized | IndexState::Loading => LoadError::InProgress,
    }
}
