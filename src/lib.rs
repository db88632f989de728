// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search-driven navigation filtering for static documentation sites.
//!
//! A reader types into the sidebar search box; the sidebar shrinks to the
//! pages that match, plus every group that encloses one. The index is built
//! ahead of time by the site generator and fetched once per page.
//!
//! # Architecture
//!
//! ```text
//! key-up ─▶ ┌────────────┐ effects ┌──────────────────────────────────────────┐
//!           │ controller │───────▶ │ session                                  │
//!           │ (pure FSM) │         │                                          │
//!           └────────────┘         │  search ─▶ mapper ─▶ tree::apply ─▶ Patch │
//!                                  └─────┬────────────────────────────────────┘
//!                                        │ reads through
//!                                  ┌─────▼──────┐  publish  ┌────────────┐
//!                                  │ IndexHandle│ ◀──────── │  loader    │
//!                                  └────────────┘           │ (one-shot) │
//!                                                           └────────────┘
//! ```
//!
//! | Module       | Role                                                    |
//! |--------------|---------------------------------------------------------|
//! | `index`      | artifact types, the lifecycle handle, the loader        |
//! | `search`     | tiered matcher behind the `Matcher` trait               |
//! | `mapper`     | match references to a set of document paths             |
//! | `tree`       | navigation arena and the two-pass visibility filter     |
//! | `controller` | key-up state machine, `(state, event) -> (state, effects)` |
//! | `session`    | runs effects and produces display patches               |
//! | `verify`     | error types and load-time artifact validation           |
//! | `contracts`  | debug-build invariant checks                            |
//!
//! # Usage
//!
//! ```
//! use navsieve::testing::{sample_index, sample_outline};
//! use navsieve::{KeyEvent, NavTree, Session, SiteConfig};
//!
//! let tree = NavTree::from_outline(&sample_outline()).unwrap();
//! let mut session = Session::new(tree, SiteConfig::default());
//! session.begin_load();
//! session.finish_load(&sample_index().to_json());
//!
//! let patch = session.handle_key(&KeyEvent::typed("deploy"));
//! assert_eq!(patch.searched, Some(true));
//! assert!(session.tree().is_visible(session.tree().find("b/1").unwrap()));
//! ```

pub mod config;
pub mod contracts;
pub mod controller;
pub mod fuzzy;
pub mod index;
pub mod mapper;
pub mod scoring;
pub mod search;
pub mod session;
pub mod testing;
pub mod tree;
pub mod types;
pub mod utils;
pub mod verify;

#[cfg(feature = "wasm")]
mod wasm;

pub use config::{index_url, SearchOptions, SiteConfig};
pub use controller::{transition, Effect, InputState, Key, KeyEvent};
pub use index::{load, DirSource, IndexHandle, IndexSource, IndexStatus, SearchIndex};
pub use mapper::{filter_state, to_paths};
pub use search::{search, Matcher, QueryEngine};
pub use session::{Patch, Session, VisibilityChange};
pub use tree::{apply, NavNode, NavTree, OutlineEntry};
pub use types::{FieldType, FilterState, MatchRef, NavNodeId};
pub use utils::{normalize, parse_query};
pub use verify::{InvariantError, LoadError, TreeError};

#[cfg(feature = "wasm")]
pub use wasm::NavFilter;
