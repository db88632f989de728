// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The driver that carries out controller effects.
//!
//! A [`Session`] is one page's worth of state: the index slot, the tree, and
//! the input state. Each key-up goes through [`transition`], then each effect
//! runs in order, and whatever the display layer has to change comes back as a
//! [`Patch`]. Load failures stop here: they are logged and the session keeps
//! answering every query with no matches.

use crate::config::SiteConfig;
use crate::controller::{transition, Effect, InputState, KeyEvent};
use crate::index::{load_url, IndexHandle, IndexSource, SearchIndex};
use crate::mapper::filter_state;
use crate::search::{Matcher, QueryEngine};
use crate::tree::NavTree;
use crate::types::{FilterState, NavNodeId};
use crate::verify::LoadError;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// One node whose visibility flipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisibilityChange {
    pub id: NavNodeId,
    pub visible: bool,
}

/// What the display layer must do after one key-up.
///
/// Only changed nodes are listed. `searched` is set whenever the filter ran,
/// together with `searched_class`, the configured class to toggle with it, so
/// the display can update its marker without tracking state or config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Patch {
    pub visibility: Vec<VisibilityChange>,
    pub searched: Option<bool>,
    pub searched_class: Option<String>,
    pub clear_input: bool,
    pub blur_input: bool,
    pub prevent_default: bool,
}

#[derive(Debug)]
pub struct Session {
    engine: QueryEngine,
    tree: NavTree,
    state: InputState,
    config: SiteConfig,
}

impl Session {
    /// A session with an empty index slot.
    pub fn new(tree: NavTree, config: SiteConfig) -> Self {
        Self::with_handle(tree, config, IndexHandle::new())
    }

    /// A session reading through an existing slot (a preloaded or fake index).
    pub fn with_handle(tree: NavTree, config: SiteConfig, handle: IndexHandle) -> Self {
        let engine = QueryEngine::new(handle, config.search.clone());
        Self {
            engine,
            tree,
            state: InputState::Idle,
            config,
        }
    }

    pub fn tree(&self) -> &NavTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut NavTree {
        &mut self.tree
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn handle(&self) -> &IndexHandle {
        self.engine.handle()
    }

    pub fn index_url(&self) -> String {
        self.config.index_url()
    }

    /// Mark the fetch as started. `false` if a load already happened.
    pub fn begin_load(&self) -> bool {
        swallow(self.handle().begin_load())
    }

    /// Decode the fetched artifact and make it searchable.
    ///
    /// Returns whether the index is now ready. A malformed artifact fails the
    /// slot for the rest of the session.
    pub fn finish_load(&self, bytes: &[u8]) -> bool {
        match SearchIndex::from_json(bytes) {
            Ok(index) => {
                let matcher: Arc<dyn Matcher> = Arc::new(index);
                swallow(self.handle().publish(matcher))
            }
            Err(err) => {
                swallow(self.handle().fail(&err));
                false
            }
        }
    }

    /// The host's fetch failed.
    pub fn fail_load(&self, reason: &str) {
        let err = LoadError::Fetch {
            url: self.index_url(),
            reason: reason.to_string(),
        };
        swallow(self.handle().fail(&err));
    }

    /// Fetch, decode, and publish in one call.
    pub fn load_from(&self, source: &dyn IndexSource) -> bool {
        swallow(load_url(self.handle(), source, &self.index_url()).map(|_| ()))
    }

    /// Run one key-up through the controller and carry out its effects.
    pub fn handle_key(&mut self, event: &KeyEvent) -> Patch {
        let (next, effects) = transition(&self.state, event);
        self.state = next;

        let mut patch = Patch::default();
        for effect in effects {
            match effect {
                Effect::PreventDefault => patch.prevent_default = true,
                Effect::RunQuery(query) => {
                    let matches = self.engine.search(&query);
                    self.filter(&filter_state(&matches), &mut patch);
                }
                Effect::ResetFilter => self.filter(&FilterState::Unfiltered, &mut patch),
                Effect::ClearInput => patch.clear_input = true,
                Effect::BlurInput => patch.blur_input = true,
            }
        }
        patch
    }

    fn filter(&mut self, state: &FilterState, patch: &mut Patch) {
        let changed = self.tree.apply(state);
        // a later filter within the same key-up supersedes an earlier one
        patch.visibility.retain(|c| !changed.contains(&c.id));
        patch
            .visibility
            .extend(changed.into_iter().map(|id| VisibilityChange {
                id,
                visible: self.tree.is_visible(id),
            }));
        patch.visibility.sort_by_key(|c| c.id);
        patch.searched = Some(self.tree.is_searched());
        patch.searched_class = Some(self.config.searched_class.clone());
    }
}

fn swallow(result: Result<(), LoadError>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            match err {
                LoadError::AlreadyLoaded | LoadError::InProgress => {
                    debug!(error = %err, "search index load ignored")
                }
                _ => warn!(error = %err, "search index load failed"),
            }
            false
        }
    }
}
