// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query engine: turn typed text into ranked match references.
//!
//! The engine never owns the index directly. It reads through an
//! [`IndexHandle`], so a query typed before the artifact arrives (or after it
//! failed to arrive) simply returns nothing. The matcher behind the handle is a
//! trait object; the built-in one is the tiered matcher over [`SearchIndex`].

pub mod tiered;
pub mod utils;

use crate::config::SearchOptions;
use crate::index::{IndexHandle, SearchIndex};
use crate::types::MatchRef;
use tracing::debug;

/// A ranked, deterministic full-text matcher.
///
/// Same index, same query, same options: same sequence, every time.
pub trait Matcher: Send + Sync {
    fn search(&self, query: &str, options: &SearchOptions) -> Vec<MatchRef>;
}

impl Matcher for SearchIndex {
    fn search(&self, query: &str, options: &SearchOptions) -> Vec<MatchRef> {
        tiered::search_scored(self, query, options)
            .into_iter()
            .filter_map(|hit| self.doc(hit.doc))
            .map(|doc| doc.reference.clone())
            .collect()
    }
}

/// Query engine bound to an index slot.
#[derive(Debug, Clone, Default)]
pub struct QueryEngine {
    handle: IndexHandle,
    options: SearchOptions,
}

impl QueryEngine {
    pub fn new(handle: IndexHandle, options: SearchOptions) -> Self {
        Self { handle, options }
    }

    pub fn handle(&self) -> &IndexHandle {
        &self.handle
    }

    /// Ranked matches for `query`, or nothing if the index is not ready.
    pub fn search(&self, query: &str) -> Vec<MatchRef> {
        match self.handle.matcher() {
            Some(matcher) => {
                let matches = matcher.search(query, &self.options);
                debug!(query, matches = matches.len(), "query ran");
                matches
            }
            None => {
                debug!(query, status = ?self.handle.status(), "index not ready; no matches");
                Vec::new()
            }
        }
    }
}

/// Search through `handle` with default options.
pub fn search(handle: &IndexHandle, query: &str) -> Vec<MatchRef> {
    QueryEngine::new(handle.clone(), SearchOptions::default()).search(query)
}
