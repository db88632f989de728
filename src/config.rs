// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Options the hosting page may pass in. Every field has a default, so an
//! empty object (or no object at all) is a valid configuration.

use crate::scoring::MAX_EDIT_DISTANCE;
use serde::{Deserialize, Serialize};

/// Conventional file name of the index artifact under the base path.
pub const DEFAULT_INDEX_FILE: &str = "search_index.json";

/// Query engine options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    /// Maximum number of matches to return (default: all)
    pub limit: Option<usize>,
    /// Enable prefix matching (default: true)
    pub prefix: bool,
    /// Enable fuzzy matching (default: true)
    pub fuzzy: bool,
    /// Maximum edit distance for fuzzy matching (default: 1, clamped to 2)
    pub max_distance: usize,
    /// Query terms shorter than this never fuzzy-match (default: 4)
    pub min_fuzzy_len: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: None,
            prefix: true,
            fuzzy: true,
            max_distance: 1,
            min_fuzzy_len: 4,
        }
    }
}

impl SearchOptions {
    /// The edit distance actually used, after clamping.
    pub fn effective_distance(&self) -> usize {
        self.max_distance.min(MAX_EDIT_DISTANCE)
    }
}

/// Where the site lives and how the display layer marks filter state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Site root the artifact is published under (the `data-basepath` value)
    pub base_path: Option<String>,
    /// Artifact file name (default: `search_index.json`)
    pub index_file: String,
    /// Class toggled on the tree root while a search is active
    pub searched_class: String,
    /// Class added to the current article's enclosing groups
    pub active_class: String,
    pub search: SearchOptions,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: None,
            index_file: DEFAULT_INDEX_FILE.to_string(),
            searched_class: "searched".to_string(),
            active_class: "active".to_string(),
            search: SearchOptions::default(),
        }
    }
}

impl SiteConfig {
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = Some(base_path.into());
        self
    }

    /// URL of the index artifact for this site.
    pub fn index_url(&self) -> String {
        index_url_for(self.base_path.as_deref(), &self.index_file)
    }
}

/// `{basePath}/search_index.json`.
///
/// An absent or empty base path resolves to the site root. Trailing slashes
/// on the base path are collapsed so `"/book/"` and `"/book"` agree.
///
/// ```
/// use navsieve::index_url;
///
/// assert_eq!(index_url(Some("/book")), "/book/search_index.json");
/// assert_eq!(index_url(Some("/book/")), "/book/search_index.json");
/// assert_eq!(index_url(Some("")), "/search_index.json");
/// assert_eq!(index_url(None), "/search_index.json");
/// ```
pub fn index_url(base_path: Option<&str>) -> String {
    index_url_for(base_path, DEFAULT_INDEX_FILE)
}

fn index_url_for(base_path: Option<&str>, file: &str) -> String {
    let base = base_path.map(|b| b.trim().trim_end_matches('/')).unwrap_or("");
    format!("{}/{}", base, file.trim_start_matches('/'))
}
