// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks shared by the index, the filter, and the controller.
//!
//! Match references come out of the index, paths come out of the mapper, and
//! the tree filter consumes a [`FilterState`]. Keeping these in one place means
//! every stage of the keystroke pipeline agrees on what a "path" is.
//!
//! # Invariants
//!
//! - **MatchRef**: `path` is non-empty. The artifact loader rejects refs that
//!   start with `#`; refs built any other way are still split deterministically.
//!
//! - **Posting**: `doc < docs.len()`, and a posting list is sorted by `(doc, field)`
//!   with no duplicate pairs. `verify` checks this once at load time.
//!
//! - **FilterState**: `Filtered` with an empty set is a real state ("a query ran and
//!   nothing matched"), distinct from `Unfiltered` ("no query is active").

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

// =============================================================================
// MATCH REFERENCES
// =============================================================================

/// A reference returned by the index: `path#fragment`, fragment optional.
///
/// Stored verbatim. Splitting happens on demand so the mapper can stay a pure
/// function over whatever the index handed back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchRef(String);

impl MatchRef {
    pub fn new(raw: impl Into<String>) -> Self {
        MatchRef(raw.into())
    }

    /// The raw reference as it appears in the artifact.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split on the first `#`. A reference without a separator is a bare path.
    ///
    /// ```
    /// use navsieve::MatchRef;
    ///
    /// let r = MatchRef::new("docs/x#a#b");
    /// assert_eq!(r.split(), ("docs/x", Some("a#b")));
    /// assert_eq!(MatchRef::new("docs/y").split(), ("docs/y", None));
    /// ```
    pub fn split(&self) -> (&str, Option<&str>) {
        match self.0.split_once('#') {
            Some((path, fragment)) => (path, Some(fragment)),
            None => (&self.0, None),
        }
    }

    pub fn path(&self) -> &str {
        self.split().0
    }

    pub fn fragment(&self) -> Option<&str> {
        self.split().1
    }
}

impl fmt::Display for MatchRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MatchRef {
    fn from(raw: &str) -> Self {
        MatchRef::new(raw)
    }
}

// =============================================================================
// INDEX ARTIFACT TYPES
// =============================================================================

/// Where in a document did the term occur?
///
/// Title matches beat heading matches beat content matches. See
/// [`crate::scoring`] for the constants.
///
/// **Gotcha**: The derived `Ord` is declaration order (Title < Heading < Content),
/// which is backwards from score order. It exists so posting lists have a
/// deterministic sort key, not for ranking.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Title,
    Heading,
    Content,
}

impl FieldType {
    /// Matches the serde `rename_all = "lowercase"` convention.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Title => "title",
            FieldType::Heading => "heading",
            FieldType::Content => "content",
        }
    }
}

/// One document entry of the artifact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndexDoc {
    #[serde(rename = "ref")]
    pub reference: MatchRef,
    #[serde(default)]
    pub title: String,
}

/// A term occurrence: which document, which field, how often.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Posting {
    pub doc: u32,
    pub field: FieldType,
    #[serde(default = "default_tf")]
    pub tf: u32,
}

fn default_tf() -> u32 {
    1
}

/// A ranked hit before it is reduced to a reference.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredMatch {
    pub doc: usize,
    pub score: f64,
}

// =============================================================================
// FILTER STATE
// =============================================================================

/// What the tree filter should show.
///
/// Recomputed on every keystroke and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterState {
    /// No active search: everything visible, no "searched" marker.
    #[default]
    Unfiltered,
    /// An active search: only these document paths (and their ancestors) are visible.
    Filtered(BTreeSet<String>),
}

impl FilterState {
    pub fn is_filtered(&self) -> bool {
        matches!(self, FilterState::Filtered(_))
    }

    /// Does this state let a node with this path through on its own merit?
    ///
    /// A node without a path only passes when nothing is filtered.
    pub fn allows(&self, path: Option<&str>) -> bool {
        match self {
            FilterState::Unfiltered => true,
            FilterState::Filtered(allowed) => path.is_some_and(|p| allowed.contains(p)),
        }
    }
}

impl From<BTreeSet<String>> for FilterState {
    fn from(allowed: BTreeSet<String>) -> Self {
        FilterState::Filtered(allowed)
    }
}

// =============================================================================
// NAVIGATION TREE IDS
// =============================================================================

/// Index of a node in the navigation tree.
///
/// Ids follow document order of the outline entries, so a display layer that
/// enumerates its list items in the same order can map them back directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct NavNodeId(pub u32);

impl NavNodeId {
    /// Convert to usize for arena indexing.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<usize> for NavNodeId {
    fn from(id: usize) -> Self {
        NavNodeId(id as u32)
    }
}
