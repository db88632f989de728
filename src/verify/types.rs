// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types and the one-time well-formedness check for index artifacts.
//!
//! The artifact comes from an external build step, so nothing about its shape
//! can be assumed. We check it once, right after decoding, and after that the
//! search path indexes into `docs` without bounds anxiety.
//!
//! # What's checked
//!
//! | Check                  | Error variant            |
//! |------------------------|--------------------------|
//! | format version         | `UnsupportedVersion`     |
//! | ref path non-empty     | `EmptyRefPath`           |
//! | posting doc in bounds  | `InvalidDocId`           |
//! | postings sorted/unique | `UnsortedPostingList`    |
//! | no empty posting list  | `EmptyPostingList`       |
//! | terms normalized       | `UnnormalizedTerm`       |
//!
//! `SearchIndex::from_json` folds the vocabulary before this check runs, so an
//! `UnnormalizedTerm` only shows up for indexes built by hand in code.

use crate::index::{SearchIndex, INDEX_VERSION};
use crate::types::NavNodeId;
use crate::utils::normalize;
use thiserror::Error;

/// A structural violation found in a decoded index artifact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("unsupported index version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
    #[error("docs[{doc}] has a reference with an empty path: {reference:?}")]
    EmptyRefPath { doc: usize, reference: String },
    #[error("posting for '{term}' points at doc {doc} but there are {docs_len} docs")]
    InvalidDocId {
        term: String,
        doc: u32,
        docs_len: usize,
    },
    #[error("posting list for '{term}' not sorted at position {position}")]
    UnsortedPostingList { term: String, position: usize },
    #[error("posting list for '{term}' is empty")]
    EmptyPostingList { term: String },
    #[error("term '{term}' is not normalized")]
    UnnormalizedTerm { term: String },
}

/// Why the index could not be made ready.
///
/// Never surfaced to the reader of the page: the session logs it and carries on
/// as if no index exists.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },
    #[error("failed to decode search index: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("malformed search index: {0}")]
    Invalid(#[from] InvariantError),
    #[error("search index is already loaded")]
    AlreadyLoaded,
    #[error("search index load already in progress")]
    InProgress,
    #[error("search index failed to load earlier: {0}")]
    PreviouslyFailed(String),
}

/// The outline handed to us cannot become a navigation tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("path {path:?} appears on node {first:?} and again on node {second:?}")]
    DuplicatePath {
        path: String,
        first: NavNodeId,
        second: NavNodeId,
    },
    #[error("node {node:?} has an empty path")]
    EmptyPath { node: NavNodeId },
}

/// Check every structural invariant of a decoded artifact.
///
/// Returns the first violation found. Terms are visited in vocabulary order,
/// so the reported violation is deterministic for a given artifact.
pub fn validate_index(index: &SearchIndex) -> Result<(), InvariantError> {
    if index.version != INDEX_VERSION {
        return Err(InvariantError::UnsupportedVersion {
            found: index.version,
            expected: INDEX_VERSION,
        });
    }

    for (doc, entry) in index.docs.iter().enumerate() {
        if entry.reference.path().is_empty() {
            return Err(InvariantError::EmptyRefPath {
                doc,
                reference: entry.reference.as_str().to_string(),
            });
        }
    }

    let docs_len = index.docs.len();
    for (term, postings) in &index.terms {
        if term.is_empty() || term.contains(' ') || normalize(term) != *term {
            return Err(InvariantError::UnnormalizedTerm { term: term.clone() });
        }
        if postings.is_empty() {
            return Err(InvariantError::EmptyPostingList { term: term.clone() });
        }
        for (position, posting) in postings.iter().enumerate() {
            if posting.doc as usize >= docs_len {
                return Err(InvariantError::InvalidDocId {
                    term: term.clone(),
                    doc: posting.doc,
                    docs_len,
                });
            }
            if position > 0 {
                let prev = &postings[position - 1];
                if (prev.doc, prev.field) >= (posting.doc, posting.field) {
                    return Err(InvariantError::UnsortedPostingList {
                        term: term.clone(),
                        position,
                    });
                }
            }
        }
    }

    Ok(())
}
