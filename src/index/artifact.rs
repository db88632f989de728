// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The decoded index artifact.
//!
//! Built elsewhere, published as JSON next to the site, decoded here once.
//! `terms` is a `BTreeMap`, so the vocabulary is sorted by construction and a
//! prefix lookup is a range scan instead of a full walk.

use crate::types::{IndexDoc, Posting};
use crate::utils::normalize;
use crate::verify::{validate_index, LoadError};
use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Artifact format version this crate reads.
pub const INDEX_VERSION: u32 = 1;

/// The complete searchable index: documents and the inverted term map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchIndex {
    pub version: u32,
    pub docs: Vec<IndexDoc>,
    pub terms: BTreeMap<String, Vec<Posting>>,
}

/// Sizes reported after a load and by `navsieve inspect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    pub docs: usize,
    pub terms: usize,
    pub postings: usize,
}

impl SearchIndex {
    /// Decode, fold and validate an artifact.
    ///
    /// Vocabulary terms are folded with [`normalize`] before validation, so a
    /// builder that kept case or composed characters still yields a usable index.
    pub fn from_json(bytes: &[u8]) -> Result<Self, LoadError> {
        let mut index: SearchIndex = serde_json::from_slice(bytes)?;
        index.fold_terms();
        validate_index(&index)?;
        let stats = index.stats();
        info!(
            docs = stats.docs,
            terms = stats.terms,
            postings = stats.postings,
            "search index decoded"
        );
        Ok(index)
    }

    /// Rewrite every vocabulary term to its folded form.
    ///
    /// Terms that collide after folding have their postings merged: sorted by
    /// `(doc, field)` with the `tf` of duplicates summed. Terms that fold to
    /// nothing, or to more than one word, can never be typed and are dropped.
    pub fn fold_terms(&mut self) {
        let terms = std::mem::take(&mut self.terms);
        for (term, postings) in terms {
            let folded = normalize(&term);
            if folded.is_empty() || folded.contains(' ') {
                warn!(term = %term, "dropping search term that cannot be queried");
                continue;
            }
            match self.terms.entry(folded) {
                Entry::Vacant(slot) => {
                    slot.insert(postings);
                }
                Entry::Occupied(mut slot) => {
                    let merged = slot.get_mut();
                    merged.extend(postings);
                    merged.sort_by_key(|p| (p.doc, p.field));
                    merged.dedup_by(|next, kept| {
                        let same = (next.doc, next.field) == (kept.doc, kept.field);
                        if same {
                            kept.tf = kept.tf.saturating_add(next.tf);
                        }
                        same
                    });
                }
            }
        }
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            docs: self.docs.len(),
            terms: self.terms.len(),
            postings: self.terms.values().map(Vec::len).sum(),
        }
    }

    pub fn doc(&self, id: usize) -> Option<&IndexDoc> {
        self.docs.get(id)
    }

    pub fn postings(&self, term: &str) -> Option<&[Posting]> {
        self.terms.get(term).map(Vec::as_slice)
    }

    /// Vocabulary terms that start with `prefix`, in sorted order.
    pub fn terms_with_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a [Posting])> + 'a {
        self.terms
            .range::<str, _>((std::ops::Bound::Included(prefix), std::ops::Bound::Unbounded))
            .take_while(move |(term, _)| term.starts_with(prefix))
            .map(|(term, postings)| (term.as_str(), postings.as_slice()))
    }

    pub fn vocabulary(&self) -> impl Iterator<Item = (&str, &[Posting])> {
        self.terms
            .iter()
            .map(|(term, postings)| (term.as_str(), postings.as_slice()))
    }
}
