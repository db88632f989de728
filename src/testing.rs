// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It builds small artifacts and outlines in code so tests never depend on a
//! site build.

#![doc(hidden)]

use crate::index::{SearchIndex, INDEX_VERSION};
use crate::tree::{NavTree, OutlineEntry};
use crate::types::{FieldType, IndexDoc, MatchRef, Posting};
use crate::utils::tokenize;
use std::collections::BTreeMap;

struct FixtureDoc {
    reference: String,
    title: String,
    headings: Vec<String>,
    body: String,
}

/// Builds a well-formed [`SearchIndex`] from plain text.
///
/// Tokenizes the way the artifact builder is expected to, counts term
/// frequencies per field, and sorts postings by `(doc, field)`.
#[derive(Default)]
pub struct IndexFixture {
    docs: Vec<FixtureDoc>,
}

impl IndexFixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document. `title` feeds Title postings, `body` feeds Content.
    pub fn doc(mut self, reference: &str, title: &str, body: &str) -> Self {
        self.docs.push(FixtureDoc {
            reference: reference.to_string(),
            title: title.to_string(),
            headings: Vec::new(),
            body: body.to_string(),
        });
        self
    }

    /// Add a heading to the most recently added document.
    pub fn heading(mut self, text: &str) -> Self {
        if let Some(last) = self.docs.last_mut() {
            last.headings.push(text.to_string());
        }
        self
    }

    pub fn build(&self) -> SearchIndex {
        let mut counts: BTreeMap<String, BTreeMap<(u32, FieldType), u32>> = BTreeMap::new();
        for (doc, entry) in self.docs.iter().enumerate() {
            let doc = doc as u32;
            let fields = std::iter::once((FieldType::Title, entry.title.as_str()))
                .chain(entry.headings.iter().map(|h| (FieldType::Heading, h.as_str())))
                .chain(std::iter::once((FieldType::Content, entry.body.as_str())));
            for (field, text) in fields {
                for term in tokenize(text) {
                    *counts
                        .entry(term)
                        .or_default()
                        .entry((doc, field))
                        .or_insert(0) += 1;
                }
            }
        }

        let terms: BTreeMap<String, Vec<Posting>> = counts
            .into_iter()
            .map(|(term, postings)| {
                let postings = postings
                    .into_iter()
                    .map(|((doc, field), tf)| Posting { doc, field, tf })
                    .collect::<Vec<_>>();
                (term, postings)
            })
            .collect();

        SearchIndex {
            version: INDEX_VERSION,
            docs: self
                .docs
                .iter()
                .map(|d| IndexDoc {
                    reference: MatchRef::new(d.reference.as_str()),
                    title: d.title.clone(),
                })
                .collect(),
            terms,
        }
    }

    /// The built index as artifact bytes.
    pub fn to_json(&self) -> Vec<u8> {
        serde_json::to_vec(&self.build()).unwrap_or_default()
    }
}

/// Leaf entry linking to `path`, labelled with the path itself.
pub fn leaf(path: &str) -> OutlineEntry {
    OutlineEntry::leaf(path, path)
}

/// Group entry without a path of its own.
pub fn group(label: &str, children: Vec<OutlineEntry>) -> OutlineEntry {
    OutlineEntry::group(label, children)
}

/// Two groups, `a` with leaves `a/1` and `a/2`, `b` with leaf `b/1`.
///
/// Node ids: 0 = a, 1 = a/1, 2 = a/2, 3 = b, 4 = b/1.
pub fn sample_outline() -> Vec<OutlineEntry> {
    vec![
        group("a", vec![leaf("a/1"), leaf("a/2")]),
        group("b", vec![leaf("b/1")]),
    ]
}

pub fn sample_tree() -> NavTree {
    NavTree::from_outline(&sample_outline()).unwrap_or_default()
}

/// An artifact whose documents are the leaves of [`sample_outline`].
pub fn sample_index() -> IndexFixture {
    IndexFixture::new()
        .doc("a/1#top", "Getting started", "install the toolchain")
        .heading("Prerequisites")
        .doc("a/1#next", "Next steps", "write your first chapter")
        .doc("a/2", "Configuration", "the config file lives next to the book")
        .doc("b/1", "Deployment", "publish the rendered site")
}
