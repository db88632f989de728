// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Multi-term score merging.

use std::collections::HashMap;

/// Merge per-term score sets with OR semantics.
///
/// A document matching any term is included. Within one term a document keeps
/// its best score (a prefix expansion hitting the same document twice must not
/// count twice); across terms scores are summed, so documents matching more of
/// the query rise.
///
/// # Arguments
///
/// * `score_sets` - One `Vec<(doc, score)>` per query term
pub fn merge_any(score_sets: &[Vec<(usize, f64)>]) -> HashMap<usize, f64> {
    let mut totals: HashMap<usize, f64> = HashMap::new();
    let mut best: HashMap<usize, f64> = HashMap::new();

    for set in score_sets {
        best.clear();
        for &(doc, score) in set {
            best.entry(doc)
                .and_modify(|s| *s = s.max(score))
                .or_insert(score);
        }
        for (doc, score) in best.drain() {
            *totals.entry(doc).or_insert(0.0) += score;
        }
    }

    totals
}
