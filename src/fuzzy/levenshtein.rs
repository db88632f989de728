// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with early exits.
//!
//! `|len(a) - len(b)|` is a lower bound on edit distance, so most vocabulary
//! terms are rejected before the DP allocates. Within the DP, a row whose
//! minimum exceeds the bound can never recover, so we stop there too.

/// Edit distance between `a` and `b`, if it is at most `max`.
///
/// Counts Unicode scalar values, not bytes.
pub fn bounded_distance(a: &str, b: &str, max: usize) -> Option<usize> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.len().abs_diff(b.len()) > max {
        return None;
    }

    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ac) in a.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        let mut row_min = row[0];

        for (j, bc) in b.iter().enumerate() {
            let above = row[j + 1];
            let substitution = diagonal + usize::from(ac != bc);
            row[j + 1] = substitution.min(above + 1).min(row[j] + 1);
            diagonal = above;
            row_min = row_min.min(row[j + 1]);
        }

        if row_min > max {
            return None;
        }
    }

    let distance = row[b.len()];
    (distance <= max).then_some(distance)
}

/// Are these strings within `max` edits of each other?
#[inline]
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    bounded_distance(a, b, max).is_some()
}
