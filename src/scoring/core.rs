// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind match ranking.
//!
//! Field type dominates everything else. A title match reached through a fuzzy
//! expansion still beats an exact content match. The constants are chosen so
//! that the largest term-frequency bonus can never close the gap between two
//! adjacent fields.
//!
//! # Constants
//!
//! | Field   | Score | Why this value |
//! |---------|-------|----------------|
//! | Title   | 100.0 | Dominates heading even with the worst tier multiplier |
//! | Heading | 10.0  | Dominates content even with the worst tier multiplier |
//! | Content | 1.0   | Baseline |
//! | MaxTf   | 0.5   | Small relative to field gaps - can't invert hierarchy |

use crate::types::{FieldType, Posting};

/// Base score for Title field matches.
pub const TITLE_BASE_SCORE: f64 = 100.0;

/// Base score for Heading field matches.
pub const HEADING_BASE_SCORE: f64 = 10.0;

/// Base score for Content field matches.
pub const CONTENT_BASE_SCORE: f64 = 1.0;

/// Upper bound on the term-frequency bonus, approached as `tf` grows.
pub const MAX_TF_BONUS: f64 = 0.5;

/// Tier multiplier for an exact vocabulary hit.
pub const EXACT_MULTIPLIER: f64 = 1.0;

/// Tier multiplier when the query term is a prefix of the vocabulary term.
pub const PREFIX_MULTIPLIER: f64 = 0.5;

/// Tier multipliers for fuzzy hits by edit distance.
pub const FUZZY_DISTANCE_1_MULTIPLIER: f64 = 0.3;
pub const FUZZY_DISTANCE_2_MULTIPLIER: f64 = 0.15;

/// Largest edit distance the fuzzy tier will ever consider.
pub const MAX_EDIT_DISTANCE: usize = 2;

// Field dominance must survive the weakest tier multiplier.
const _: () = {
    const WORST_TITLE: f64 = TITLE_BASE_SCORE * FUZZY_DISTANCE_2_MULTIPLIER;
    const BEST_HEADING: f64 = (HEADING_BASE_SCORE + MAX_TF_BONUS) * EXACT_MULTIPLIER;
    assert!(WORST_TITLE > BEST_HEADING);
};

/// How a vocabulary term was reached from a query term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    Exact,
    Prefix,
    Fuzzy { distance: usize },
}

impl MatchTier {
    pub fn multiplier(self) -> f64 {
        match self {
            MatchTier::Exact => EXACT_MULTIPLIER,
            MatchTier::Prefix => PREFIX_MULTIPLIER,
            MatchTier::Fuzzy { distance: 0 | 1 } => FUZZY_DISTANCE_1_MULTIPLIER,
            MatchTier::Fuzzy { .. } => FUZZY_DISTANCE_2_MULTIPLIER,
        }
    }
}

/// Base score by field type: Title (100) > Heading (10) > Content (1).
#[inline]
pub fn field_type_score(field_type: &FieldType) -> f64 {
    match field_type {
        FieldType::Title => TITLE_BASE_SCORE,
        FieldType::Heading => HEADING_BASE_SCORE,
        FieldType::Content => CONTENT_BASE_SCORE,
    }
}

/// Diminishing bonus for repeated occurrences: 0 for `tf <= 1`, approaching `MAX_TF_BONUS`.
#[inline]
pub fn tf_bonus(tf: u32) -> f64 {
    if tf <= 1 {
        return 0.0;
    }
    MAX_TF_BONUS * (1.0 - 1.0 / f64::from(tf))
}

/// Score a single posting reached through `tier`.
pub fn score_posting(posting: &Posting, tier: MatchTier) -> f64 {
    (field_type_score(&posting.field) + tf_bonus(posting.tf)) * tier.multiplier()
}
