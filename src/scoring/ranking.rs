// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored matches get sorted.
//!
//! Sort order:
//! 1. **Score** - descending
//! 2. **Doc order** - ascending position in the artifact, so equal scores
//!    always come back in the same order for the same index

use crate::types::ScoredMatch;
use std::cmp::Ordering;

/// Compare two scored matches for ranking.
pub fn compare_matches(a: &ScoredMatch, b: &ScoredMatch) -> Ordering {
    b.score.total_cmp(&a.score).then(a.doc.cmp(&b.doc))
}
