// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via bounded edit distance.

mod levenshtein;

pub use levenshtein::*;
