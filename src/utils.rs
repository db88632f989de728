// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization shared by the artifact check and the query engine.
//!
//! The external index builder and this crate must fold text the same way, or a
//! term that exists in the artifact can never be typed. Both sides lowercase,
//! strip diacritics, and split on anything that is not alphanumeric.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Fold a string for matching: lowercase, strip diacritics, collapse whitespace.
///
/// - "Café" → "cafe"
/// - "  Getting   Started " → "getting started"
/// - "검색" → "검색" (recomposed after stripping, so syllables survive)
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    let folded: String = value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .nfc()
        .flat_map(char::to_lowercase)
        .collect();
    collapse_whitespace(&folded)
}

/// Lightweight normalization without the decomposition tables.
/// Lowercases and collapses whitespace; assumes the artifact was built the same way.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    collapse_whitespace(&value.to_lowercase())
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Word boundary detection: anything that is not alphanumeric separates terms.
#[inline]
fn is_word_boundary(c: char) -> bool {
    !c.is_alphanumeric()
}

/// Split text into normalized terms, in order, duplicates kept.
///
/// This is the tokenization the artifact's vocabulary is expected to use.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split(is_word_boundary)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a query into normalized terms, dropping duplicates but keeping order.
///
/// # Example
///
/// ```
/// use navsieve::parse_query;
///
/// assert_eq!(parse_query("Install, install GUIDE"), vec!["install", "guide"]);
/// assert!(parse_query("  --  ").is_empty());
/// ```
pub fn parse_query(query: &str) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    for term in tokenize(query) {
        if !terms.contains(&term) {
            terms.push(term);
        }
    }
    terms
}
