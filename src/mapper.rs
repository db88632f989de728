// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result mapping: from ranked match references to the set of document paths.
//!
//! The tree filter only cares which documents matched, not where in them or
//! in what order, so the fragment is dropped and duplicates collapse.

use crate::types::{FilterState, MatchRef};
use std::collections::BTreeSet;

/// Collect the path part of every reference.
///
/// Total: an empty input gives an empty set, a reference without `#` is a bare
/// path, and only the first `#` splits.
///
/// ```
/// use navsieve::{to_paths, MatchRef};
///
/// let refs: Vec<MatchRef> = ["docs/x#sec1", "docs/x#sec2", "docs/y"]
///     .into_iter()
///     .map(MatchRef::from)
///     .collect();
/// let paths = to_paths(&refs);
/// assert_eq!(paths.into_iter().collect::<Vec<_>>(), vec!["docs/x", "docs/y"]);
/// ```
pub fn to_paths<'a, I>(matches: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a MatchRef>,
{
    matches
        .into_iter()
        .map(|m| m.path().to_string())
        .collect()
}

/// The filter state for a query that ran: `Filtered`, even when nothing matched.
pub fn filter_state<'a, I>(matches: I) -> FilterState
where
    I: IntoIterator<Item = &'a MatchRef>,
{
    FilterState::Filtered(to_paths(matches))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(raw: &[&str]) -> Vec<MatchRef> {
        raw.iter().copied().map(MatchRef::from).collect()
    }

    #[test]
    fn empty_input_is_empty_set() {
        assert!(to_paths(&Vec::<MatchRef>::new()).is_empty());
    }

    #[test]
    fn fragments_collapse_onto_their_path() {
        let paths = to_paths(&refs(&["docs/x#sec1", "docs/x#sec2", "docs/y"]));
        assert_eq!(paths.len(), 2);
        assert!(paths.contains("docs/x"));
        assert!(paths.contains("docs/y"));
    }

    #[test]
    fn multiple_separators_split_once() {
        let paths = to_paths(&refs(&["a.html#b#c"]));
        assert_eq!(paths.into_iter().collect::<Vec<_>>(), vec!["a.html"]);
    }

    #[test]
    fn no_matches_is_still_filtered() {
        assert_eq!(
            filter_state(&Vec::<MatchRef>::new()),
            FilterState::Filtered(BTreeSet::new())
        );
    }
}
