// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The three-tier matcher: exact → prefix → fuzzy.
//!
//! Tier 1 (exact) is a map lookup. Tier 2 (prefix) is a range scan over the
//! sorted vocabulary: "inst" reaches "install" and "installer". Tier 3 (fuzzy)
//! walks the vocabulary with a bounded edit distance: "instal" reaches
//! "install". Each tier only sees vocabulary the earlier tiers did not claim,
//! and scores fall off by tier so an exact hit always outranks its typo.
//!
//! Typing a page title letter by letter therefore keeps the page in the result
//! set the whole way: the partial word is a prefix, the finished word is exact.

use super::utils::merge_any;
use crate::config::SearchOptions;
use crate::contracts::check_ranking_order;
use crate::fuzzy::bounded_distance;
use crate::index::SearchIndex;
use crate::scoring::ranking::compare_matches;
use crate::scoring::{score_posting, MatchTier};
use crate::types::{Posting, ScoredMatch};
use crate::utils::parse_query;

/// One vocabulary term reached from a query term.
#[derive(Debug, Clone, PartialEq)]
pub struct Expansion<'a> {
    pub term: &'a str,
    pub tier: MatchTier,
    pub postings: &'a [Posting],
}

/// Every vocabulary term a single (normalized) query term reaches, by tier.
pub fn expand_term<'a>(
    index: &'a SearchIndex,
    term: &'a str,
    options: &SearchOptions,
) -> Vec<Expansion<'a>> {
    let mut expansions = Vec::new();

    if let Some(postings) = index.postings(term) {
        expansions.push(Expansion {
            term,
            tier: MatchTier::Exact,
            postings,
        });
    }

    if options.prefix {
        expansions.extend(
            index
                .terms_with_prefix(term)
                .filter(|(candidate, _)| *candidate != term)
                .map(|(candidate, postings)| Expansion {
                    term: candidate,
                    tier: MatchTier::Prefix,
                    postings,
                }),
        );
    }

    let max_distance = options.effective_distance();
    if options.fuzzy && max_distance > 0 && term.chars().count() >= options.min_fuzzy_len {
        for (candidate, postings) in index.vocabulary() {
            if candidate == term || (options.prefix && candidate.starts_with(term)) {
                continue;
            }
            if let Some(distance) = bounded_distance(term, candidate, max_distance) {
                expansions.push(Expansion {
                    term: candidate,
                    tier: MatchTier::Fuzzy { distance },
                    postings,
                });
            }
        }
    }

    expansions
}

/// Ranked document hits for `query`.
///
/// Empty or punctuation-only queries have no terms and return nothing.
pub fn search_scored(index: &SearchIndex, query: &str, options: &SearchOptions) -> Vec<ScoredMatch> {
    let terms = parse_query(query);
    if terms.is_empty() {
        return Vec::new();
    }

    let score_sets: Vec<Vec<(usize, f64)>> = terms
        .iter()
        .map(|term| {
            expand_term(index, term, options)
                .iter()
                .flat_map(|expansion| {
                    expansion
                        .postings
                        .iter()
                        .map(move |p| (p.doc as usize, score_posting(p, expansion.tier)))
                })
                .collect()
        })
        .collect();

    let mut hits: Vec<ScoredMatch> = merge_any(&score_sets)
        .into_iter()
        .map(|(doc, score)| ScoredMatch { doc, score })
        .collect();
    hits.sort_by(compare_matches);
    check_ranking_order(&hits);

    if let Some(limit) = options.limit {
        hits.truncate(limit);
    }
    hits
}
