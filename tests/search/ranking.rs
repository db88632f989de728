//! Ordering of matches: field hierarchy, tier fall-off, and determinism.

use crate::common::{book_index, ready_handle};
use navsieve::search::tiered::search_scored;
use navsieve::{search, SearchOptions};

fn refs(query: &str) -> Vec<String> {
    search(&ready_handle(), query)
        .into_iter()
        .map(|m| m.to_string())
        .collect()
}

#[test]
fn title_match_beats_content_match() {
    let hits = refs("guide");
    assert_eq!(hits[0], "guide/index.html");
    assert!(hits.contains(&"reference/glossary.html".to_string()));
}

#[test]
fn heading_match_beats_content_match() {
    let hits = refs("serve");
    assert_eq!(hits, vec!["reference/cli.html#serve"]);

    // two heading hits tie and keep document order; the body-only hit trails
    let hits = refs("build");
    assert_eq!(
        hits,
        vec![
            "guide/install.html#source",
            "reference/cli.html#build",
            "guide/config.html",
        ]
    );
}

#[test]
fn ties_break_by_document_order() {
    let index = book_index();
    let hits = search_scored(&index, "installing", &SearchOptions::default());
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].score, hits[1].score);
    assert!(hits[0].doc < hits[1].doc);
}

#[test]
fn same_query_same_order() {
    for query in ["book", "build", "the", "config", "instal"] {
        assert_eq!(refs(query), refs(query), "query {:?}", query);
    }
}

#[test]
fn multi_term_query_is_any_term() {
    let hits = refs("plugins glossary");
    assert_eq!(hits.len(), 2);
    assert!(hits.contains(&"guide/advanced/plugins.html".to_string()));
    assert!(hits.contains(&"reference/glossary.html".to_string()));
}
