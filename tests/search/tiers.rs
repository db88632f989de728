//! Exact, prefix, and fuzzy tiers through the public engine.

use crate::common::ready_handle;
use navsieve::{QueryEngine, SearchOptions};

fn engine(options: SearchOptions) -> QueryEngine {
    QueryEngine::new(ready_handle(), options)
}

#[test]
fn partial_word_finds_page_while_typing() {
    let engine = engine(SearchOptions::default());
    for typed in ["g", "gl", "glo", "glos", "gloss", "glossary"] {
        let hits = engine.search(typed);
        assert!(
            hits.iter().any(|m| m.path() == "reference/glossary.html"),
            "lost glossary at {:?}",
            typed
        );
    }
}

#[test]
fn typo_is_tolerated() {
    let engine = engine(SearchOptions::default());
    let hits = engine.search("plugnis");
    assert!(hits.is_empty(), "transposition is two edits");

    let hits = engine.search("pluguns");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].path(), "guide/advanced/plugins.html");
}

#[test]
fn wider_distance_reaches_transpositions() {
    let engine = engine(SearchOptions {
        max_distance: 2,
        ..SearchOptions::default()
    });
    let hits = engine.search("plugnis");
    assert_eq!(hits[0].path(), "guide/advanced/plugins.html");
}

#[test]
fn exact_only_mode() {
    let engine = engine(SearchOptions {
        prefix: false,
        fuzzy: false,
        ..SearchOptions::default()
    });
    assert!(engine.search("glos").is_empty());
    assert_eq!(engine.search("glossary").len(), 1);
}

#[test]
fn limit_caps_results() {
    let engine = engine(SearchOptions {
        limit: Some(2),
        ..SearchOptions::default()
    });
    assert_eq!(engine.search("the").len(), 2);
}
