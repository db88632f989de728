//! Visibility scenarios on the book outline.

use crate::common::{book_tree, group, leaf, node, visible_names};
use navsieve::{apply, filter_state, search, FilterState, MatchRef, NavTree};
use std::collections::BTreeSet;

fn only(paths: &[&str]) -> FilterState {
    FilterState::Filtered(paths.iter().map(|p| p.to_string()).collect::<BTreeSet<_>>())
}

#[test]
fn nested_match_reveals_every_enclosing_group() {
    let mut tree = book_tree();
    apply(&mut tree, &only(&["guide/advanced/themes.html"]));
    assert_eq!(
        visible_names(&tree),
        vec!["guide/index.html", "Advanced", "guide/advanced/themes.html"]
    );
    assert!(tree.is_searched());
}

#[test]
fn group_page_match_keeps_children_hidden() {
    let mut tree = book_tree();
    apply(&mut tree, &only(&["guide/index.html"]));
    assert_eq!(visible_names(&tree), vec!["guide/index.html"]);
}

#[test]
fn matches_across_groups() {
    let mut tree = book_tree();
    apply(&mut tree, &only(&["guide/config.html", "reference/cli.html"]));
    assert_eq!(
        visible_names(&tree),
        vec![
            "guide/index.html",
            "guide/config.html",
            "Reference",
            "reference/cli.html",
        ]
    );
}

#[test]
fn no_matches_hides_all_and_marks_searched() {
    let mut tree = book_tree();
    let changed = apply(&mut tree, &FilterState::Filtered(BTreeSet::new()));
    assert_eq!(changed.len(), tree.len());
    assert_eq!(tree.visible().count(), 0);
    assert!(tree.is_searched());
}

#[test]
fn unfiltered_clears_marker_and_restores() {
    let mut tree = book_tree();
    apply(&mut tree, &only(&["reference/glossary.html"]));
    apply(&mut tree, &FilterState::Unfiltered);
    assert_eq!(tree.visible().count(), tree.len());
    assert!(!tree.is_searched());
}

#[test]
fn only_changed_nodes_are_reported() {
    let mut tree = book_tree();
    apply(&mut tree, &only(&["guide/install.html"]));
    let changed = apply(&mut tree, &only(&["guide/config.html"]));
    assert_eq!(
        changed,
        vec![
            node(&tree, "guide/install.html"),
            node(&tree, "guide/config.html"),
        ]
    );
}

#[test]
fn search_results_drive_the_filter() {
    let mut tree = book_tree();
    let handle = crate::common::ready_handle();
    let matches: Vec<MatchRef> = search(&handle, "installing");
    apply(&mut tree, &filter_state(&matches));
    assert_eq!(
        visible_names(&tree),
        vec!["guide/index.html", "guide/install.html"]
    );
}

#[test]
fn empty_outline_is_fine() {
    let mut tree = NavTree::from_outline(&[]).unwrap();
    assert!(apply(&mut tree, &only(&["x"])).is_empty());
    assert!(tree.is_searched());
}

#[test]
fn empty_group_hides_under_any_filter() {
    let mut tree = NavTree::from_outline(&[group("Empty", vec![]), leaf("x")]).unwrap();
    apply(&mut tree, &only(&["x"]));
    assert_eq!(visible_names(&tree), vec!["x"]);
}
