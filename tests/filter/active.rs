//! Marking the article being read and its enclosing groups.

use crate::common::{book_tree, node};
use navsieve::{apply, FilterState};

#[test]
fn active_groups_outermost_first() {
    let mut tree = book_tree();
    let active = tree.set_active("guide/advanced/plugins.html");
    assert_eq!(active, Some(node(&tree, "guide/advanced/plugins.html")));

    let groups = tree.active_groups();
    let labels: Vec<&str> = groups
        .iter()
        .filter_map(|&id| tree.node(id))
        .map(|n| n.label())
        .collect();
    assert_eq!(labels, vec!["Guide", "Advanced"]);
}

#[test]
fn top_level_article_has_no_active_groups() {
    let mut tree = book_tree();
    tree.set_active("guide/index.html");
    assert!(tree.active_groups().is_empty());
}

#[test]
fn active_marking_survives_filtering() {
    let mut tree = book_tree();
    tree.set_active("reference/cli.html");
    apply(&mut tree, &FilterState::Filtered(Default::default()));
    apply(&mut tree, &FilterState::Unfiltered);
    assert_eq!(tree.active(), Some(node(&tree, "reference/cli.html")));
    assert_eq!(tree.active_groups().len(), 1);
}

#[test]
fn unknown_article_clears_mark() {
    let mut tree = book_tree();
    tree.set_active("reference/cli.html");
    assert_eq!(tree.set_active("404.html"), None);
    assert!(tree.active().is_none());
    let reference = tree.roots()[1];
    assert!(!tree.is_active_ancestor(reference));
}
