//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

use navsieve::testing::IndexFixture;
use navsieve::{
    IndexHandle, NavNodeId, NavTree, OutlineEntry, SearchIndex, Session, SiteConfig,
};
use std::sync::Arc;

pub use navsieve::testing::{group, leaf};

// ============================================================================
// FIXTURES
// ============================================================================

/// A small book: a guide with nested chapters and a reference section.
///
/// ```text
/// 0  Guide                      (guide/index.html)
/// 1    Installing               guide/install.html
/// 2    Configuring              guide/config.html
/// 3    Advanced
/// 4      Plugins                guide/advanced/plugins.html
/// 5      Themes                 guide/advanced/themes.html
/// 6  Reference
/// 7    CLI                      reference/cli.html
/// 8    Glossary                 reference/glossary.html
/// ```
pub fn book_outline() -> Vec<OutlineEntry> {
    vec![
        group(
            "Guide",
            vec![
                OutlineEntry::leaf("guide/install.html", "Installing"),
                OutlineEntry::leaf("guide/config.html", "Configuring"),
                group(
                    "Advanced",
                    vec![
                        OutlineEntry::leaf("guide/advanced/plugins.html", "Plugins"),
                        OutlineEntry::leaf("guide/advanced/themes.html", "Themes"),
                    ],
                ),
            ],
        )
        .with_path("guide/index.html"),
        group(
            "Reference",
            vec![
                OutlineEntry::leaf("reference/cli.html", "CLI"),
                OutlineEntry::leaf("reference/glossary.html", "Glossary"),
            ],
        ),
    ]
}

pub fn book_fixture() -> IndexFixture {
    IndexFixture::new()
        .doc("guide/index.html", "User Guide", "everything you need to write a book")
        .doc("guide/install.html#binaries", "Installing", "download prebuilt binaries")
        .heading("Prebuilt binaries")
        .doc("guide/install.html#source", "Installing", "build from source with cargo")
        .heading("Build from source")
        .doc("guide/config.html", "Configuring", "the book.toml file controls the build")
        .doc("guide/advanced/plugins.html", "Plugins", "preprocessors and renderers")
        .doc("guide/advanced/themes.html", "Themes", "override the default theme with css")
        .doc("reference/cli.html#build", "Command line", "the build command renders the book")
        .heading("build")
        .doc("reference/cli.html#serve", "Command line", "serve the book and rebuild on change")
        .heading("serve")
        .doc("reference/glossary.html", "Glossary", "terms used throughout this guide")
}

pub fn book_index() -> SearchIndex {
    book_fixture().build()
}

pub fn book_tree() -> NavTree {
    NavTree::from_outline(&book_outline()).expect("book outline is well formed")
}

pub fn ready_handle() -> IndexHandle {
    let handle = IndexHandle::new();
    handle
        .publish(Arc::new(book_index()))
        .expect("fresh handle accepts an index");
    handle
}

/// A session over the book with the index already loaded.
pub fn book_session() -> Session {
    Session::with_handle(book_tree(), SiteConfig::default(), ready_handle())
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Paths (or labels, for pathless groups) of every visible node.
pub fn visible_names(tree: &NavTree) -> Vec<String> {
    tree.visible()
        .filter_map(|id| tree.node(id))
        .map(|n| n.path().unwrap_or(n.label()).to_string())
        .collect()
}

pub fn node(tree: &NavTree, path: &str) -> NavNodeId {
    tree.find(path)
        .unwrap_or_else(|| panic!("no node for {}", path))
}
