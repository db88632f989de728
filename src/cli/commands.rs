// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Subcommand implementations.
//!
//! Unlike the page, the CLI does not swallow load failures: a missing or
//! malformed artifact is exactly what a developer running it wants to see.

use super::display::{
    flag, node_label, row, score_value, section_bot, section_top, themed, truncate_path, CYAN,
    GRAY,
};
use anyhow::{Context, Result};
use navsieve::search::tiered::search_scored;
use navsieve::{
    to_paths, DirSource, IndexSource, KeyEvent, NavNodeId, NavTree, OutlineEntry, SearchIndex,
    SearchOptions, Session, SiteConfig,
};
use std::path::Path;
use tracing::info;

fn load_index(site: &Path, base_path: Option<&str>) -> Result<SearchIndex> {
    let url = navsieve::index_url(base_path);
    let bytes = DirSource::new(site)
        .fetch(&url)
        .with_context(|| format!("no search index at {}{}", site.display(), url))?;
    let index = SearchIndex::from_json(&bytes).with_context(|| format!("bad artifact {}", url))?;
    info!(url = %url, docs = index.docs.len(), "index loaded");
    Ok(index)
}

pub fn run_search(
    site: &Path,
    query: &str,
    base_path: Option<&str>,
    limit: Option<usize>,
) -> Result<()> {
    let index = load_index(site, base_path)?;
    let options = SearchOptions {
        limit,
        ..SearchOptions::default()
    };
    let hits = search_scored(&index, query, &options);

    section_top(&format!("MATCHES for {:?}", query));
    if hits.is_empty() {
        row(&themed(GRAY, &[], " no matches"));
    }
    let mut refs = Vec::with_capacity(hits.len());
    for hit in &hits {
        if let Some(doc) = index.doc(hit.doc) {
            row(&format!(
                " {}  {}  {}",
                score_value(hit.score),
                truncate_path(doc.reference.as_str(), 40),
                themed(GRAY, &[], &truncate_path(&doc.title, 18))
            ));
            refs.push(doc.reference.clone());
        }
    }
    section_bot();

    section_top("PATHS");
    for path in to_paths(&refs) {
        row(&format!(" {}", path));
    }
    section_bot();
    Ok(())
}

pub fn run_filter(site: &Path, outline: &Path, query: &str, base_path: Option<&str>) -> Result<()> {
    let raw = std::fs::read(outline)
        .with_context(|| format!("failed to read outline {}", outline.display()))?;
    let entries: Vec<OutlineEntry> =
        serde_json::from_slice(&raw).context("outline is not a JSON array of entries")?;
    let tree = NavTree::from_outline(&entries)?;

    let config = SiteConfig {
        base_path: base_path.map(str::to_string),
        ..SiteConfig::default()
    };
    let mut session = Session::new(tree, config);
    let bytes = DirSource::new(site)
        .fetch(&session.index_url())
        .context("failed to read search index")?;
    anyhow::ensure!(
        session.finish_load(&bytes),
        "search index rejected: {}",
        session.handle().failure().unwrap_or_default()
    );

    let patch = session.handle_key(&KeyEvent::typed(query));
    let tree = session.tree();

    section_top(&format!("OUTLINE for {:?}", query));
    for &root in tree.roots() {
        print_node(tree, root);
    }
    section_bot();
    println!(
        " searched: {}   changed: {}   visible: {}/{}",
        flag(patch.searched.unwrap_or(false)),
        patch.visibility.len(),
        tree.visible().count(),
        tree.len()
    );
    Ok(())
}

fn print_node(tree: &NavTree, id: NavNodeId) {
    let Some(node) = tree.node(id) else {
        return;
    };
    let label = if node.label().is_empty() {
        node.path().unwrap_or("(untitled)")
    } else {
        node.label()
    };
    let path = node
        .path()
        .map(|p| themed(GRAY, &[], &format!("  {}", p)))
        .unwrap_or_default();
    row(&format!(
        " {}{}{}",
        "  ".repeat(node.depth()),
        node_label(label, node.is_visible()),
        path
    ));
    for &child in node.children() {
        print_node(tree, child);
    }
}

pub fn run_inspect(site: &Path, base_path: Option<&str>) -> Result<()> {
    let index = load_index(site, base_path)?;
    let stats = index.stats();

    section_top("SEARCH INDEX");
    row(&format!(" version    {}", themed(CYAN, &[], &index.version.to_string())));
    row(&format!(" documents  {}", stats.docs));
    row(&format!(" terms      {}", stats.terms));
    row(&format!(" postings   {}", stats.postings));
    let pages = to_paths(index.docs.iter().map(|d| &d.reference));
    row(&format!(" pages      {}", pages.len()));
    section_bot();
    Ok(())
}
