// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The navigation tree and the visibility filter over it.
//!
//! Nodes live in an arena in pre-order: a node's id is its position in
//! document order, so every parent id is smaller than its children's. That
//! one property makes the filter two linear passes:
//!
//! ```text
//! pass 1 (any order)    : every node hidden unless its own path is allowed
//! pass 2 (reverse order): a visible node makes its parent visible
//! ```
//!
//! Reverse id order visits all children before their parent, so by the time
//! a group is reached its final visibility is known and propagates upward.
//! Nothing from the previous filter survives pass 1.

use crate::contracts::check_ancestors_visible;
use crate::types::{FilterState, NavNodeId};
use crate::verify::TreeError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// One entry of the site outline, as the host hands it over.
///
/// A leaf links to a document; a group holds children. A group may also link
/// to a document of its own (a chapter index page).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineEntry {
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<OutlineEntry>,
}

impl OutlineEntry {
    pub fn leaf(path: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: Some(path.into()),
            children: Vec::new(),
        }
    }

    pub fn group(label: impl Into<String>, children: Vec<OutlineEntry>) -> Self {
        Self {
            label: label.into(),
            path: None,
            children,
        }
    }

    /// Give this entry a document of its own.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

#[derive(Debug, Clone)]
pub struct NavNode {
    label: String,
    path: Option<String>,
    parent: Option<NavNodeId>,
    children: Vec<NavNodeId>,
    depth: usize,
    visible: bool,
}

impl NavNode {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn parent(&self) -> Option<NavNodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NavNodeId] {
        &self.children
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// The site outline with per-node visibility.
///
/// Built once per page. Only [`NavTree::apply`] changes visibility, and only
/// [`NavTree::set_active`] changes the active article.
#[derive(Debug, Clone, Default)]
pub struct NavTree {
    nodes: Vec<NavNode>,
    roots: Vec<NavNodeId>,
    by_path: HashMap<String, NavNodeId>,
    searched: bool,
    active: Option<NavNodeId>,
}

impl NavTree {
    /// Build the arena from the outline. Everything starts visible.
    ///
    /// Paths must be non-empty and unique across the whole outline.
    pub fn from_outline(entries: &[OutlineEntry]) -> Result<Self, TreeError> {
        let mut tree = NavTree::default();
        for entry in entries {
            let id = tree.push(entry, None, 0)?;
            tree.roots.push(id);
        }
        debug!(nodes = tree.nodes.len(), roots = tree.roots.len(), "navigation tree built");
        Ok(tree)
    }

    fn push(
        &mut self,
        entry: &OutlineEntry,
        parent: Option<NavNodeId>,
        depth: usize,
    ) -> Result<NavNodeId, TreeError> {
        let id = NavNodeId::from(self.nodes.len());
        if let Some(path) = &entry.path {
            if path.is_empty() {
                return Err(TreeError::EmptyPath { node: id });
            }
            if let Some(&first) = self.by_path.get(path) {
                return Err(TreeError::DuplicatePath {
                    path: path.clone(),
                    first,
                    second: id,
                });
            }
            self.by_path.insert(path.clone(), id);
        }
        self.nodes.push(NavNode {
            label: entry.label.clone(),
            path: entry.path.clone(),
            parent,
            children: Vec::with_capacity(entry.children.len()),
            depth,
            visible: true,
        });

        for child in &entry.children {
            let child_id = self.push(child, Some(id), depth + 1)?;
            self.nodes[id.as_usize()].children.push(child_id);
        }
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NavNodeId) -> Option<&NavNode> {
        self.nodes.get(id.as_usize())
    }

    /// All nodes in document order.
    pub fn nodes(&self) -> impl Iterator<Item = (NavNodeId, &NavNode)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NavNodeId::from(i), node))
    }

    pub fn roots(&self) -> &[NavNodeId] {
        &self.roots
    }

    pub fn find(&self, path: &str) -> Option<NavNodeId> {
        self.by_path.get(path).copied()
    }

    pub fn is_visible(&self, id: NavNodeId) -> bool {
        self.node(id).is_some_and(NavNode::is_visible)
    }

    pub fn visible(&self) -> impl Iterator<Item = NavNodeId> + '_ {
        self.nodes().filter(|(_, n)| n.visible).map(|(id, _)| id)
    }

    /// True while a filter is in effect.
    pub fn is_searched(&self) -> bool {
        self.searched
    }

    /// Walk from `id`'s parent up to its root.
    pub fn ancestors(&self, id: NavNodeId) -> impl Iterator<Item = NavNodeId> + '_ {
        std::iter::successors(self.node(id).and_then(NavNode::parent), move |&p| {
            self.node(p).and_then(NavNode::parent)
        })
    }

    /// Recompute visibility for `state` and return the ids whose visibility
    /// changed, in document order.
    ///
    /// `Unfiltered` shows everything. `Filtered` shows a node when its own
    /// path is in the set or any descendant is shown; a node without a path
    /// and without shown descendants is hidden.
    pub fn apply(&mut self, state: &FilterState) -> Vec<NavNodeId> {
        let mut next: Vec<bool> = self
            .nodes
            .iter()
            .map(|node| state.allows(node.path.as_deref()))
            .collect();

        if state.is_filtered() {
            for i in (0..self.nodes.len()).rev() {
                if next[i] {
                    if let Some(parent) = self.nodes[i].parent {
                        next[parent.as_usize()] = true;
                    }
                }
            }
        }

        let mut changed = Vec::new();
        for (i, (node, visible)) in self.nodes.iter_mut().zip(next).enumerate() {
            if node.visible != visible {
                node.visible = visible;
                changed.push(NavNodeId::from(i));
            }
        }
        self.searched = state.is_filtered();

        check_ancestors_visible(self);
        debug!(
            searched = self.searched,
            changed = changed.len(),
            "filter applied"
        );
        changed
    }

    /// Mark the node for `path` as the article being read.
    ///
    /// Returns the node, or `None` (clearing the mark) when no node has that path.
    pub fn set_active(&mut self, path: &str) -> Option<NavNodeId> {
        self.active = self.find(path);
        self.active
    }

    pub fn active(&self) -> Option<NavNodeId> {
        self.active
    }

    /// Does `id` enclose the active article?
    pub fn is_active_ancestor(&self, id: NavNodeId) -> bool {
        self.active
            .is_some_and(|active| self.ancestors(active).any(|a| a == id))
    }

    /// Groups enclosing the active article, outermost first.
    pub fn active_groups(&self) -> Vec<NavNodeId> {
        let mut groups: Vec<NavNodeId> = match self.active {
            Some(active) => self.ancestors(active).collect(),
            None => Vec::new(),
        };
        groups.reverse();
        groups
    }
}

/// Free-function form of [`NavTree::apply`].
pub fn apply(tree: &mut NavTree, state: &FilterState) -> Vec<NavNodeId> {
    tree.apply(state)
}
