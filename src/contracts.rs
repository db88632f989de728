// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the navigation filter and the ranking.
//!
//! Debug-mode assertions, no-ops in release builds. They check the
//! properties the rest of the crate relies on but never re-derives:
//!
//! | Contract Function           | Property                                        |
//! |-----------------------------|-------------------------------------------------|
//! | `check_preorder`            | every parent id is smaller than its children's  |
//! | `check_ancestors_visible`   | a visible node never sits under a hidden parent |
//! | `check_ranking_order`       | score descending, ties by document order        |
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! The filter's reverse-order propagation is only correct if `check_preorder`
//! holds. Weakening either tree check hides real bugs in the two-pass filter.

use crate::tree::NavTree;
use crate::types::ScoredMatch;

// ============================================================================
// TREE CONTRACTS
// ============================================================================

/// Check that node ids are a pre-order numbering of the outline.
///
/// # Panics (debug builds only)
/// Panics if some node's parent id is not smaller than its own id.
#[inline]
pub fn check_preorder(tree: &NavTree) {
    debug_assert!(
        tree.nodes()
            .all(|(id, node)| node.parent().map_or(true, |parent| parent < id)),
        "Contract violation: navigation tree ids are not in pre-order"
    );
}

/// Check that visibility is closed under the parent relation.
///
/// # Panics (debug builds only)
/// Panics if a visible node has a hidden parent.
#[inline]
pub fn check_ancestors_visible(tree: &NavTree) {
    if cfg!(debug_assertions) {
        check_preorder(tree);
        for (id, node) in tree.nodes() {
            if let (true, Some(parent)) = (node.is_visible(), node.parent()) {
                debug_assert!(
                    tree.is_visible(parent),
                    "Contract violation: node {:?} is visible but its parent {:?} is hidden",
                    id,
                    parent
                );
            }
        }
    }
}

// ============================================================================
// RANKING CONTRACTS
// ============================================================================

/// Check that ranked hits are in final order.
///
/// # Panics (debug builds only)
/// Panics if a hit outranks the one before it, or ties with it out of
/// document order.
#[inline]
pub fn check_ranking_order(hits: &[ScoredMatch]) {
    if cfg!(debug_assertions) {
        for pair in hits.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            debug_assert!(
                a.score > b.score || (a.score == b.score && a.doc < b.doc),
                "Contract violation: hit {:?} ranked before {:?}",
                a,
                b
            );
        }
    }
}
