// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how matches get their numbers and their order.
//!
//! Field type (title vs. heading vs. content) dominates everything else,
//! including how the term was reached (exact, prefix, fuzzy).

mod core;
pub mod ranking;

pub use core::*;
