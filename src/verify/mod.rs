// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: typed errors and artifact checks.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Load-time validation** (`validate_index`) that rejects a malformed artifact
//!    before the query engine ever sees it.
//!
//! 2. **Runtime contracts** (`crate::contracts`) that panic in debug builds when the
//!    tree filter leaves a visible node under a hidden ancestor.

mod types;

pub use types::*;
