// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The index side of the pipeline: artifact, lifecycle, and loading.
//!
//! - **artifact**: `SearchIndex`, the decoded and validated `search_index.json`
//! - **handle**: `IndexHandle`, the write-once slot the query engine reads from
//! - **loader**: `IndexSource` plus the one-shot `load` that fills the slot
//!
//! The handle moves through `Uninitialized → Loading → Ready | Failed` exactly
//! once per page session. Nothing ever goes back to `Uninitialized`.

mod artifact;
mod handle;
mod loader;

pub use artifact::*;
pub use handle::*;
pub use loader::*;
