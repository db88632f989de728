// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the navsieve command-line interface.
//!
//! Three subcommands, all against a built site directory: `search` runs a
//! query against the artifact, `filter` runs one keystroke through the whole
//! pipeline against an outline, and `inspect` summarizes the artifact.

pub mod commands;
pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "navsieve",
    about = "Search-driven navigation filter for static documentation sites",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Query the site's search index and print ranked matches
    Search {
        /// Built site directory (the artifact lives under it)
        site: PathBuf,

        /// Search query, as typed into the search box
        query: String,

        /// Base path the site is served under (the data-basepath value)
        #[arg(short, long)]
        base_path: Option<String>,

        /// Maximum number of matches to return
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Filter a navigation outline with a query and print the resulting tree
    Filter {
        /// Built site directory
        site: PathBuf,

        /// JSON outline file (array of {label, path, children})
        #[arg(short, long)]
        outline: PathBuf,

        /// Search query
        query: String,

        /// Base path the site is served under
        #[arg(short, long)]
        base_path: Option<String>,
    },

    /// Print statistics for the site's search index
    Inspect {
        /// Built site directory
        site: PathBuf,

        /// Base path the site is served under
        #[arg(short, long)]
        base_path: Option<String>,
    },
}
