// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{commands, Cli, Commands};

/// Env var holding the log filter, e.g. `NAVSIEVE_LOG=navsieve=debug`.
const LOG_ENV: &str = "NAVSIEVE_LOG";

fn init_logging() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            site,
            query,
            base_path,
            limit,
        } => commands::run_search(&site, &query, base_path.as_deref(), limit),
        Commands::Filter {
            site,
            outline,
            query,
            base_path,
        } => commands::run_filter(&site, &outline, &query, base_path.as_deref()),
        Commands::Inspect { site, base_path } => {
            commands::run_inspect(&site, base_path.as_deref())
        }
    }
}
