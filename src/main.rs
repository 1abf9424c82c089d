// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 jenkinsgen contributors

//! jenkinsgen - Jenkinsfile Generator
//!
//! Render the declarative Jenkins pipeline for versioned image builds.

use clap::Parser;
use miette::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jenkinsgen::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jenkinsgen=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    // Change to specified directory if provided
    if let Some(ref dir) = cli.directory {
        std::env::set_current_dir(dir).map_err(|e| {
            miette::miette!("Failed to change to directory '{}': {}", dir.display(), e)
        })?;
    }

    // Dispatch to command handlers
    match cli.command.unwrap_or_default() {
        Commands::Generate {
            config,
            output,
            stdout,
        } => jenkinsgen::cli::generate::run(config, output, stdout, cli.verbose),
        Commands::Check { config, output } => {
            jenkinsgen::cli::check::run(config, output, cli.verbose)
        }
        Commands::Tags { config, format } => {
            jenkinsgen::cli::tags::run(config, format, cli.verbose)
        }
    }
}
