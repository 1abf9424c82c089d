// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 jenkinsgen contributors

//! CLI command definitions and handlers
//!
//! Defines the command-line interface for jenkinsgen.

pub mod check;
pub mod generate;
pub mod tags;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Jenkinsfile generator
///
/// Renders one build/test/push stage per configured version.
#[derive(Parser, Debug)]
#[clap(
    name = "jenkinsgen",
    version,
    about = "Generate the declarative Jenkins pipeline for versioned image builds",
    long_about = None,
    after_help = "Examples:\n\
        jenkinsgen                             Regenerate the Jenkinsfile\n\
        jenkinsgen generate --stdout           Print the pipeline instead of writing it\n\
        jenkinsgen check                       Fail if the Jenkinsfile is out of date\n\
        jenkinsgen tags --format json          Show which version owns each tag\n\n\
        See 'jenkinsgen <command> --help' for more information on a specific command."
)]
pub struct Cli {
    /// Defaults to `generate`
    #[clap(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output
    #[clap(short, long, global = true)]
    pub verbose: bool,

    /// Change to directory before executing
    #[clap(short = 'C', long, global = true, value_name = "DIR")]
    pub directory: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render and write the Jenkinsfile
    Generate {
        /// Version list (.yaml, .yml, .toml or .json); built-in list if omitted
        #[clap(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Output path (defaults to the project's Jenkinsfile)
        #[clap(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Print to stdout instead of writing the file
        #[clap(long)]
        stdout: bool,
    },

    /// Verify the Jenkinsfile matches what would be generated
    Check {
        /// Version list (.yaml, .yml, .toml or .json); built-in list if omitted
        #[clap(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Jenkinsfile to check (defaults to the project's Jenkinsfile)
        #[clap(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Show the tag → version mapping
    Tags {
        /// Version list (.yaml, .yml, .toml or .json); built-in list if omitted
        #[clap(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Output format
        #[clap(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Self::Generate {
            config: None,
            output: None,
            stdout: false,
        }
    }
}

/// Output format for the tags command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
