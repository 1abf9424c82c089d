// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 jenkinsgen contributors

//! Check command - verify the Jenkinsfile is up to date

use colored::Colorize;
use miette::Result;
use std::path::PathBuf;

use crate::config::GeneratorConfig;
use crate::errors::GenError;
use crate::pipeline::PipelineRenderer;
use crate::utils::{print_error, print_success};

/// Run the check command
pub fn run(config: Option<PathBuf>, output: Option<PathBuf>, verbose: bool) -> Result<()> {
    let config = GeneratorConfig::load(config.as_deref())?;
    let versions = config.parse_versions()?;
    let rendered = PipelineRenderer::new()?.render(&versions)?;

    let path = config.output_path(output.as_deref());

    if rendered.is_current(&path)? {
        print_success(&format!("{} is up to date", path.display()));
        if verbose {
            println!("  {}", format!("blake3 {}", rendered.digest()).dimmed());
        }
        Ok(())
    } else {
        print_error(&format!("{} differs from the generated pipeline", path.display()));
        Err(GenError::OutOfDate { path }.into())
    }
}
