// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 jenkinsgen contributors

//! Generate command - render and write the Jenkinsfile

use colored::Colorize;
use miette::Result;
use std::path::PathBuf;

use crate::config::GeneratorConfig;
use crate::pipeline::PipelineRenderer;
use crate::utils::{print_info, print_success};

/// Run the generate command
pub fn run(config: Option<PathBuf>, output: Option<PathBuf>, stdout: bool, verbose: bool) -> Result<()> {
    let config = GeneratorConfig::load(config.as_deref())?;
    let versions = config.parse_versions()?;

    // Render fully before touching the output file
    let rendered = PipelineRenderer::new()?.render(&versions)?;

    if stdout {
        print!("{}", rendered.content());
        return Ok(());
    }

    let path = config.output_path(output.as_deref());
    rendered.write_to(&path)?;

    print_success(&format!(
        "Wrote {} ({} stages)",
        path.display(),
        rendered.stage_count()
    ));

    if verbose {
        print_info(&format!("blake3 {}", rendered.digest().dimmed()));
        let tags = rendered.tags().by_version();
        for version in &versions {
            let owned = tags.tags_for(version.as_str());
            print_info(&format!("{} → [{}]", version, owned.join(", ")));
        }
    }

    Ok(())
}
