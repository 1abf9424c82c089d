// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 jenkinsgen contributors

//! Tags command - show which version owns each image tag

use colored::Colorize;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use super::OutputFormat;
use crate::config::GeneratorConfig;
use crate::versions::TagMap;

/// Run the tags command
pub fn run(config: Option<PathBuf>, format: OutputFormat, verbose: bool) -> Result<()> {
    let config = GeneratorConfig::load(config.as_deref())?;
    let versions = config.parse_versions()?;
    let tags = TagMap::from_versions(&versions);

    let output = match format {
        OutputFormat::Text => format_text(&tags),
        OutputFormat::Json => serde_json::to_string_pretty(&tags).into_diagnostic()?,
    };

    println!("{}", output);

    // Summary on stderr so JSON output stays parseable
    if verbose {
        eprintln!(
            "  {} {} tags owned by {} of {} versions",
            "→".blue(),
            tags.len(),
            tags.by_version().versions().count(),
            versions.len()
        );
    }

    Ok(())
}

/// One `tag -> version` line per tag, sorted by tag
pub fn format_text(tags: &TagMap) -> String {
    tags.iter()
        .map(|(tag, version)| format!("{} -> {}", tag, version))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::versions::Version;

    #[test]
    fn test_format_text() {
        let versions = Version::parse_all(&["3.7.2", "3.7.3"]).unwrap();
        let text = format_text(&TagMap::from_versions(&versions));

        insta::assert_snapshot!(text, @r###"
        3 -> 3.7.3
        3.7 -> 3.7.3
        3.7.2 -> 3.7.2
        3.7.3 -> 3.7.3
        latest -> 3.7.3
        "###);
    }

    #[test]
    fn test_json_is_a_flat_object() {
        let versions = Version::parse_all(&["2.7.16"]).unwrap();
        let json = serde_json::to_value(TagMap::from_versions(&versions)).unwrap();

        assert_eq!(json["latest"], "2.7.16");
        assert_eq!(json["2.7"], "2.7.16");
        assert_eq!(json.as_object().map(|o| o.len()), Some(4));
    }
}
