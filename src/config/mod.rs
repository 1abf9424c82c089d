// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 jenkinsgen contributors

//! Generator configuration
//!
//! The built-in version list is the default; a YAML, TOML or JSON file can
//! replace it.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::errors::{GenError, GenResult};
use crate::versions::Version;

/// Built-in versions, in build order
///
/// Order is significant: the last entry owns `latest`, and the last entry
/// of each major/minor line owns that line's tags.
pub const DEFAULT_VERSIONS: &[&str] = &[
    "2.7.16",

    "3.5.3",
    "3.5.4",
    "3.5.5",
    "3.5.6",

    "3.6.0",
    "3.6.1",
    "3.6.2",
    "3.6.3",
    "3.6.4",
    "3.6.5",
    "3.6.6",
    "3.6.7",
    "3.6.8",

    "3.7.0",
    "3.7.1",
    "3.7.2",
    "3.7.3",
];

/// File name of the generated pipeline
pub const JENKINSFILE: &str = "Jenkinsfile";

/// Default output: the Jenkinsfile at the generator's project root
///
/// The project root is fixed at build time. A binary run away from its
/// source tree (e.g. after `cargo install` on another machine) finds no
/// such directory and falls back to `Jenkinsfile` in the current directory.
pub fn default_output_path() -> PathBuf {
    output_in_project_root(Path::new(env!("CARGO_MANIFEST_DIR")))
}

fn output_in_project_root(root: &Path) -> PathBuf {
    if root.is_dir() {
        root.join(JENKINSFILE)
    } else {
        PathBuf::from(JENKINSFILE)
    }
}

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Versions to build, in order
    pub versions: Vec<String>,

    /// Output path; relative paths are resolved against the config file
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            versions: DEFAULT_VERSIONS.iter().map(|v| v.to_string()).collect(),
            output: None,
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a file, picking the format by extension
    pub fn from_file(path: &Path) -> GenResult<Self> {
        if !path.exists() {
            return Err(GenError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| GenError::FileReadError {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let mut config = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&content)?,
            Some("toml") => Self::from_toml(&content)?,
            Some("json") => serde_json::from_str(&content)?,
            _ => {
                return Err(GenError::UnsupportedConfigFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        if let (Some(output), Some(base)) = (config.output.as_mut(), path.parent()) {
            if output.is_relative() {
                *output = base.join(&*output);
            }
        }

        debug!(path = %path.display(), versions = config.versions.len(), "loaded config");
        Ok(config)
    }

    /// Parse configuration from YAML
    pub fn from_yaml(yaml: &str) -> GenResult<Self> {
        serde_yaml::from_str(yaml).map_err(Into::into)
    }

    /// Parse configuration from TOML
    pub fn from_toml(toml: &str) -> GenResult<Self> {
        toml::from_str(toml).map_err(Into::into)
    }

    /// Load from `path` if given, otherwise use the built-in defaults
    pub fn load(path: Option<&Path>) -> GenResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse every configured version
    ///
    /// An empty list is valid and renders a pipeline without version stages.
    pub fn parse_versions(&self) -> GenResult<Vec<Version>> {
        Version::parse_all(&self.versions)
    }

    /// Output path: explicit override, then the config's `output`, then the default
    pub fn output_path(&self, override_path: Option<&Path>) -> PathBuf {
        override_path
            .map(Path::to_path_buf)
            .or_else(|| self.output.clone())
            .unwrap_or_else(default_output_path)
    }
}
