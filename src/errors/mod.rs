// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 jenkinsgen contributors

//! Error types for pipeline generation
//!
//! Every error is fatal: the generator either renders the whole pipeline
//! or writes nothing.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for jenkinsgen operations
pub type GenResult<T> = Result<T, GenError>;

/// Main error type for jenkinsgen
#[derive(Error, Debug, Diagnostic)]
pub enum GenError {
    // ─────────────────────────────────────────────────────────────────────────
    // Version Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("Malformed version '{version}': expected MAJOR.MINOR.PATCH, found {components} component(s)")]
    #[diagnostic(
        code(jenkinsgen::malformed_version),
        help("Versions are written as three dot-separated parts, e.g. 3.7.3")
    )]
    MalformedVersion { version: String, components: usize },

    // ─────────────────────────────────────────────────────────────────────────
    // Template Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("Invalid placeholder pattern: {message}")]
    #[diagnostic(code(jenkinsgen::invalid_pattern))]
    InvalidPattern { message: String },

    #[error("Unterminated placeholder at byte {offset}")]
    #[diagnostic(
        code(jenkinsgen::unterminated_placeholder),
        help("Placeholders are written as %(name)s")
    )]
    UnterminatedPlaceholder { offset: usize },

    #[error("Template slot '{slot}' has no binding")]
    #[diagnostic(code(jenkinsgen::missing_binding))]
    MissingBinding { slot: String },

    #[error("Binding '{binding}' is not used by the template")]
    #[diagnostic(
        code(jenkinsgen::unused_binding),
        help("Template slots: {slots}")
    )]
    UnusedBinding { binding: String, slots: String },

    // ─────────────────────────────────────────────────────────────────────────
    // Config Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("Config file not found: {path}")]
    #[diagnostic(code(jenkinsgen::config_not_found))]
    ConfigNotFound { path: PathBuf },

    #[error("Unsupported config format: {path}")]
    #[diagnostic(
        code(jenkinsgen::unsupported_config_format),
        help("Supported extensions: .yaml, .yml, .toml, .json")
    )]
    UnsupportedConfigFormat { path: PathBuf },

    // ─────────────────────────────────────────────────────────────────────────
    // File Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("Failed to read file '{path}': {error}")]
    #[diagnostic(code(jenkinsgen::file_read_error))]
    FileReadError { path: PathBuf, error: String },

    #[error("Failed to write file '{path}': {error}")]
    #[diagnostic(code(jenkinsgen::file_write_error))]
    FileWriteError { path: PathBuf, error: String },

    #[error("{path} is out of date")]
    #[diagnostic(
        code(jenkinsgen::out_of_date),
        help("Run 'jenkinsgen generate' to regenerate it")
    )]
    OutOfDate { path: PathBuf },

    // ─────────────────────────────────────────────────────────────────────────
    // Parse Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("YAML parsing error: {message}")]
    #[diagnostic(code(jenkinsgen::yaml_error))]
    Yaml { message: String },

    #[error("JSON parsing error: {message}")]
    #[diagnostic(code(jenkinsgen::json_error))]
    Json { message: String },

    #[error("TOML parsing error: {message}")]
    #[diagnostic(code(jenkinsgen::toml_error))]
    Toml { message: String },
}

impl From<serde_yaml::Error> for GenError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Yaml { message: e.to_string() }
    }
}

impl From<serde_json::Error> for GenError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json { message: e.to_string() }
    }
}

impl From<toml::de::Error> for GenError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml { message: e.to_string() }
    }
}

impl GenError {
    /// Create an unused binding error listing the slots the template does have
    pub fn unused_binding(binding: &str, slots: &[&str]) -> Self {
        Self::UnusedBinding {
            binding: binding.to_string(),
            slots: if slots.is_empty() {
                "(none)".to_string()
            } else {
                slots.join(", ")
            },
        }
    }
}
