// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 jenkinsgen contributors

//! # jenkinsgen - Jenkinsfile Generator
//!
//! `jenkinsgen` renders the declarative Jenkins pipeline that builds, tests,
//! tags and pushes one container image per configured version.
//!
//! ## Features
//!
//! - **Tag derivation** - Every version claims `X.Y.Z`, `X.Y`, `X` and `latest`;
//!   the last version in the list wins each tag
//! - **Strict templates** - Missing or unused slot bindings are errors, not
//!   malformed output
//! - **Deterministic output** - The same version list always yields the same bytes
//!
//! ## Quick Start
//!
//! ```bash
//! # Regenerate the Jenkinsfile from the built-in version list
//! jenkinsgen
//!
//! # Use a custom version list
//! jenkinsgen generate --config versions.yaml
//!
//! # Fail in CI when the committed Jenkinsfile is stale
//! jenkinsgen check
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod pipeline;
pub mod template;
pub mod utils;
pub mod versions;

// Re-export commonly used types
pub use config::GeneratorConfig;
pub use errors::{GenError, GenResult};
pub use pipeline::{PipelineRenderer, RenderedPipeline};
pub use versions::{TagMap, Version, VersionTags};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
