// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 jenkinsgen contributors

//! Jenkins pipeline generation
//!
//! Holds the built-in Jenkinsfile templates and the renderer that fills
//! them from a list of versions.

mod renderer;
pub mod templates;

pub use renderer::{PipelineRenderer, RenderedPipeline};
