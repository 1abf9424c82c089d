// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 jenkinsgen contributors

//! Versions and image tags
//!
//! Parses `MAJOR.MINOR.PATCH` version strings and derives the tags each
//! built image is published under.

mod tags;
mod version;

pub use tags::{TagMap, VersionTags};
pub use version::{Version, LATEST_TAG};
