// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 jenkinsgen contributors

//! Utility modules
//!
//! Common utilities for the jenkinsgen CLI.

pub mod colors;

pub use colors::*;
