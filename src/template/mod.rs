// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 jenkinsgen contributors

//! Text templates with named slots
//!
//! Templates are written with `%(name)s` placeholders, normalized with
//! [`indent`] and parsed into a [`Template`] so that a missing or unused
//! binding is a typed error instead of malformed output.

mod indent;
mod slots;

pub use indent::{indent, INDENT_UNIT, PLACEHOLDER_OPEN};
pub use slots::{Bindings, Segment, Template};
