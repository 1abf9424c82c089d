// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 jenkinsgen contributors

//! Template re-indentation
//!
//! Templates are written in source at a comfortable 4-space depth and
//! re-indented to where they are embedded in the final output.

/// One indentation level
pub const INDENT_UNIT: &str = "  ";

/// Opening marker of a template slot
pub const PLACEHOLDER_OPEN: &str = "%(";

/// Re-indent `content` to `level` units of two spaces
///
/// Leading and trailing newlines are stripped and every 4-space run is
/// collapsed to 2 spaces before the prefix is added. Lines starting with a
/// slot are left unprefixed so that substituted blocks carry their own
/// indentation.
///
/// The collapse step also hits 4-space runs inside a line, so content that
/// relies on wide alignment is altered.
pub fn indent(level: usize, content: &str) -> String {
    let prefix = INDENT_UNIT.repeat(level);

    content
        .trim_matches('\n')
        .replace("    ", "  ")
        .lines()
        .map(|line| {
            if line.starts_with(PLACEHOLDER_OPEN) {
                line.to_string()
            } else {
                format!("{}{}", prefix, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
