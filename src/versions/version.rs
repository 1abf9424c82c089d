// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 jenkinsgen contributors

//! Version parsing

use std::fmt;

use crate::errors::{GenError, GenResult};

/// Floating tag that always follows the last configured version
pub const LATEST_TAG: &str = "latest";

/// A `MAJOR.MINOR.PATCH` version string
///
/// Components are kept as strings; versions are never compared numerically.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    raw: String,
    // Byte offsets of the two separating dots
    first_dot: usize,
    last_dot: usize,
}

impl Version {
    /// Parse a version string, requiring exactly three dot-separated components
    pub fn parse(raw: &str) -> GenResult<Self> {
        let dots: Vec<usize> = raw.match_indices('.').map(|(i, _)| i).collect();

        match dots.as_slice() {
            [first_dot, last_dot] => Ok(Self {
                raw: raw.to_string(),
                first_dot: *first_dot,
                last_dot: *last_dot,
            }),
            _ => Err(GenError::MalformedVersion {
                version: raw.to_string(),
                components: dots.len() + 1,
            }),
        }
    }

    /// Parse every entry of a list, failing on the first malformed one
    pub fn parse_all<S: AsRef<str>>(raw: &[S]) -> GenResult<Vec<Self>> {
        raw.iter().map(|v| Self::parse(v.as_ref())).collect()
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn major(&self) -> &str {
        &self.raw[..self.first_dot]
    }

    pub fn minor(&self) -> &str {
        &self.raw[self.first_dot + 1..self.last_dot]
    }

    pub fn patch(&self) -> &str {
        &self.raw[self.last_dot + 1..]
    }

    /// Everything before the last dot, e.g. `3.7` for `3.7.3`
    pub fn major_minor(&self) -> &str {
        &self.raw[..self.last_dot]
    }

    /// The four tags this version claims: full version, major.minor, major, latest
    ///
    /// Order matters to [`TagMap`](super::TagMap): later versions overwrite
    /// earlier ones tag by tag.
    pub fn tags(&self) -> [&str; 4] {
        [self.as_str(), self.major_minor(), self.major(), LATEST_TAG]
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl std::str::FromStr for Version {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
