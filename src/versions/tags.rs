// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 jenkinsgen contributors

//! Tag derivation
//!
//! Every version claims four tags. Versions are processed in input order and
//! the last one to claim a tag keeps it, so `latest` belongs to the final
//! entry and `MAJOR` to the last entry with that major number.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use super::Version;

/// Tag → version mapping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagMap {
    tags: BTreeMap<String, String>,
}

impl TagMap {
    /// Derive tags for `versions`, strictly in the given order
    pub fn from_versions(versions: &[Version]) -> Self {
        let mut tags = BTreeMap::new();

        for version in versions {
            for tag in version.tags() {
                tags.insert(tag.to_string(), version.as_str().to_string());
            }
        }

        debug!(versions = versions.len(), tags = tags.len(), "derived image tags");
        Self { tags }
    }

    /// Version that owns `tag`
    pub fn get(&self, tag: &str) -> Option<&str> {
        self.tags.get(tag).map(String::as_str)
    }

    /// All (tag, version) pairs, sorted by tag
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tags.iter().map(|(t, v)| (t.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Invert into version → tags
    pub fn by_version(&self) -> VersionTags {
        let mut by_version: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for (tag, version) in &self.tags {
            by_version
                .entry(version.clone())
                .or_default()
                .push(tag.clone());
        }

        for tags in by_version.values_mut() {
            tags.sort();
        }

        VersionTags { by_version }
    }
}

/// Version → sorted tags, the inverse of [`TagMap`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionTags {
    by_version: BTreeMap<String, Vec<String>>,
}

impl VersionTags {
    /// Tags owned by `version`, sorted lexicographically
    ///
    /// Empty when every tag the version claimed was taken by a later entry.
    pub fn tags_for(&self, version: &str) -> &[String] {
        self.by_version
            .get(version)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Versions owning at least one tag
    pub fn versions(&self) -> impl Iterator<Item = &str> {
        self.by_version.keys().map(String::as_str)
    }
}
