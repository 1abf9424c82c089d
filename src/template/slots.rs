// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 jenkinsgen contributors

//! Parsed templates and slot bindings

use regex::Regex;

use crate::errors::{GenError, GenResult};

// The name group is optional so that a bare opener is still found and
// reported as unterminated.
const PLACEHOLDER_PATTERN: &str = r"%\((?:([A-Za-z_][A-Za-z0-9_]*)\)s)?";

fn placeholder_pattern() -> GenResult<Regex> {
    Regex::new(PLACEHOLDER_PATTERN).map_err(|e| GenError::InvalidPattern {
        message: e.to_string(),
    })
}

/// A piece of a parsed template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text copied verbatim
    Literal(String),
    /// Named slot filled from [`Bindings`]
    Slot(String),
}

/// Template parsed into literal text and named slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse `%(name)s` placeholders out of `text`
    pub fn parse(text: &str) -> GenResult<Self> {
        let pattern = placeholder_pattern()?;
        let mut segments = Vec::new();
        let mut cursor = 0;

        for captures in pattern.captures_iter(text) {
            let Some(whole) = captures.get(0) else {
                continue;
            };
            let name = captures.get(1).ok_or(GenError::UnterminatedPlaceholder {
                offset: whole.start(),
            })?;

            if whole.start() > cursor {
                segments.push(Segment::Literal(text[cursor..whole.start()].to_string()));
            }
            segments.push(Segment::Slot(name.as_str().to_string()));
            cursor = whole.end();
        }

        if cursor < text.len() {
            segments.push(Segment::Literal(text[cursor..].to_string()));
        }

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Slot names in order of first appearance
    pub fn slots(&self) -> Vec<&str> {
        let mut slots: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if let Segment::Slot(name) = segment {
                if !slots.contains(&name.as_str()) {
                    slots.push(name);
                }
            }
        }
        slots
    }

    /// Fill every slot from `bindings`
    ///
    /// Fails if a slot has no binding or a binding fills no slot.
    pub fn render(&self, bindings: &Bindings) -> GenResult<String> {
        let slots = self.slots();

        if let Some((unused, _)) = bindings
            .iter()
            .find(|(name, _)| !slots.contains(name))
        {
            return Err(GenError::unused_binding(unused, &slots));
        }

        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Slot(name) => {
                    let value = bindings.get(name).ok_or_else(|| GenError::MissingBinding {
                        slot: name.clone(),
                    })?;
                    out.push_str(value);
                }
            }
        }

        Ok(out)
    }
}

/// Ordered slot name → value bindings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    values: Vec<(String, String)>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, replacing an earlier binding of the same name
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();

        match self.values.iter_mut().find(|(n, _)| *n == name) {
            Some(existing) => existing.1 = value,
            None => self.values.push((name, value)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}
