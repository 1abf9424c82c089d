// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 jenkinsgen contributors

//! Jenkinsfile rendering
//!
//! A single pass: derive tags, render one stage per version in input
//! order, embed the stages in the outer pipeline.

use std::path::Path;

use tracing::{debug, info};

use super::templates;
use crate::errors::{GenError, GenResult};
use crate::template::{indent, Bindings, Template};
use crate::versions::{TagMap, Version, VersionTags};

/// Renders the declarative pipeline for a list of versions
#[derive(Debug, Clone)]
pub struct PipelineRenderer {
    pipeline: Template,
    stage: Template,
    tag_push: Template,
    remove_image: Template,
}

impl PipelineRenderer {
    /// Build a renderer from the built-in templates
    pub fn new() -> GenResult<Self> {
        Ok(Self {
            pipeline: Template::parse(&indent(templates::PIPELINE_LEVEL, templates::PIPELINE))?,
            stage: Template::parse(&indent(templates::STAGE_LEVEL, templates::STAGE))?,
            tag_push: Template::parse(&indent(templates::TAG_PUSH_LEVEL, templates::TAG_PUSH))?,
            remove_image: Template::parse(&indent(
                templates::REMOVE_IMAGE_LEVEL,
                templates::REMOVE_IMAGE,
            ))?,
        })
    }

    /// Render the stage block of one version
    pub fn render_stage(&self, version: &Version, tags: &VersionTags) -> GenResult<String> {
        let tags = tags.tags_for(version.as_str());

        let push = self.render_per_tag(&self.tag_push, tags)?;
        let remove = self.render_per_tag(&self.remove_image, tags)?;

        debug!(version = %version, tags = tags.len(), "rendering stage");

        self.stage.render(
            &Bindings::new()
                .with("version", version.as_str())
                .with("major_minor", version.major_minor())
                .with("tags", push)
                .with("rmi_tags", remove),
        )
    }

    /// Render one stage block per version, in input order
    pub fn render_stages(&self, versions: &[Version]) -> GenResult<Vec<String>> {
        self.render_stages_with(versions, &TagMap::from_versions(versions).by_version())
    }

    /// Render the complete Jenkinsfile
    ///
    /// An empty version list yields a pipeline with an empty `parallel` block.
    pub fn render(&self, versions: &[Version]) -> GenResult<RenderedPipeline> {
        let tags = TagMap::from_versions(versions);
        let stages = self.render_stages_with(versions, &tags.by_version())?;

        let mut content = self
            .pipeline
            .render(&Bindings::new().with("stages", stages.join("\n")))?;
        content.push('\n');

        Ok(RenderedPipeline {
            content,
            stage_count: stages.len(),
            tags,
        })
    }

    fn render_stages_with(&self, versions: &[Version], tags: &VersionTags) -> GenResult<Vec<String>> {
        versions
            .iter()
            .map(|version| self.render_stage(version, tags))
            .collect()
    }

    fn render_per_tag(&self, template: &Template, tags: &[String]) -> GenResult<String> {
        let lines = tags
            .iter()
            .map(|tag| template.render(&Bindings::new().with("tag", tag.as_str())))
            .collect::<GenResult<Vec<_>>>()?;
        Ok(lines.join("\n"))
    }
}

/// A fully rendered Jenkinsfile
#[derive(Debug, Clone)]
pub struct RenderedPipeline {
    content: String,
    stage_count: usize,
    tags: TagMap,
}

impl RenderedPipeline {
    /// File contents, ending with exactly one newline
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn stage_count(&self) -> usize {
        self.stage_count
    }

    pub fn tags(&self) -> &TagMap {
        &self.tags
    }

    /// BLAKE3 hex digest of the contents
    pub fn digest(&self) -> String {
        blake3::hash(self.content.as_bytes()).to_hex().to_string()
    }

    /// Write the contents to `path` in one call, replacing any existing file
    pub fn write_to(&self, path: &Path) -> GenResult<()> {
        std::fs::write(path, &self.content).map_err(|e| GenError::FileWriteError {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        info!(path = %path.display(), stages = self.stage_count, "wrote Jenkinsfile");
        Ok(())
    }

    /// Whether `path` already holds exactly these contents
    pub fn is_current(&self, path: &Path) -> GenResult<bool> {
        match std::fs::read(path) {
            Ok(existing) => Ok(existing == self.content.as_bytes()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(GenError::FileReadError {
                path: path.to_path_buf(),
                error: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn render(raw: &[&str]) -> RenderedPipeline {
        let versions = Version::parse_all(raw).unwrap();
        PipelineRenderer::new().unwrap().render(&versions).unwrap()
    }

    #[test]
    fn test_single_version_stage() {
        let versions = Version::parse_all(&["2.7.16"]).unwrap();
        let renderer = PipelineRenderer::new().unwrap();
        let stages = renderer.render_stages(&versions).unwrap();

        assert_eq!(stages.len(), 1);
        let stage = &stages[0];
        assert!(stage.starts_with("        stage('2.7.16') {\n"));
        assert!(stage.contains("--file 2.7/stretch/Dockerfile"));

        let pushed: Vec<_> = stage
            .lines()
            .filter_map(|l| l.trim().strip_prefix("sh 'docker push $DOCKER_REGISTRY/python:"))
            .map(|l| l.trim_end_matches('\''))
            .collect();
        assert_eq!(pushed, vec!["2", "2.7", "2.7.16", "latest"]);
    }

    #[test]
    fn test_stage_order_follows_input() {
        let versions = Version::parse_all(&["3.7.3", "2.7.16", "3.6.8"]).unwrap();
        let stages = PipelineRenderer::new()
            .unwrap()
            .render_stages(&versions)
            .unwrap();

        assert_eq!(stages.len(), 3);
        assert!(stages[0].contains("stage('3.7.3')"));
        assert!(stages[1].contains("stage('2.7.16')"));
        assert!(stages[2].contains("stage('3.6.8')"));

        let content = render(&["3.7.3", "2.7.16", "3.6.8"]).content().to_string();
        let embedded = stages.join("\n");
        assert!(content.contains(&embedded));
    }

    #[test]
    fn test_overwritten_version_keeps_own_tag_only() {
        let rendered = render(&["3.7.2", "3.7.3"]);
        let content = rendered.content();

        assert_eq!(rendered.stage_count(), 2);
        assert_eq!(content.matches("docker push $DOCKER_REGISTRY/python:3.7.2'").count(), 1);
        assert_eq!(content.matches("docker push $DOCKER_REGISTRY/python:latest'").count(), 1);
        assert_eq!(rendered.tags().get("latest"), Some("3.7.3"));
    }

    #[test]
    fn test_trailing_newline() {
        let rendered = render(&["3.7.3"]);
        assert!(rendered.content().ends_with("}\n"));
        assert!(!rendered.content().ends_with("\n\n"));
    }

    #[test]
    fn test_deterministic() {
        let first = render(&["3.6.8", "3.7.0", "3.7.1"]);
        let second = render(&["3.6.8", "3.7.0", "3.7.1"]);
        assert_eq!(first.content(), second.content());
        assert_eq!(first.digest(), second.digest());
    }

    #[test]
    fn test_empty_versions_render_empty_parallel() {
        let rendered = PipelineRenderer::new().unwrap().render(&[]).unwrap();

        assert_eq!(rendered.stage_count(), 0);
        assert!(rendered.tags().is_empty());
        assert!(rendered.content().contains("      parallel {\n\n      }\n"));
    }

    #[test]
    fn test_stage_count_matches_input() {
        let renderer = PipelineRenderer::new().unwrap();
        for raw in [&[][..], &["3.7.3"][..], &["3.7.2", "3.7.3", "3.7.3"][..]] {
            let versions = Version::parse_all(raw).unwrap();
            let rendered = renderer.render(&versions).unwrap();
            assert_eq!(rendered.stage_count(), raw.len());
            assert_eq!(
                rendered.content().matches(" Pull Cache') {").count(),
                raw.len()
            );
        }
    }

    #[test]
    fn test_write_and_check() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Jenkinsfile");
        let rendered = render(&["3.7.3"]);

        assert!(!rendered.is_current(&path).unwrap());

        std::fs::write(&path, "stale").unwrap();
        assert!(!rendered.is_current(&path).unwrap());

        rendered.write_to(&path).unwrap();
        assert!(rendered.is_current(&path).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), rendered.content());
    }

    #[test]
    fn test_unreadable_output_is_a_file_read_error() {
        let temp = TempDir::new().unwrap();
        let err = render(&["3.7.3"]).is_current(temp.path()).unwrap_err();
        assert!(matches!(err, GenError::FileReadError { .. }));
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("Jenkinsfile");
        let err = render(&["3.7.3"]).write_to(&path).unwrap_err();
        assert!(matches!(err, GenError::FileWriteError { .. }));
    }
}
