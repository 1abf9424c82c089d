// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 jenkinsgen contributors

//! Rendered output compared byte for byte against known-good Jenkinsfiles

use jenkinsgen::config::DEFAULT_VERSIONS;
use jenkinsgen::{GeneratorConfig, PipelineRenderer, RenderedPipeline, Version};

fn render(raw: &[&str]) -> RenderedPipeline {
    let versions = Version::parse_all(raw).unwrap();
    PipelineRenderer::new().unwrap().render(&versions).unwrap()
}

#[test]
fn test_single_version_matches_fixture() {
    let rendered = render(&["2.7.16"]);
    assert_eq!(
        rendered.content(),
        include_str!("fixtures/Jenkinsfile.2.7.16")
    );
}

#[test]
fn test_patch_releases_match_fixture() {
    let rendered = render(&["3.7.2", "3.7.3"]);
    assert_eq!(
        rendered.content(),
        include_str!("fixtures/Jenkinsfile.3.7.2-3.7.3")
    );
}

#[test]
fn test_empty_version_list_matches_fixture() {
    let rendered = render(&[]);
    assert_eq!(rendered.stage_count(), 0);
    assert_eq!(rendered.content(), include_str!("fixtures/Jenkinsfile.empty"));
}

#[test]
fn test_default_versions_match_fixture() {
    let versions = GeneratorConfig::default().parse_versions().unwrap();
    let rendered = PipelineRenderer::new().unwrap().render(&versions).unwrap();

    assert_eq!(rendered.stage_count(), DEFAULT_VERSIONS.len());
    assert_eq!(
        rendered.content(),
        include_str!("fixtures/Jenkinsfile.default")
    );
}

#[test]
fn test_default_stage_order_and_ownership() {
    let rendered = render(DEFAULT_VERSIONS);
    let content = rendered.content();

    // Stages appear in input order
    let positions: Vec<usize> = DEFAULT_VERSIONS
        .iter()
        .map(|v| content.find(&format!("stage('{}') {{", v)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    let tags = rendered.tags();
    assert_eq!(tags.get("latest"), Some("3.7.3"));
    assert_eq!(tags.get("3"), Some("3.7.3"));
    assert_eq!(tags.get("2"), Some("2.7.16"));
    assert_eq!(tags.get("3.5"), Some("3.5.6"));
    assert_eq!(tags.get("3.6"), Some("3.6.8"));
    assert_eq!(tags.get("3.6.3"), Some("3.6.3"));
}

#[test]
fn test_rerender_is_byte_identical() {
    let first = render(DEFAULT_VERSIONS);
    let second = render(DEFAULT_VERSIONS);
    assert_eq!(first.content().as_bytes(), second.content().as_bytes());
    assert_eq!(first.digest(), second.digest());
}
