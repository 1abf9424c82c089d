// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 jenkinsgen contributors

//! Built-in Jenkinsfile templates
//!
//! Written at a 4-space source depth and re-indented to their embedding
//! level by [`indent`](crate::template::indent) when the renderer is built.

/// Indentation level of the outer pipeline
pub const PIPELINE_LEVEL: usize = 0;

/// Indentation level of a per-version stage inside `parallel { }`
pub const STAGE_LEVEL: usize = 4;

/// Indentation level of the tag/push steps inside a stage's `steps { }`
pub const TAG_PUSH_LEVEL: usize = 8;

/// Indentation level of an image line inside the `docker rmi` command
pub const REMOVE_IMAGE_LEVEL: usize = 8;

/// Outer declarative pipeline; slot: `stages`
pub const PIPELINE: &str = r#"
//
// This file is autogenerated.
// To update, run:
//
//    make Jenkinsfile
//

pipeline {
    agent none
    environment {
        HOME = '/tmp/'
    }
    options {
        timestamps()
    }
    stages {
        stage('Prepare Build') {
            agent any
            steps {
                dir('official-images') {
                    git url: 'https://github.com/docker-library/official-images'
                }
                stash includes: 'official-images/**', name: 'official-images'
            }
        }
        stage('Build Stage') {
            parallel {
%(stages)s
            }
        }
    }
}
"#;

/// One parallel branch per version; slots: `version`, `major_minor`, `tags`, `rmi_tags`
pub const STAGE: &str = r#"
stage('%(version)s') {
    agent {
        label 'docker_builder'
    }
    environment {
        IMAGE = "python:%(version)s-stretch-$BRANCH_NAME-$BUILD_NUMBER"
        IMAGE_CACHE = "$IMAGE-cache"
    }
    stages {
        stage('%(version)s Pull Cache') {
            steps {
                sh '''docker pull $DOCKER_REGISTRY/python:%(version)s \
                    && docker tag $IMAGE_REPO:%(version)s $IMAGE_CACHE \
                    || true
                '''
            }
        }
        stage('%(version)s Build') {
            steps {
                retry(10) {
                    sh '''docker build --tag $IMAGE \
                            --build-arg PYTHON_VERSION=%(version)s \
                            --file %(major_minor)s/stretch/Dockerfile \
                            .
                    '''
                }
            }
        }
        stage('%(version)s Test') {
            steps {
                unstash 'official-images'
                retry(3) {
                    sh 'official-images/test/run.sh $IMAGE'
                }
            }
        }
        stage('%(version)s Push') {
            steps {
%(tags)s
            }
        }
    }
    post {
        cleanup {
            sh '''docker rmi \
                $IMAGE \
                $IMAGE_CACHE \
%(rmi_tags)s
                --force
            '''
            sh '''test -e official-images/test/clean.sh \
                && official-images/test/clean.sh \
                || true
            '''
        }
    }
}
"#;

/// Tag and push one image tag; slot: `tag`
pub const TAG_PUSH: &str = r#"
sh 'docker tag $IMAGE $DOCKER_REGISTRY/python:%(tag)s'
retry(3) {
    sh 'docker push $DOCKER_REGISTRY/python:%(tag)s'
}
"#;

/// One continuation line of the cleanup `docker rmi`; slot: `tag`
pub const REMOVE_IMAGE: &str = r#"
$DOCKER_REGISTRY/python:%(tag)s \
"#;
