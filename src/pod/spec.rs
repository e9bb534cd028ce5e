// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Pod spec, metadata and template assembly from a [`PodConfig`]

use crate::constants::env;
use crate::types::PodConfig;
use k8s_openapi::api::core::v1::{
    Container, EnvVar, EnvVarSource, ObjectFieldSelector, PodSpec, PodTemplateSpec, Volume,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use std::collections::BTreeMap;

/// Per-call metadata that is layered on top of the config's base metadata
#[derive(Debug, Clone, Default)]
pub struct MetadataOverrides {
    pub name: Option<String>,
    pub generate_name: Option<String>,
    pub labels: BTreeMap<String, String>,
    pub annotations: BTreeMap<String, String>,
}

impl MetadataOverrides {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn generated(prefix: impl Into<String>) -> Self {
        Self {
            generate_name: Some(prefix.into()),
            ..Default::default()
        }
    }

    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations.insert(key.into(), value.into());
        self
    }
}

/// Build a pod spec from the config and the runtime pieces generated by the caller
pub fn build_spec(
    cfg: &PodConfig,
    volumes: Vec<Volume>,
    init_containers: Vec<Container>,
    containers: Vec<Container>,
) -> PodSpec {
    PodSpec {
        volumes: non_empty(volumes),
        init_containers: non_empty(init_containers),
        containers,
        restart_policy: cfg.restart_policy.clone(),
        termination_grace_period_seconds: cfg.termination_grace_period_seconds,
        active_deadline_seconds: cfg.active_deadline(),
        dns_policy: cfg.dns_policy.clone(),
        node_selector: cfg.node_selector.clone(),
        service_account_name: cfg.service_account_name.clone(),
        node_name: cfg.node_name.clone(),
        security_context: cfg.security_context.clone(),
        affinity: cfg.affinity.clone(),
        tolerations: cfg.tolerations.clone(),
        priority_class_name: cfg.priority_class_name.clone(),
        priority: cfg.priority,
        preemption_policy: cfg.preemption_policy.clone(),
        overhead: cfg.overhead.clone(),
        ..Default::default()
    }
}

/// Build pod metadata from the config's base metadata.
/// Name and generate name are always taken from `overrides`; labels and
/// annotations are merged with the overrides winning on conflicts.
pub fn build_metadata(cfg: &PodConfig, overrides: &MetadataOverrides) -> ObjectMeta {
    let mut metadata = cfg.metadata.clone();
    metadata.name = overrides.name.clone();
    metadata.generate_name = overrides.generate_name.clone();
    metadata
        .labels
        .get_or_insert_with(BTreeMap::new)
        .extend(overrides.labels.clone());
    metadata
        .annotations
        .get_or_insert_with(BTreeMap::new)
        .extend(overrides.annotations.clone());
    metadata
}

/// Build a complete pod template, e.g. for a StatefulSet or Deployment
pub fn build_template(
    cfg: &PodConfig,
    overrides: &MetadataOverrides,
    volumes: Vec<Volume>,
    init_containers: Vec<Container>,
    containers: Vec<Container>,
) -> PodTemplateSpec {
    PodTemplateSpec {
        metadata: Some(build_metadata(cfg, overrides)),
        spec: Some(build_spec(cfg, volumes, init_containers, containers)),
    }
}

/// Command prefix to run a script through the container's shell
pub fn container_shell_command() -> Vec<String> {
    vec!["sh".to_string(), "-c".to_string()]
}

/// Environment variable exposing the pod IP through the downward API
pub fn pod_ip_env_var() -> EnvVar {
    EnvVar {
        name: env::POD_IP.to_string(),
        value: None,
        value_from: Some(EnvVarSource {
            field_ref: Some(ObjectFieldSelector {
                api_version: None,
                field_path: "status.podIP".to_string(),
            }),
            ..Default::default()
        }),
    }
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    (!items.is_empty()).then_some(items)
}
