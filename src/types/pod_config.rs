// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::types::probe::ProbeSet;
use k8s_openapi::api::core::v1::{
    Affinity, EnvVar, PodSecurityContext, ResourceRequirements, Toleration,
};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration of an operator-managed pod, meant to be embedded in a custom resource spec.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PodConfig {
    /// Base metadata of the pods built from this config
    #[serde(default)]
    pub metadata: ObjectMeta,

    #[serde(default)]
    pub probes: ProbeSet,

    /// Environment variables the operator adds to the containers it generates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<Vec<EnvVar>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub affinity: Option<Affinity>,

    /// Seconds the pod may be active before it is marked failed.
    /// Zero or negative means no deadline.
    #[serde(default)]
    pub active_deadline_seconds: i64,

    /// One of Always, OnFailure, Never
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restart_policy: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_account_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_context: Option<PodSecurityContext>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tolerations: Option<Vec<Toleration>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination_grace_period_seconds: Option<i64>,

    /// Compute resources the operator applies to the containers it generates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceRequirements>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub overhead: Option<BTreeMap<String, Quantity>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_policy: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_selector: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_class_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,

    /// One of Never, PreemptLowerPriority
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preemption_policy: Option<String>,
}

impl PodConfig {
    /// Apply defaults to this config. Returns true if it changed and should be persisted.
    pub fn set_default(&mut self) -> bool {
        self.probes.resolve_defaults()
    }

    /// The configured active deadline, if any
    pub fn active_deadline(&self) -> Option<i64> {
        (self.active_deadline_seconds > 0).then_some(self.active_deadline_seconds)
    }
}
