// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Pod assembly from a [`crate::types::PodConfig`] and pod readiness queries.

pub mod readiness;
pub mod spec;

pub use readiness::{
    is_ready, partition, wait_until_gone, wait_until_gone_with_defaults, ReadinessPartition,
};
pub use spec::{
    build_metadata, build_spec, build_template, container_shell_command, pod_ip_env_var,
    MetadataOverrides,
};
