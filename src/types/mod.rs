// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Reusable configuration types for operator-managed pods.

pub mod pod_config;
pub mod probe;

pub use pod_config::PodConfig;
pub use probe::{ProbeHandler, ProbeKind, ProbeParameters, ProbeSet};
