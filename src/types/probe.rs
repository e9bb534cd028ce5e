// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Probe parameters and their per-kind defaults.

use crate::constants::probes::{liveness, readiness, startup};
use k8s_openapi::api::core::v1::{ExecAction, HTTPGetAction, Probe, TCPSocketAction};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which kind of probe a set of parameters belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeKind {
    Startup,
    Readiness,
    Liveness,
}

impl ProbeKind {
    pub const ALL: [ProbeKind; 3] = [ProbeKind::Startup, ProbeKind::Readiness, ProbeKind::Liveness];

    /// The fixed default parameters for this probe kind
    pub const fn defaults(self) -> ProbeParameters {
        match self {
            ProbeKind::Startup => ProbeParameters {
                initial_delay_seconds: startup::INITIAL_DELAY_SECONDS,
                period_seconds: startup::PERIOD_SECONDS,
                failure_threshold: startup::FAILURE_THRESHOLD,
                success_threshold: startup::SUCCESS_THRESHOLD,
                timeout_seconds: startup::TIMEOUT_SECONDS,
            },
            ProbeKind::Readiness => ProbeParameters {
                initial_delay_seconds: readiness::INITIAL_DELAY_SECONDS,
                period_seconds: readiness::PERIOD_SECONDS,
                failure_threshold: readiness::FAILURE_THRESHOLD,
                success_threshold: readiness::SUCCESS_THRESHOLD,
                timeout_seconds: readiness::TIMEOUT_SECONDS,
            },
            ProbeKind::Liveness => ProbeParameters {
                initial_delay_seconds: liveness::INITIAL_DELAY_SECONDS,
                period_seconds: liveness::PERIOD_SECONDS,
                failure_threshold: liveness::FAILURE_THRESHOLD,
                success_threshold: liveness::SUCCESS_THRESHOLD,
                timeout_seconds: liveness::TIMEOUT_SECONDS,
            },
        }
    }
}

impl fmt::Display for ProbeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeKind::Startup => write!(f, "startup"),
            ProbeKind::Readiness => write!(f, "readiness"),
            ProbeKind::Liveness => write!(f, "liveness"),
        }
    }
}

/// How a probe performs its check
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeHandler {
    Exec(ExecAction),
    HttpGet(HTTPGetAction),
    TcpSocket(TCPSocketAction),
}

/// Timing and threshold parameters of a single probe.
/// A value of 0 means "not configured" and is replaced by the kind's default.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ProbeParameters {
    #[schemars(range(min = 0))]
    pub initial_delay_seconds: i32,
    #[schemars(range(min = 0))]
    pub period_seconds: i32,
    #[schemars(range(min = 0))]
    pub failure_threshold: i32,
    #[schemars(range(min = 0))]
    pub success_threshold: i32,
    #[schemars(range(min = 0))]
    pub timeout_seconds: i32,
}

impl ProbeParameters {
    /// Replace every unset (zero) field with the matching field of `defaults`.
    /// Returns true if any field was changed.
    pub fn apply_defaults(&mut self, defaults: &ProbeParameters) -> bool {
        let mut changed = false;
        for (field, default) in [
            (&mut self.initial_delay_seconds, defaults.initial_delay_seconds),
            (&mut self.period_seconds, defaults.period_seconds),
            (&mut self.failure_threshold, defaults.failure_threshold),
            (&mut self.success_threshold, defaults.success_threshold),
            (&mut self.timeout_seconds, defaults.timeout_seconds),
        ] {
            if *field == 0 {
                *field = default;
                changed = true;
            }
        }
        changed
    }

    /// Build the Kubernetes probe performing `handler` with these parameters
    pub fn to_k8s_probe(&self, handler: ProbeHandler) -> Probe {
        let mut probe = Probe {
            initial_delay_seconds: Some(self.initial_delay_seconds),
            period_seconds: Some(self.period_seconds),
            success_threshold: Some(self.success_threshold),
            failure_threshold: Some(self.failure_threshold),
            timeout_seconds: Some(self.timeout_seconds),
            ..Default::default()
        };
        match handler {
            ProbeHandler::Exec(action) => probe.exec = Some(action),
            ProbeHandler::HttpGet(action) => probe.http_get = Some(action),
            ProbeHandler::TcpSocket(action) => probe.tcp_socket = Some(action),
        }
        probe
    }
}

/// The startup, readiness and liveness probes of a pod
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProbeSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub startup: Option<ProbeParameters>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readiness: Option<ProbeParameters>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liveness: Option<ProbeParameters>,
}

impl ProbeSet {
    pub fn get(&self, kind: ProbeKind) -> Option<&ProbeParameters> {
        self.slot(kind).as_ref()
    }

    fn slot(&self, kind: ProbeKind) -> &Option<ProbeParameters> {
        match kind {
            ProbeKind::Startup => &self.startup,
            ProbeKind::Readiness => &self.readiness,
            ProbeKind::Liveness => &self.liveness,
        }
    }

    fn slot_mut(&mut self, kind: ProbeKind) -> &mut Option<ProbeParameters> {
        match kind {
            ProbeKind::Startup => &mut self.startup,
            ProbeKind::Readiness => &mut self.readiness,
            ProbeKind::Liveness => &mut self.liveness,
        }
    }

    /// Fill in every missing probe and every unset field with its kind's default.
    /// Returns true if anything changed, so the caller knows whether to persist.
    pub fn resolve_defaults(&mut self) -> bool {
        let mut changed = false;
        for kind in ProbeKind::ALL {
            let slot = self.slot_mut(kind);
            if slot.is_none() {
                changed = true;
            }
            let params = slot.get_or_insert_with(ProbeParameters::default);
            if params.apply_defaults(&kind.defaults()) {
                changed = true;
            }
        }
        changed
    }

    /// Build the Kubernetes probe for `kind`, if that probe is configured
    pub fn to_k8s_probe(&self, kind: ProbeKind, handler: ProbeHandler) -> Option<Probe> {
        self.get(kind).map(|params| params.to_k8s_probe(handler))
    }
}
