// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Recommended Kubernetes label keys.
/// See https://kubernetes.io/docs/concepts/overview/working-with-objects/common-labels/#labels
pub mod labels {
    /// Name of the application, e.g. postgres
    pub const APP_NAME: &str = "app.kubernetes.io/name";
    /// Unique name identifying the instance of an application
    pub const APP_INSTANCE: &str = "app.kubernetes.io/instance";
    pub const APP_VERSION: &str = "app.kubernetes.io/version";
    /// Component within the architecture, e.g. database
    pub const APP_COMPONENT: &str = "app.kubernetes.io/component";
    pub const APP_MANAGED_BY: &str = "app.kubernetes.io/managed-by";
    pub const APP_PART_OF: &str = "app.kubernetes.io/part-of";
}

/// Environment variable names injected into operator-managed pods
pub mod env {
    /// Holds the pod's IP, populated through the downward API
    pub const POD_IP: &str = "POD_IP";
    pub const ENVOY_SIDECAR_STATUS: &str = "ENVOY_SIDECAR_STATUS";
}

/// Default probe parameters, one group per probe kind.
/// All values are positive: zero is reserved as the "unset" marker.
pub mod probes {
    pub mod startup {
        pub const INITIAL_DELAY_SECONDS: i32 = 10;
        pub const PERIOD_SECONDS: i32 = 10;
        pub const FAILURE_THRESHOLD: i32 = 10;
        pub const SUCCESS_THRESHOLD: i32 = 1;
        pub const TIMEOUT_SECONDS: i32 = 10;
    }

    pub mod readiness {
        pub const INITIAL_DELAY_SECONDS: i32 = 10;
        pub const PERIOD_SECONDS: i32 = 10;
        pub const FAILURE_THRESHOLD: i32 = 3;
        pub const SUCCESS_THRESHOLD: i32 = 1;
        pub const TIMEOUT_SECONDS: i32 = 10;
    }

    pub mod liveness {
        pub const INITIAL_DELAY_SECONDS: i32 = 10;
        pub const PERIOD_SECONDS: i32 = 10;
        pub const FAILURE_THRESHOLD: i32 = 3;
        pub const SUCCESS_THRESHOLD: i32 = 1;
        pub const TIMEOUT_SECONDS: i32 = 3;
    }
}

/// Pod termination polling configuration
pub mod wait {
    /// Interval in seconds between two pod list calls
    pub const POLL_INTERVAL_SECS: u64 = 5;
    /// Upper bound in seconds on how long to wait for pods to go away
    pub const TIMEOUT_SECS: u64 = 300;
    /// Shorter poll intervals are raised to this many milliseconds
    pub const MIN_POLL_INTERVAL_MILLIS: u64 = 100;
}

/// Condition type and status marking a pod as ready
pub mod conditions {
    pub const READY: &str = "Ready";
    pub const TRUE: &str = "True";
}
