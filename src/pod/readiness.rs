// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Pod readiness queries and termination polling

use crate::constants::{conditions, wait};
use crate::error::{OperatorHelperError, Result};
use crate::kubernetes::{list_matching, PodLister};
use k8s_openapi::api::core::v1::Pod;
use std::collections::BTreeMap;
use std::time::Duration;
use tokio::time::{sleep_until, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};

/// Pods matching a label set, split by readiness. Both keep the listing order.
#[derive(Debug, Clone, Default)]
pub struct ReadinessPartition {
    pub ready: Vec<Pod>,
    pub unready: Vec<Pod>,
}

/// Check if the pod has a Ready condition with status True
pub fn is_ready(pod: &Pod) -> bool {
    pod.status
        .as_ref()
        .and_then(|s| s.conditions.as_ref())
        .is_some_and(|list| {
            list.iter()
                .any(|c| c.type_ == conditions::READY && c.status == conditions::TRUE)
        })
}

/// List the pods matching `labels` and split them into ready and unready pods
#[instrument(skip(lister))]
pub async fn partition<L: PodLister + ?Sized>(
    lister: &L,
    namespace: &str,
    labels: &BTreeMap<String, String>,
) -> Result<ReadinessPartition> {
    let pods = list_matching(lister, namespace, labels).await?;
    let (ready, unready): (Vec<_>, Vec<_>) = pods.into_iter().partition(is_ready);

    debug!(
        "{} ready and {} unready pods in namespace {}",
        ready.len(),
        unready.len(),
        namespace
    );
    Ok(ReadinessPartition { ready, unready })
}

/// Wait until no pod matches `labels` in `namespace`.
///
/// The first check happens immediately, then every `poll_interval` (at least
/// 100ms) until `timeout` has elapsed. API errors end the wait right away; no checks are
/// made once the deadline has passed.
#[instrument(skip(lister, cancel))]
pub async fn wait_until_gone<L: PodLister + ?Sized>(
    lister: &L,
    namespace: &str,
    labels: &BTreeMap<String, String>,
    poll_interval: Duration,
    timeout: Duration,
    cancel: &CancellationToken,
) -> Result<()> {
    // Durations too large to add to the clock mean "no deadline"
    let deadline = Instant::now().checked_add(timeout);
    let poll_interval = poll_interval.max(Duration::from_millis(wait::MIN_POLL_INTERVAL_MILLIS));

    loop {
        let remaining = list_matching(lister, namespace, labels).await?.len();
        if remaining == 0 {
            info!("All matching pods in namespace {} are gone", namespace);
            return Ok(());
        }

        let now = Instant::now();
        if deadline.is_some_and(|d| now >= d) {
            return Err(OperatorHelperError::TimeoutError(timeout));
        }

        debug!(
            "{} matching pods still present in namespace {}, checking again in {:?}",
            remaining, namespace, poll_interval
        );

        let Some(next_poll) = now.checked_add(poll_interval).into_iter().chain(deadline).min()
        else {
            cancel.cancelled().await;
            return Err(OperatorHelperError::Cancelled);
        };
        tokio::select! {
            _ = cancel.cancelled() => return Err(OperatorHelperError::Cancelled),
            _ = sleep_until(next_poll) => {}
        }

        if deadline.is_some_and(|d| Instant::now() >= d) {
            return Err(OperatorHelperError::TimeoutError(timeout));
        }
    }
}

/// [`wait_until_gone`] with the default poll interval and timeout
pub async fn wait_until_gone_with_defaults<L: PodLister + ?Sized>(
    lister: &L,
    namespace: &str,
    labels: &BTreeMap<String, String>,
    cancel: &CancellationToken,
) -> Result<()> {
    wait_until_gone(
        lister,
        namespace,
        labels,
        Duration::from_secs(wait::POLL_INTERVAL_SECS),
        Duration::from_secs(wait::TIMEOUT_SECS),
        cancel,
    )
    .await
}
