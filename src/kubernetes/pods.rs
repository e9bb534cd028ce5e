// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Listing pods by label

use crate::error::{OperatorHelperError, Result};
use crate::kubernetes::selector::label_selector;
use async_trait::async_trait;
use k8s_openapi::api::core::v1::Pod;
use kube::{api::ListParams, Api, Client};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// The part of the Kubernetes API the pod queries depend on
#[async_trait]
pub trait PodLister: Send + Sync {
    /// List the pods in `namespace` matching `params`
    async fn list_pods(
        &self,
        namespace: &str,
        params: &ListParams,
    ) -> std::result::Result<Vec<Pod>, kube::Error>;
}

#[async_trait]
impl PodLister for Client {
    async fn list_pods(
        &self,
        namespace: &str,
        params: &ListParams,
    ) -> std::result::Result<Vec<Pod>, kube::Error> {
        let pods: Api<Pod> = Api::namespaced(self.clone(), namespace);
        Ok(pods.list(params).await?.items)
    }
}

/// List all pods in `namespace` carrying every label in `labels`
#[instrument(skip(lister))]
pub async fn list_matching<L: PodLister + ?Sized>(
    lister: &L,
    namespace: &str,
    labels: &BTreeMap<String, String>,
) -> Result<Vec<Pod>> {
    let selector = label_selector(labels)?;
    let mut params = ListParams::default();
    if !selector.is_empty() {
        params = params.labels(&selector);
    }

    let pods = lister
        .list_pods(namespace, &params)
        .await
        .map_err(|source| OperatorHelperError::QueryError {
            namespace: namespace.to_string(),
            source,
        })?;

    debug!(
        "Found {} pods in namespace {} matching '{}'",
        pods.len(),
        namespace,
        selector
    );
    Ok(pods)
}
