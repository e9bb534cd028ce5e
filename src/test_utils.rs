// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API responses.

use crate::kubernetes::PodLister;
use async_trait::async_trait;
use http::{Request, Response};
use k8s_openapi::api::core::v1::Pod;
use kube::api::ListParams;
use kube::client::Body;
use kube::Client;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

/// A mock HTTP service that returns predefined responses based on request paths.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<(String, String), (u16, String)>>>,
    queries: Arc<Mutex<Vec<String>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a response for GET requests matching the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(("GET".to_string(), path.to_string()), (status, body.to_string()));
        self
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    /// Query strings of all requests received so far, in order
    pub fn requested_queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    fn find_response(&self, method: &str, path: &str) -> Option<(u16, String)> {
        self.responses
            .lock()
            .unwrap()
            .get(&(method.to_string(), path.to_string()))
            .cloned()
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let method = req.method().to_string();
        let path = req.uri().path().to_string();
        self.queries
            .lock()
            .unwrap()
            .push(req.uri().query().unwrap_or_default().to_string());

        let (status, body) = self
            .find_response(&method, &path)
            .unwrap_or_else(|| (404, status_json(404, "NotFound", "not found")));

        Box::pin(async move {
            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

/// A [`PodLister`] replaying a scripted sequence of list results.
/// Once the script is exhausted the last result is repeated.
pub struct ScriptedLister {
    script: Mutex<VecDeque<Result<Vec<Pod>, u16>>>,
    last: Mutex<Option<Result<Vec<Pod>, u16>>>,
    calls: Mutex<usize>,
}

impl ScriptedLister {
    /// Each entry is either the pods to return or the HTTP status code of an API error
    pub fn new(script: Vec<Result<Vec<Pod>, u16>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            last: Mutex::new(None),
            calls: Mutex::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl PodLister for ScriptedLister {
    async fn list_pods(
        &self,
        _namespace: &str,
        _params: &ListParams,
    ) -> Result<Vec<Pod>, kube::Error> {
        *self.calls.lock().unwrap() += 1;

        let next = self.script.lock().unwrap().pop_front();
        let result = match next {
            Some(result) => {
                *self.last.lock().unwrap() = Some(result.clone());
                result
            }
            None => self.last.lock().unwrap().clone().unwrap_or(Ok(Vec::new())),
        };

        result.map_err(|code| {
            kube::Error::Api(kube::core::ErrorResponse {
                status: "Failure".to_string(),
                message: format!("scripted failure {}", code),
                reason: "InternalError".to_string(),
                code,
            })
        })
    }
}

/// Create a pod, optionally with a Ready condition of the given status
pub fn make_pod(name: &str, ready: Option<&str>) -> Pod {
    serde_json::from_value(pod_json(name, ready)).unwrap()
}

/// Create a mock pod JSON object
pub fn pod_json(name: &str, ready: Option<&str>) -> serde_json::Value {
    let conditions: Vec<serde_json::Value> = ready
        .map(|status| {
            vec![
                serde_json::json!({ "type": "PodScheduled", "status": "True" }),
                serde_json::json!({ "type": "Ready", "status": status }),
            ]
        })
        .unwrap_or_default();

    serde_json::json!({
        "apiVersion": "v1",
        "kind": "Pod",
        "metadata": {
            "name": name,
            "namespace": "kafka",
            "uid": format!("{}-uid", name)
        },
        "spec": {
            "containers": [{ "name": "main", "image": "busybox" }]
        },
        "status": {
            "phase": "Running",
            "conditions": conditions
        }
    })
}

/// Create a mock pod list JSON response
pub fn pod_list_json(pods: &[serde_json::Value]) -> String {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "PodList",
        "metadata": { "resourceVersion": "1" },
        "items": pods
    })
    .to_string()
}

/// Create a failure Status response
pub fn status_json(code: u16, reason: &str, message: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "metadata": {},
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code
    })
    .to_string()
}
