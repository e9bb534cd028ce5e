// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OperatorHelperError {
    #[error("Invalid label selector: {0}")]
    SelectorError(String),

    #[error("Failed to list pods in namespace {namespace}: {source}")]
    QueryError {
        namespace: String,
        #[source]
        source: kube::Error,
    },

    #[error("Pods still present after waiting {0:?}")]
    TimeoutError(Duration),

    #[error("Wait for pods to terminate was cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, OperatorHelperError>;
