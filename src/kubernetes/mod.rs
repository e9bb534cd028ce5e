// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes API access: label selectors and pod listing.

pub mod pods;
pub mod selector;

pub use pods::{list_matching, PodLister};
pub use selector::label_selector;
