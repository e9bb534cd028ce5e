// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Conversion of exact-match label sets into label selectors

use crate::error::{OperatorHelperError, Result};
use std::collections::BTreeMap;

const MAX_NAME_LENGTH: usize = 63;
const MAX_PREFIX_LENGTH: usize = 253;

/// Build an equality-based label selector (`k1=v1,k2=v2`) from a label set.
/// Fails if a key or value is not a valid Kubernetes label.
pub fn label_selector(labels: &BTreeMap<String, String>) -> Result<String> {
    let mut requirements = Vec::with_capacity(labels.len());
    for (key, value) in labels {
        validate_key(key)?;
        validate_value(key, value)?;
        requirements.push(format!("{}={}", key, value));
    }
    Ok(requirements.join(","))
}

fn validate_key(key: &str) -> Result<()> {
    let name = match key.split_once('/') {
        Some((prefix, name)) => {
            if !is_dns_subdomain(prefix) {
                return Err(OperatorHelperError::SelectorError(format!(
                    "label key {:?} has an invalid prefix",
                    key
                )));
            }
            name
        }
        None => key,
    };

    if !is_label_name(name) {
        return Err(OperatorHelperError::SelectorError(format!(
            "label key {:?} has an invalid name",
            key
        )));
    }
    Ok(())
}

fn validate_value(key: &str, value: &str) -> Result<()> {
    if value.is_empty() || is_label_name(value) {
        Ok(())
    } else {
        Err(OperatorHelperError::SelectorError(format!(
            "invalid value {:?} for label {:?}",
            value, key
        )))
    }
}

/// Alphanumeric at both ends, `-`, `_` and `.` in between, at most 63 characters
fn is_label_name(s: &str) -> bool {
    !s.is_empty()
        && s.len() <= MAX_NAME_LENGTH
        && alphanumeric_ends(s, |c| c.is_ascii_alphanumeric())
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

/// Lowercase RFC 1123 subdomain
fn is_dns_subdomain(s: &str) -> bool {
    !s.is_empty()
        && s.len() <= MAX_PREFIX_LENGTH
        && s.split('.').all(|segment| {
            !segment.is_empty()
                && alphanumeric_ends(segment, |c| c.is_ascii_lowercase() || c.is_ascii_digit())
                && segment
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        })
}

fn alphanumeric_ends(s: &str, is_alnum: impl Fn(char) -> bool) -> bool {
    match (s.chars().next(), s.chars().last()) {
        (Some(first), Some(last)) => is_alnum(first) && is_alnum(last),
        _ => false,
    }
}
