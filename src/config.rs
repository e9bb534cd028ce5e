// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::wait;
use anyhow::{bail, Context, Result};
use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// What the command-line tool should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Resolve probe defaults of a PodConfig file and print the result
    Defaults { pod_config_path: PathBuf },
    /// Report the ready and unready pods matching a label set
    Status {
        namespace: String,
        labels: BTreeMap<String, String>,
    },
    /// Wait until no pod matches a label set
    Wait {
        namespace: String,
        labels: BTreeMap<String, String>,
    },
}

/// Tool configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
    pub poll_interval: Duration,
    pub wait_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration using `lookup` to resolve variable names
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mode_name = lookup("OPERATOR_HELPER_MODE").unwrap_or_else(|| "status".to_string());

        let mode = match mode_name.as_str() {
            "defaults" => Mode::Defaults {
                pod_config_path: lookup("POD_CONFIG_PATH")
                    .context("POD_CONFIG_PATH environment variable not set")?
                    .into(),
            },
            "status" | "wait" => {
                let namespace = lookup("POD_NAMESPACE")
                    .context("POD_NAMESPACE environment variable not set")?;
                let labels = parse_label_set(
                    &lookup("POD_LABELS").context("POD_LABELS environment variable not set")?,
                )?;
                if mode_name == "status" {
                    Mode::Status { namespace, labels }
                } else {
                    Mode::Wait { namespace, labels }
                }
            }
            other => bail!("Unknown OPERATOR_HELPER_MODE '{}'", other),
        };

        let poll_interval = seconds(&lookup, "POLL_INTERVAL_SECS", wait::POLL_INTERVAL_SECS)?;
        if poll_interval.is_zero() {
            bail!("POLL_INTERVAL_SECS must be greater than zero");
        }
        let wait_timeout = seconds(&lookup, "WAIT_TIMEOUT_SECS", wait::TIMEOUT_SECS)?;

        Ok(Config {
            mode,
            poll_interval,
            wait_timeout,
        })
    }
}

fn seconds(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u64) -> Result<Duration> {
    let secs = match lookup(key) {
        Some(value) => u64::from_str(value.trim())
            .with_context(|| format!("{} must be a number of seconds, got '{}'", key, value))?,
        None => default,
    };
    Ok(Duration::from_secs(secs))
}

/// Parse a `key=value,key2=value2` label set
pub fn parse_label_set(input: &str) -> Result<BTreeMap<String, String>> {
    let mut labels = BTreeMap::new();
    for pair in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let Some((key, value)) = pair.split_once('=') else {
            bail!("Invalid label '{}', expected key=value", pair);
        };
        let key = key.trim();
        if key.is_empty() {
            bail!("Invalid label '{}', key is empty", pair);
        }
        labels.insert(key.to_string(), value.trim().to_string());
    }
    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_parse_label_set() {
        let labels = parse_label_set("app=kafka, tier = broker").unwrap();

        assert_eq!(labels.len(), 2);
        assert_eq!(labels.get("app").unwrap(), "kafka");
        assert_eq!(labels.get("tier").unwrap(), "broker");
    }

    #[test]
    fn test_parse_label_set_empty_value() {
        let labels = parse_label_set("canary=").unwrap();
        assert_eq!(labels.get("canary").unwrap(), "");
    }

    #[test]
    fn test_parse_label_set_skips_empty_entries() {
        assert!(parse_label_set("").unwrap().is_empty());
        assert_eq!(parse_label_set("app=kafka,,").unwrap().len(), 1);
    }

    #[test]
    fn test_parse_label_set_rejects_missing_equals() {
        assert!(parse_label_set("app").is_err());
    }

    #[test]
    fn test_parse_label_set_rejects_empty_key() {
        assert!(parse_label_set("=kafka").is_err());
    }

    #[test]
    fn test_status_mode_is_default() {
        let config = Config::from_lookup(lookup_from(&[
            ("POD_NAMESPACE", "kafka"),
            ("POD_LABELS", "app=kafka"),
        ]))
        .unwrap();

        assert_eq!(
            config.mode,
            Mode::Status {
                namespace: "kafka".to_string(),
                labels: BTreeMap::from([("app".to_string(), "kafka".to_string())]),
            }
        );
        assert_eq!(config.poll_interval, Duration::from_secs(wait::POLL_INTERVAL_SECS));
        assert_eq!(config.wait_timeout, Duration::from_secs(wait::TIMEOUT_SECS));
    }

    #[test]
    fn test_wait_mode_with_custom_durations() {
        let config = Config::from_lookup(lookup_from(&[
            ("OPERATOR_HELPER_MODE", "wait"),
            ("POD_NAMESPACE", "kafka"),
            ("POD_LABELS", "app=kafka"),
            ("POLL_INTERVAL_SECS", "2"),
            ("WAIT_TIMEOUT_SECS", "30"),
        ]))
        .unwrap();

        assert!(matches!(config.mode, Mode::Wait { .. }));
        assert_eq!(config.poll_interval, Duration::from_secs(2));
        assert_eq!(config.wait_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_defaults_mode_requires_path() {
        let result = Config::from_lookup(lookup_from(&[("OPERATOR_HELPER_MODE", "defaults")]));
        assert!(result.is_err());

        let config = Config::from_lookup(lookup_from(&[
            ("OPERATOR_HELPER_MODE", "defaults"),
            ("POD_CONFIG_PATH", "/etc/pod.yaml"),
        ]))
        .unwrap();
        assert_eq!(
            config.mode,
            Mode::Defaults {
                pod_config_path: PathBuf::from("/etc/pod.yaml")
            }
        );
    }

    #[test]
    fn test_missing_namespace() {
        let result = Config::from_lookup(lookup_from(&[("POD_LABELS", "app=kafka")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_mode() {
        let result = Config::from_lookup(lookup_from(&[("OPERATOR_HELPER_MODE", "watch")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_interval() {
        let result = Config::from_lookup(lookup_from(&[
            ("POD_NAMESPACE", "kafka"),
            ("POD_LABELS", "app=kafka"),
            ("POLL_INTERVAL_SECS", "soon"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_interval_rejected() {
        let result = Config::from_lookup(lookup_from(&[
            ("POD_NAMESPACE", "kafka"),
            ("POD_LABELS", "app=kafka"),
            ("POLL_INTERVAL_SECS", "0"),
        ]));
        assert!(result.is_err());
    }
}
