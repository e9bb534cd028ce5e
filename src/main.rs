// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use kube::{Client, ResourceExt};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use operator_helper::config::{Config, Mode};
use operator_helper::pod::{partition, wait_until_gone};
use operator_helper::types::PodConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded: {:?}", config.mode);

    match config.mode {
        Mode::Defaults { pod_config_path } => {
            let raw = tokio::fs::read_to_string(&pod_config_path)
                .await
                .with_context(|| format!("Failed to read {}", pod_config_path.display()))?;
            let mut pod_config: PodConfig = serde_yaml::from_str(&raw)
                .with_context(|| format!("Failed to parse {}", pod_config_path.display()))?;

            if pod_config.set_default() {
                info!("Defaults applied to {}", pod_config_path.display());
            } else {
                info!("{} already has all defaults set", pod_config_path.display());
            }
            print!("{}", serde_yaml::to_string(&pod_config)?);
        }
        Mode::Status { namespace, labels } => {
            let client = Client::try_default().await?;
            info!("Connected to Kubernetes cluster");

            let pods = partition(&client, &namespace, &labels).await?;
            info!(
                "{} ready, {} unready pods in namespace {}",
                pods.ready.len(),
                pods.unready.len(),
                namespace
            );
            let summary = serde_json::json!({
                "ready": pods.ready.iter().map(|p| p.name_any()).collect::<Vec<_>>(),
                "unready": pods.unready.iter().map(|p| p.name_any()).collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Mode::Wait { namespace, labels } => {
            let client = Client::try_default().await?;
            info!("Connected to Kubernetes cluster");

            let cancel = CancellationToken::new();
            let on_signal = cancel.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    warn!("Interrupted, stopping wait");
                    on_signal.cancel();
                }
            });

            wait_until_gone(
                &client,
                &namespace,
                &labels,
                config.poll_interval,
                config.wait_timeout,
                &cancel,
            )
            .await?;
        }
    }

    Ok(())
}
