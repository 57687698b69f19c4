// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client creation from a caller-supplied kubeconfig bundle

use crate::error::{Result, SyncError};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::Client;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Create a Kubernetes client from a base64-encoded kubeconfig
#[instrument(skip(bundle))]
pub async fn load_client(bundle: &str, timeout: Duration) -> Result<Client> {
    let client_config = config_from_bundle(bundle, timeout).await?;
    info!("Connecting to cluster at {}", client_config.cluster_url);

    Client::try_from(client_config)
        .map_err(|e| SyncError::ClusterAuth(format!("Failed to create client: {}", e)))
}

/// Decode and parse the bundle into a client config, without connecting
pub async fn config_from_bundle(bundle: &str, timeout: Duration) -> Result<kube::Config> {
    let kubeconfig = decode_bundle(bundle)?;

    let kubeconfig_parsed: Kubeconfig = serde_yaml::from_str(&kubeconfig)
        .map_err(|e| SyncError::ClusterAuth(format!("Failed to parse kubeconfig: {}", e)))?;
    debug!(
        "Parsed kubeconfig with {} clusters, current context {:?}",
        kubeconfig_parsed.clusters.len(),
        kubeconfig_parsed.current_context
    );

    let mut client_config =
        kube::Config::from_custom_kubeconfig(kubeconfig_parsed, &KubeConfigOptions::default())
            .await
            .map_err(|e| SyncError::ClusterAuth(format!("Failed to create config: {}", e)))?;

    client_config.connect_timeout = Some(timeout);
    client_config.read_timeout = Some(timeout);
    client_config.write_timeout = Some(timeout);

    Ok(client_config)
}

/// Base64-decode the bundle, tolerating line-wrapped input
fn decode_bundle(bundle: &str) -> Result<String> {
    let compact: String = bundle.split_whitespace().collect();

    let bytes = STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| SyncError::ClusterAuth(format!("Kubeconfig is not valid base64: {}", e)))?;

    String::from_utf8(bytes)
        .map_err(|e| SyncError::ClusterAuth(format!("Kubeconfig is not valid UTF-8: {}", e)))
}
