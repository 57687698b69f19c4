// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use vault_to_k8s::config::Config;
use vault_to_k8s::sync;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration before logging so the debug flag can pick the level
    let config = Config::from_env()?;

    let default_level = if config.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    info!(
        "Syncing Vault secret {}/{} to {} {}/{} (auth method: {})",
        config.engine_name,
        config.secret_path,
        config.resource_kind,
        config.namespace,
        config.resource_name,
        config.auth.method()
    );

    sync::run(&config).await?;

    info!("Done");
    Ok(())
}
