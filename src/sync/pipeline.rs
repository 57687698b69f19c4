// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The fetch, sanitize, build and create sequence of one run.

use crate::config::Config;
use crate::error::Result;
use crate::kubernetes::{create_resource, load_client, ClusterResource, ResourceIdentity};
use crate::sync::payload::sanitize;
use crate::vault::fetch_secret;
use kube::Client;
use std::future::Future;
use tracing::{debug, info, instrument};

/// Run the sync with a cluster client built from the configured kubeconfig
pub async fn run(config: &Config) -> Result<ResourceIdentity> {
    run_with(config, || load_client(&config.kubeconfig, config.timeout)).await
}

/// Run the sync, obtaining the cluster client from `connect`.
///
/// `connect` is only invoked once the secret has been fetched, so a Vault
/// failure never reaches the cluster.
#[instrument(
    skip(config, connect),
    fields(
        kind = %config.resource_kind,
        name = %config.resource_name,
        namespace = %config.namespace
    )
)]
pub async fn run_with<F, Fut>(config: &Config, connect: F) -> Result<ResourceIdentity>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Client>>,
{
    let fetched = fetch_secret(config).await?;
    let document = sanitize(&fetched);
    if document.len() != fetched.len() {
        debug!(
            "Dropped {} reserved keys from secret document",
            fetched.len() - document.len()
        );
    }
    debug!("Secret keys: {:?}", document.keys().collect::<Vec<_>>());

    let identity = ResourceIdentity::from_config(config);
    let resource = ClusterResource::build(&identity, &document);

    let client = connect().await?;
    create_resource(&client, &resource).await?;

    info!(
        "Materialized {} keys as {} {}/{}",
        document.len(),
        identity.kind,
        identity.namespace,
        identity.name
    );
    Ok(identity)
}
