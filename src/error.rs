// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Missing required input: {0}")]
    ConfigMissing(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to fetch secret from Vault: {0}")]
    SecretFetch(String),

    #[error("Vault rejected the request with status {0} (check token permissions)")]
    SecretUnauthorized(u16),

    #[error("Vault secret not found: {0}")]
    SecretNotFound(String),

    #[error("Failed to parse Vault response: {0}")]
    SecretParse(String),

    #[error("Vault login failed: {0}")]
    VaultLogin(String),

    #[error("Failed to authenticate to cluster: {0}")]
    ClusterAuth(String),

    #[error("{kind} {namespace}/{name} already exists")]
    ResourceAlreadyExists {
        kind: String,
        namespace: String,
        name: String,
    },

    #[error("Failed to create resource: {0}")]
    ResourceCreate(#[from] kube::Error),
}

pub type Result<T> = std::result::Result<T, SyncError>;
