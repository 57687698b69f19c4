// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{inputs, DEBUG_ARG_INDEX, DEBUG_OFF, DEFAULT_TIMEOUT_SECS};
use crate::error::{Result, SyncError};
use std::env;
use std::fmt;
use std::time::Duration;

/// Which Kubernetes object the secret document is materialized as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    ConfigMap,
    Secret,
}

impl ResourceKind {
    /// Only the exact strings `configmap` and `config-map` select a ConfigMap;
    /// everything else, typos included, falls through to a Secret.
    pub fn from_input(value: &str) -> Self {
        match value {
            "configmap" | "config-map" => ResourceKind::ConfigMap,
            _ => ResourceKind::Secret,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::ConfigMap => "ConfigMap",
            ResourceKind::Secret => "Secret",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the tool obtains a Vault token
#[derive(Clone, PartialEq, Eq)]
pub enum VaultAuth {
    Token(String),
    AppRole { role_id: String, secret_id: String },
    Github(String),
}

impl VaultAuth {
    pub fn method(&self) -> &'static str {
        match self {
            VaultAuth::Token(_) => "token",
            VaultAuth::AppRole { .. } => "approle",
            VaultAuth::Github(_) => "github",
        }
    }
}

// Credentials stay out of logs and panic messages.
impl fmt::Debug for VaultAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VaultAuth({}, <redacted>)", self.method())
    }
}

/// Run configuration, collected once at startup
#[derive(Clone)]
pub struct Config {
    pub vault_url: String,
    pub engine_name: String,
    pub secret_path: String,
    pub vault_namespace: Option<String>,
    pub auth: VaultAuth,
    /// Base64-encoded kubeconfig used to reach the target cluster
    pub kubeconfig: String,
    pub namespace: String,
    pub resource_name: String,
    pub resource_kind: ResourceKind,
    pub timeout: Duration,
    pub debug: bool,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("vault_url", &self.vault_url)
            .field("engine_name", &self.engine_name)
            .field("secret_path", &self.secret_path)
            .field("vault_namespace", &self.vault_namespace)
            .field("auth", &self.auth)
            .field("kubeconfig", &"<redacted>")
            .field("namespace", &self.namespace)
            .field("resource_name", &self.resource_name)
            .field("resource_kind", &self.resource_kind)
            .field("timeout", &self.timeout)
            .field("debug", &self.debug)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables and the positional debug flag
    pub fn from_env() -> Result<Self> {
        let debug_arg = env::args().nth(DEBUG_ARG_INDEX);
        Self::from_lookup(|name| env::var(name).ok(), debug_arg.as_deref())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F, debug_arg: Option<&str>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| -> Result<String> {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| SyncError::ConfigMissing(name.to_string()))
        };
        let optional = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let auth = match optional(inputs::VAULT_AUTH_METHOD).as_deref() {
            None | Some("token") => VaultAuth::Token(required(inputs::VAULT_AUTH_TOKEN)?),
            Some("approle") => VaultAuth::AppRole {
                role_id: required(inputs::VAULT_APPROLE_ID)?,
                secret_id: required(inputs::VAULT_APPROLE_SECRET_ID)?,
            },
            Some("github") => VaultAuth::Github(required(inputs::GITHUB_TOKEN)?),
            Some(other) => {
                return Err(SyncError::InvalidConfig(format!(
                    "unknown Vault auth method '{}' (expected token, approle or github)",
                    other
                )))
            }
        };

        // Present but possibly empty: an empty kind still selects a Secret.
        let resource_kind = lookup(inputs::RESOURCE_TYPE)
            .map(|v| ResourceKind::from_input(&v))
            .ok_or_else(|| SyncError::ConfigMissing(inputs::RESOURCE_TYPE.to_string()))?;

        let timeout = match optional(inputs::TIMEOUT_SECONDS) {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    SyncError::InvalidConfig(format!(
                        "{} must be a whole number of seconds, got '{}'",
                        inputs::TIMEOUT_SECONDS,
                        raw
                    ))
                })?;
                if secs == 0 {
                    return Err(SyncError::InvalidConfig(format!(
                        "{} must be greater than zero",
                        inputs::TIMEOUT_SECONDS
                    )));
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Config {
            vault_url: required(inputs::VAULT_URL)?,
            engine_name: required(inputs::ENGINE_NAME)?,
            secret_path: required(inputs::SECRET_NAME)?,
            vault_namespace: optional(inputs::VAULT_NAMESPACE),
            auth,
            kubeconfig: required(inputs::KUBECONFIG)?,
            namespace: required(inputs::NAMESPACE)?,
            resource_name: required(inputs::RESOURCE_NAME)?,
            resource_kind,
            timeout,
            debug: debug_arg.is_some_and(|v| v != DEBUG_OFF),
        })
    }
}
