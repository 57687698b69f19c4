// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Vault HTTP client for KV v2 reads and token logins

use crate::config::{Config, VaultAuth};
use crate::constants::headers;
use crate::error::{Result, SyncError};
use crate::sync::payload::SecretDocument;
use reqwest::{RequestBuilder, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, instrument};
use url::Url;

/// Vault REST API client bound to one server and optional namespace
#[derive(Debug, Clone)]
pub struct VaultClient {
    http: reqwest::Client,
    base_url: Url,
    namespace: Option<String>,
}

impl VaultClient {
    pub fn new(base_url: &str, namespace: Option<String>, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            SyncError::InvalidConfig(format!("Invalid Vault URL '{}': {}", base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(SyncError::InvalidConfig(format!(
                "Vault URL '{}' cannot carry a path",
                base_url
            )));
        }

        let http = reqwest::Client::builder()
            .user_agent(format!("vault-to-k8s/{}", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| SyncError::SecretFetch(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url,
            namespace,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.vault_url,
            config.vault_namespace.clone(),
            config.timeout,
        )
    }

    /// Build `{base}/v1/...`, percent-encoding each path segment.
    /// Outer slashes of each part are dropped; inner empty segments are kept.
    fn endpoint<'a>(&self, parts: impl IntoIterator<Item = &'a str>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("v1");
            for part in parts {
                segments.extend(part.trim_matches('/').split('/'));
            }
        }
        url
    }

    fn with_namespace(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.namespace {
            Some(ns) => request.header(headers::NAMESPACE, ns),
            None => request,
        }
    }

    /// Exchange the configured credentials for a Vault token
    #[instrument(skip(self, auth), fields(method = auth.method()))]
    pub async fn login(&self, auth: &VaultAuth) -> Result<String> {
        let (mount, body) = match auth {
            VaultAuth::Token(token) => return Ok(token.clone()),
            VaultAuth::AppRole { role_id, secret_id } => (
                "approle",
                serde_json::json!({ "role_id": role_id, "secret_id": secret_id }),
            ),
            VaultAuth::Github(token) => ("github", serde_json::json!({ "token": token })),
        };

        let url = self.endpoint(["auth", mount, "login"]);
        debug!("Logging in to Vault at {}", url);

        let resp = self
            .with_namespace(self.http.post(url).json(&body))
            .send()
            .await
            .map_err(|e| SyncError::VaultLogin(describe_request_error(&e)))?;

        match resp.status() {
            s if s.is_success() => {}
            s @ (StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) => {
                return Err(SyncError::SecretUnauthorized(s.as_u16()))
            }
            s => {
                return Err(SyncError::VaultLogin(format!(
                    "{} login returned status {}",
                    mount, s
                )))
            }
        }

        let body: Value = resp
            .json()
            .await
            .map_err(|e| SyncError::VaultLogin(format!("Unreadable login response: {}", e)))?;

        body.pointer("/auth/client_token")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                SyncError::VaultLogin(format!("{} login response has no client token", mount))
            })
    }

    /// Read the current version of a KV v2 secret
    #[instrument(skip(self, token))]
    pub async fn read_secret(
        &self,
        token: &str,
        engine: &str,
        secret_path: &str,
    ) -> Result<SecretDocument> {
        let url = self.endpoint([engine, "data", secret_path]);
        let display_path = format!("{}/data/{}", engine, secret_path);
        info!("Reading Vault secret {}", display_path);

        let resp = self
            .with_namespace(self.http.get(url).header(headers::TOKEN, token))
            .send()
            .await
            .map_err(|e| SyncError::SecretFetch(describe_request_error(&e)))?;

        match resp.status() {
            StatusCode::OK => {}
            s @ (StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) => {
                return Err(SyncError::SecretUnauthorized(s.as_u16()))
            }
            StatusCode::NOT_FOUND => return Err(SyncError::SecretNotFound(display_path)),
            s => {
                return Err(SyncError::SecretFetch(format!(
                    "Vault returned status {} for {}",
                    s, display_path
                )))
            }
        }

        let text = resp
            .text()
            .await
            .map_err(|e| SyncError::SecretFetch(describe_request_error(&e)))?;
        let document = parse_kv2_response(&text)?;

        info!(
            "Loaded {} keys from Vault secret {}",
            document.len(),
            display_path
        );
        Ok(document)
    }
}

fn describe_request_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        format!("request timed out: {}", e)
    } else {
        e.to_string()
    }
}

/// Extract `data.data` from a KV v2 read response
pub fn parse_kv2_response(body: &str) -> Result<SecretDocument> {
    let body: Value = serde_json::from_str(body)
        .map_err(|e| SyncError::SecretParse(format!("Response is not JSON: {}", e)))?;

    let Some(data) = body.pointer("/data/data").and_then(Value::as_object) else {
        return Err(SyncError::SecretParse(
            "Response does not contain a data.data object".to_string(),
        ));
    };

    Ok(data
        .iter()
        .map(|(k, v)| (k.clone(), stringify_value(v)))
        .collect())
}

/// Render a JSON value as the string stored in the cluster object
fn stringify_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Log in with the configured method and read the configured secret
pub async fn fetch_secret(config: &Config) -> Result<SecretDocument> {
    let client = VaultClient::from_config(config)?;
    let token = client.login(&config.auth).await?;
    client
        .read_secret(&token, &config.engine_name, &config.secret_path)
        .await
}
