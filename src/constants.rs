// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Environment inputs, named the way the pipeline runner exports action inputs
pub mod inputs {
    pub const VAULT_URL: &str = "INPUT_VAULT-URL";
    pub const ENGINE_NAME: &str = "INPUT_ENGINE-NAME";
    pub const SECRET_NAME: &str = "INPUT_SECRET-NAME";
    pub const VAULT_AUTH_TOKEN: &str = "INPUT_VAULT-AUTH-TOKEN";
    pub const VAULT_NAMESPACE: &str = "INPUT_VAULT-NAMESPACE";
    pub const VAULT_AUTH_METHOD: &str = "INPUT_VAULT-AUTH-METHOD";
    pub const VAULT_APPROLE_ID: &str = "INPUT_VAULT-APPROLE-ID";
    pub const VAULT_APPROLE_SECRET_ID: &str = "INPUT_VAULT-APPROLE-SECRET-ID";
    pub const GITHUB_TOKEN: &str = "INPUT_GITHUB-TOKEN";
    pub const KUBECONFIG: &str = "INPUT_KUBECONFIG";
    pub const NAMESPACE: &str = "INPUT_NAMESPACE";
    pub const RESOURCE_NAME: &str = "INPUT_RESOURCE-NAME";
    pub const RESOURCE_TYPE: &str = "INPUT_RESOURCE-TYPE";
    pub const TIMEOUT_SECONDS: &str = "INPUT_TIMEOUT-SECONDS";
}

/// Keys left in a secret document by the tooling that uploaded it
pub const RESERVED_KEYS: [&str; 3] = ["__filename__", "__type__", "__path__"];

/// Vault HTTP headers
pub mod headers {
    pub const TOKEN: &str = "X-Vault-Token";
    pub const NAMESPACE: &str = "X-Vault-Namespace";
}

/// Label stamped on every object this tool creates
pub const UPDATE_BY_LABEL: &str = "app.kubernetes.io/update-by";
pub const TOOL_NAME: &str = "vault-to-k8s";

/// Positional argument index of the debug flag, and its "off" value
pub const DEBUG_ARG_INDEX: usize = 5;
pub const DEBUG_OFF: &str = "no";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
