// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Secret document cleanup and encoding

use crate::constants::RESERVED_KEYS;
use k8s_openapi::ByteString;
use std::collections::BTreeMap;

/// Key/value payload of a Vault secret
pub type SecretDocument = BTreeMap<String, String>;

/// Check if a key is one of the upload metadata markers
pub fn is_reserved_key(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

/// Copy the document without the reserved metadata keys
pub fn sanitize(document: &SecretDocument) -> SecretDocument {
    document
        .iter()
        .filter(|(k, _)| !is_reserved_key(k))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Turn every value into the byte form a Secret stores.
///
/// `ByteString` is serialized as base64 when the object is sent to the API
/// server, so the values reach the cluster encoded exactly once.
pub fn encode_collection(document: &SecretDocument) -> BTreeMap<String, ByteString> {
    document
        .iter()
        .map(|(k, v)| (k.clone(), ByteString(v.as_bytes().to_vec())))
        .collect()
}
