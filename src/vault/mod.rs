// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Reading secret documents from HashiCorp Vault.

pub mod client;

pub use client::{fetch_secret, VaultClient};
