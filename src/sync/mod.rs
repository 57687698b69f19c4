// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Turning a Vault secret into a cluster object.

pub mod payload;
pub mod pipeline;

pub use payload::{encode_collection, sanitize, SecretDocument};
pub use pipeline::{run, run_with};
