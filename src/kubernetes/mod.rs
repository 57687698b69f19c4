// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client loading and object creation.

pub mod client;
pub mod resources;

pub use client::load_client;
pub use resources::{create_resource, ClusterResource, ResourceIdentity};
