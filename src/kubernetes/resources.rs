// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! ConfigMap and Secret construction and creation

use crate::config::{Config, ResourceKind};
use crate::constants::{TOOL_NAME, UPDATE_BY_LABEL};
use crate::error::{Result, SyncError};
use crate::sync::payload::{encode_collection, SecretDocument};
use k8s_openapi::api::core::v1::{ConfigMap, Secret};
use k8s_openapi::NamespaceResourceScope;
use kube::{
    api::{ObjectMeta, PostParams},
    Api, Client, Resource, ResourceExt,
};
use serde::{de::DeserializeOwned, Serialize};
use std::collections::BTreeMap;
use std::fmt::Debug;
use tracing::{info, instrument};

/// Name, namespace and kind of the object to create
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceIdentity {
    pub name: String,
    pub namespace: String,
    pub kind: ResourceKind,
}

impl ResourceIdentity {
    pub fn from_config(config: &Config) -> Self {
        Self {
            name: config.resource_name.clone(),
            namespace: config.namespace.clone(),
            kind: config.resource_kind,
        }
    }
}

/// A fully built object, ready to be sent to the cluster
#[derive(Debug, Clone)]
pub enum ClusterResource {
    ConfigMap(ConfigMap),
    Secret(Secret),
}

impl ClusterResource {
    /// Build the object for the identity's kind; only Secrets get encoded values
    pub fn build(identity: &ResourceIdentity, document: &SecretDocument) -> Self {
        match identity.kind {
            ResourceKind::ConfigMap => {
                ClusterResource::ConfigMap(build_config_map(identity, document.clone()))
            }
            ResourceKind::Secret => {
                ClusterResource::Secret(build_secret(identity, encode_collection(document)))
            }
        }
    }
}

fn object_meta(identity: &ResourceIdentity) -> ObjectMeta {
    ObjectMeta {
        name: Some(identity.name.clone()),
        namespace: Some(identity.namespace.clone()),
        labels: Some(BTreeMap::from([(
            UPDATE_BY_LABEL.to_string(),
            TOOL_NAME.to_string(),
        )])),
        ..Default::default()
    }
}

pub fn build_config_map(identity: &ResourceIdentity, data: SecretDocument) -> ConfigMap {
    ConfigMap {
        metadata: object_meta(identity),
        data: Some(data),
        ..Default::default()
    }
}

pub fn build_secret(
    identity: &ResourceIdentity,
    data: BTreeMap<String, k8s_openapi::ByteString>,
) -> Secret {
    Secret {
        metadata: object_meta(identity),
        data: Some(data),
        type_: Some("Opaque".to_string()),
        ..Default::default()
    }
}

/// Create the object in its namespace. Never updates an existing one.
#[instrument(skip(client, resource))]
pub async fn create_resource(client: &Client, resource: &ClusterResource) -> Result<()> {
    match resource {
        ClusterResource::ConfigMap(cm) => {
            create_namespaced(client, cm, ResourceKind::ConfigMap).await
        }
        ClusterResource::Secret(secret) => {
            create_namespaced(client, secret, ResourceKind::Secret).await
        }
    }
}

async fn create_namespaced<K>(client: &Client, object: &K, kind: ResourceKind) -> Result<()>
where
    K: Resource<Scope = NamespaceResourceScope> + Clone + DeserializeOwned + Serialize + Debug,
    K::DynamicType: Default,
{
    let name = object.name_any();
    let namespace = object.namespace().unwrap_or_default();
    let api: Api<K> = Api::namespaced(client.clone(), &namespace);

    info!("Creating {} {}/{}", kind, namespace, name);

    match api.create(&PostParams::default(), object).await {
        Ok(_) => {
            info!("Created {} {}/{}", kind, namespace, name);
            Ok(())
        }
        Err(kube::Error::Api(err)) if err.code == 409 => Err(SyncError::ResourceAlreadyExists {
            kind: kind.to_string(),
            namespace,
            name,
        }),
        Err(e) => Err(SyncError::ResourceCreate(e)),
    }
}
