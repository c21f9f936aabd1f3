//! Memcached Custom Resource Definition.
//!
//! Only the fields the admission policy reads or writes are modelled here:
//! `spec.size` and the object's annotations.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// API group of the Memcached resource
pub const GROUP: &str = "cache.popgo.domain";

/// API version of the Memcached resource
pub const VERSION: &str = "v1alpha1";

/// Kind of the Memcached resource
pub const KIND: &str = "Memcached";

/// Memcached is a custom resource for running a sized Memcached deployment.
///
/// Example:
/// ```yaml
/// apiVersion: cache.popgo.domain/v1alpha1
/// kind: Memcached
/// metadata:
///   name: memcached-sample
///   annotations:
///     popgo.domain/deletion-protection: "true"
/// spec:
///   size: 2
/// ```
#[derive(CustomResource, Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[kube(
    group = "cache.popgo.domain",
    version = "v1alpha1",
    kind = "Memcached",
    plural = "memcacheds",
    namespaced,
    derive = "PartialEq",
    printcolumn = r#"{"name":"Size", "type":"integer", "jsonPath":".spec.size"}"#,
    printcolumn = r#"{"name":"Age", "type":"date", "jsonPath":".metadata.creationTimestamp"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct MemcachedSpec {
    /// Desired number of Memcached instances.
    /// Filled in by the mutating webhook when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i32>,
}
