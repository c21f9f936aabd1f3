//! Test fixtures and builder patterns for Memcached and admission reviews.

#![allow(dead_code)]

use kube::core::DynamicObject;
use kube::core::admission::{AdmissionReview, Operation};
use memcached_operator::crd::{Memcached, MemcachedSpec};
use serde_json::{Value, json};
use std::collections::BTreeMap;

/// Builder for creating Memcached test fixtures.
///
/// # Example
/// ```
/// let resource = MemcachedBuilder::new("memcached-sample")
///     .namespace("test-ns")
///     .size(2)
///     .annotation("popgo.domain/deletion-protection", "true")
///     .build();
/// ```
#[derive(Clone, Debug)]
pub struct MemcachedBuilder {
    name: String,
    namespace: Option<String>,
    size: Option<i32>,
    annotations: Option<BTreeMap<String, String>>,
    uid: Option<String>,
}

impl MemcachedBuilder {
    /// Create a new builder with the given resource name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: Some("default".to_string()),
            size: None,
            annotations: None,
            uid: None,
        }
    }

    /// Set the namespace for the resource.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Set spec.size.
    pub fn size(mut self, size: i32) -> Self {
        self.size = Some(size);
        self
    }

    /// Set or clear spec.size.
    pub fn maybe_size(mut self, size: Option<i32>) -> Self {
        self.size = size;
        self
    }

    /// Add an annotation to the resource.
    pub fn annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Set the UID.
    pub fn uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    /// Build the Memcached.
    pub fn build(self) -> Memcached {
        let mut resource = Memcached::new(&self.name, MemcachedSpec { size: self.size });
        resource.metadata.namespace = self.namespace;
        resource.metadata.annotations = self.annotations;
        resource.metadata.uid = self.uid;
        resource
    }

    /// Build the Memcached as an untyped object.
    pub fn build_dynamic(self) -> DynamicObject {
        to_dynamic(&self.build())
    }
}

impl Default for MemcachedBuilder {
    fn default() -> Self {
        Self::new("memcached-sample")
    }
}

/// Convert a typed Memcached into the untyped form an admission request carries.
pub fn to_dynamic(resource: &Memcached) -> DynamicObject {
    serde_json::from_value(serde_json::to_value(resource).unwrap()).unwrap()
}

/// A Memcached sent without any `spec` member.
pub fn without_spec(name: &str) -> DynamicObject {
    serde_json::from_value(json!({
        "apiVersion": "cache.popgo.domain/v1alpha1",
        "kind": "Memcached",
        "metadata": { "name": name, "namespace": "default" }
    }))
    .unwrap()
}

/// An object of some other kind.
pub fn config_map(name: &str) -> DynamicObject {
    serde_json::from_value(json!({
        "apiVersion": "v1",
        "kind": "ConfigMap",
        "metadata": { "name": name, "namespace": "default" },
        "data": { "size": "2" }
    }))
    .unwrap()
}

fn operation_str(operation: &Operation) -> &'static str {
    match operation {
        Operation::Create => "CREATE",
        Operation::Update => "UPDATE",
        Operation::Delete => "DELETE",
        _ => "CONNECT",
    }
}

/// Build an admission/v1 AdmissionReview for a Memcached request.
pub fn review(
    operation: Operation,
    object: Option<&DynamicObject>,
    old_object: Option<&DynamicObject>,
) -> AdmissionReview<DynamicObject> {
    let name = object
        .or(old_object)
        .and_then(|o| o.metadata.name.clone())
        .unwrap_or_default();

    let to_value = |o: Option<&DynamicObject>| -> Value {
        o.map(|o| serde_json::to_value(o).unwrap())
            .unwrap_or(Value::Null)
    };

    serde_json::from_value(json!({
        "apiVersion": "admission.k8s.io/v1",
        "kind": "AdmissionReview",
        "request": {
            "uid": "705ab4f5-6393-11e8-b7cc-42010a800002",
            "kind": { "group": "cache.popgo.domain", "version": "v1alpha1", "kind": "Memcached" },
            "resource": { "group": "cache.popgo.domain", "version": "v1alpha1", "resource": "memcacheds" },
            "name": name,
            "namespace": "default",
            "operation": operation_str(&operation),
            "userInfo": { "username": "admin" },
            "object": to_value(object),
            "oldObject": to_value(old_object),
            "dryRun": false
        }
    }))
    .unwrap()
}

/// An AdmissionReview with no request in it.
pub fn empty_review() -> AdmissionReview<DynamicObject> {
    serde_json::from_value(json!({
        "apiVersion": "admission.k8s.io/v1",
        "kind": "AdmissionReview"
    }))
    .unwrap()
}
