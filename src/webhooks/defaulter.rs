//! Defaulting for Memcached resources.
//!
//! Runs on CREATE and UPDATE before validation. Defaulting is total and
//! idempotent: a second pass over an already defaulted resource changes
//! nothing and reports no fields.
//!
//! Like validation, defaulting takes no request context or cancellation
//! token; it is synchronous and never blocks.

use kube::ResourceExt;
use kube::core::DynamicObject;

use super::error::Result;
use super::object::{to_memcached, with_spec};
use super::observer::{AdmissionObserver, DefaultedField, TracingObserver};
use crate::crd::Memcached;

/// Size used when `spec.size` is omitted
pub const DEFAULT_SIZE: i32 = 3;

/// Annotation recording how Memcached pods are rolled out
pub const DEPLOYMENT_STRATEGY_ANNOTATION: &str = "cache.popgo.domain/deployment-strategy";

/// Deployment strategy used when the annotation is missing
pub const DEFAULT_DEPLOYMENT_STRATEGY: &str = "rolling-update";

/// Outcome of defaulting an untyped object
#[derive(Clone, Debug, PartialEq)]
pub struct Defaulted {
    /// Fields that were set, in the order they were set
    pub fields: Vec<DefaultedField>,
    /// RFC 6902 patch turning the original object into the defaulted one
    pub patch: json_patch::Patch,
}

impl Defaulted {
    /// Check if defaulting left the object unchanged
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Fills unset Memcached fields with policy defaults
#[derive(Clone, Debug, Default)]
pub struct MemcachedDefaulter<O = TracingObserver> {
    observer: O,
}

impl MemcachedDefaulter {
    /// Create a defaulter that logs through `tracing`
    pub fn new() -> Self {
        Self {
            observer: TracingObserver,
        }
    }
}

impl<O: AdmissionObserver> MemcachedDefaulter<O> {
    /// Create a defaulter reporting to the given observer
    pub fn with_observer(observer: O) -> Self {
        Self { observer }
    }

    /// Apply defaults to `resource` in place.
    ///
    /// Returns the fields that were set, in the order they were set.
    pub fn default_resource(&self, resource: &mut Memcached) -> Vec<DefaultedField> {
        let name = resource.name_any();
        self.observer.defaulting(&name);

        let mut defaulted = Vec::new();

        if resource.spec.size.is_none() {
            resource.spec.size = Some(DEFAULT_SIZE);
            defaulted.push(DefaultedField::Size);
        }

        let annotations = resource.metadata.annotations.get_or_insert_with(|| {
            defaulted.push(DefaultedField::Annotations);
            Default::default()
        });

        if !annotations.contains_key(DEPLOYMENT_STRATEGY_ANNOTATION) {
            annotations.insert(
                DEPLOYMENT_STRATEGY_ANNOTATION.to_string(),
                DEFAULT_DEPLOYMENT_STRATEGY.to_string(),
            );
            defaulted.push(DefaultedField::DeploymentStrategy);
        }

        for field in &defaulted {
            self.observer.defaulted(&name, *field);
        }

        defaulted
    }

    /// Apply defaults to an untyped object in place.
    ///
    /// Fails only when `obj` is not a Memcached; `obj` is left untouched then.
    /// Fields outside the Memcached schema are carried over unchanged.
    pub fn default_object(&self, obj: &mut DynamicObject) -> Result<Defaulted> {
        let mut resource = to_memcached(obj)?;
        let before = serde_json::to_value(&resource)?;
        let fields = self.default_resource(&mut resource);
        let changes = json_patch::diff(&before, &serde_json::to_value(&resource)?);

        if changes.0.is_empty() {
            return Ok(Defaulted {
                fields,
                patch: changes,
            });
        }

        // The typed diff assumes `spec` exists; replay it on a normalized copy
        // and diff against the original so the patch applies to the request as sent
        let original = serde_json::to_value(&*obj)?;
        let mut value = with_spec(original.clone());
        json_patch::patch(&mut value, &changes.0)?;
        let patch = json_patch::diff(&original, &value);
        *obj = serde_json::from_value(value)?;

        Ok(Defaulted { fields, patch })
    }
}
