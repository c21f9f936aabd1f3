//! Validation entry points for Memcached resources.
//!
//! One entry point per lifecycle transition. The typed variants never fail;
//! the `*_object` variants first convert each untyped object and fail with a
//! type mismatch when any of them is not a Memcached.
//!
//! No request context or cancellation token is taken: every check is
//! synchronous and does no I/O, so there is nothing to cancel.

use kube::ResourceExt;
use kube::core::DynamicObject;

use super::error::Result;
use super::object::to_memcached;
use super::observer::{AdmissionObserver, TracingObserver, Transition};
use super::policies::{self, ValidationContext, ValidationResult};
use crate::crd::Memcached;

/// Validates Memcached resources on create, update and delete
#[derive(Clone, Debug, Default)]
pub struct MemcachedValidator<O = TracingObserver> {
    observer: O,
}

impl MemcachedValidator {
    /// Create a validator that logs through `tracing`
    pub fn new() -> Self {
        Self {
            observer: TracingObserver,
        }
    }
}

impl<O: AdmissionObserver> MemcachedValidator<O> {
    /// Create a validator reporting to the given observer
    pub fn with_observer(observer: O) -> Self {
        Self { observer }
    }

    /// Validate a Memcached upon creation
    pub fn validate_create(&self, resource: &Memcached) -> ValidationResult {
        let result = policies::validate_create(&ValidationContext::new(resource));
        self.observer
            .decided(Transition::Create, &resource.name_any(), &result);
        result
    }

    /// Validate a Memcached upon update
    pub fn validate_update(&self, old: &Memcached, new: &Memcached) -> ValidationResult {
        let result = policies::validate_update(&ValidationContext::update(old, new));
        self.observer
            .decided(Transition::Update, &new.name_any(), &result);
        result
    }

    /// Validate a Memcached upon deletion
    pub fn validate_delete(&self, resource: &Memcached) -> ValidationResult {
        let result = policies::validate_delete(&ValidationContext::new(resource));
        self.observer
            .decided(Transition::Delete, &resource.name_any(), &result);
        result
    }

    /// Validate an untyped object upon creation
    pub fn validate_create_object(&self, obj: &DynamicObject) -> Result<ValidationResult> {
        let resource = to_memcached(obj)?;
        Ok(self.validate_create(&resource))
    }

    /// Validate untyped objects upon update
    pub fn validate_update_object(
        &self,
        old: &DynamicObject,
        new: &DynamicObject,
    ) -> Result<ValidationResult> {
        let new = to_memcached(new)?;
        let old = to_memcached(old)?;
        Ok(self.validate_update(&old, &new))
    }

    /// Validate an untyped object upon deletion
    pub fn validate_delete_object(&self, obj: &DynamicObject) -> Result<ValidationResult> {
        let resource = to_memcached(obj)?;
        Ok(self.validate_delete(&resource))
    }
}
