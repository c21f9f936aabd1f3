//! memcached-operator library crate
//!
//! This module exports the Memcached CRD definition and its admission policy.

pub mod crd;
pub mod webhooks;

pub use webhooks::{
    MemcachedDefaulter, MemcachedValidator, TracingObserver, ValidationResult, admission,
};
