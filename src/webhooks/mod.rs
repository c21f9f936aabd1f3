//! Webhook module for Memcached admission requests.
//!
//! This module provides the mutating (defaulting) and validating halves of
//! the Memcached admission policy:
//! - `MemcachedDefaulter`: fills `spec.size` and the deployment-strategy annotation
//! - `MemcachedValidator`: tiered validation policies per lifecycle transition
//! - `admission`: adapters from kube-rs `AdmissionReview`s to the two above

pub mod admission;
pub mod defaulter;
pub mod error;
pub mod object;
pub mod observer;
pub mod policies;
pub mod validator;

pub use defaulter::{Defaulted, MemcachedDefaulter};
pub use error::{Error, Result};
pub use observer::{AdmissionObserver, DefaultedField, TracingObserver, Transition};
pub use policies::{ValidationContext, ValidationResult};
pub use validator::MemcachedValidator;

// Re-export kube-rs admission types for contract testing
pub use kube::core::admission::{AdmissionRequest, AdmissionResponse, AdmissionReview, Operation};
