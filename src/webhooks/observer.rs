//! Observer hooks for admission decisions.
//!
//! The defaulter and validator report what they did through an
//! [`AdmissionObserver`] instead of logging directly. The default
//! [`TracingObserver`] turns every event into a structured `tracing` event;
//! tests can swap in an observer that records events instead.

use tracing::{debug, info, warn};

use super::policies::ValidationResult;

/// Lifecycle transition being evaluated
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Transition::Create => write!(f, "create"),
            Transition::Update => write!(f, "update"),
            Transition::Delete => write!(f, "delete"),
        }
    }
}

/// Field filled in by the defaulter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefaultedField {
    /// `spec.size` was unset
    Size,
    /// `metadata.annotations` was absent
    Annotations,
    /// The deployment-strategy annotation was missing
    DeploymentStrategy,
}

impl std::fmt::Display for DefaultedField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DefaultedField::Size => write!(f, "spec.size"),
            DefaultedField::Annotations => write!(f, "metadata.annotations"),
            DefaultedField::DeploymentStrategy => write!(f, "deployment-strategy annotation"),
        }
    }
}

/// Sink for informational admission events.
///
/// Implementations must not influence the decision; they only observe it.
pub trait AdmissionObserver: Send + Sync {
    /// Called once per defaulting pass, before any field is touched
    fn defaulting(&self, name: &str);

    /// Called for each field the defaulter set
    fn defaulted(&self, name: &str, field: DefaultedField);

    /// Called once per validation pass with the final decision
    fn decided(&self, transition: Transition, name: &str, result: &ValidationResult);
}

/// Observer that emits `tracing` events
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl AdmissionObserver for TracingObserver {
    fn defaulting(&self, name: &str) {
        debug!(name = %name, "Defaulting for Memcached");
    }

    fn defaulted(&self, name: &str, field: DefaultedField) {
        info!(name = %name, field = %field, "Defaulted Memcached field");
    }

    fn decided(&self, transition: Transition, name: &str, result: &ValidationResult) {
        if result.allowed {
            info!(
                name = %name,
                transition = %transition,
                warnings = result.warnings.len(),
                "Memcached admission allowed"
            );
        } else {
            warn!(
                name = %name,
                transition = %transition,
                reason = result.reason.as_deref().unwrap_or("ValidationFailed"),
                message = result.message.as_deref().unwrap_or_default(),
                "Memcached admission denied"
            );
        }
    }
}
