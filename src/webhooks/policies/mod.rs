//! Validation policies for Memcached admission webhooks.
//!
//! Policies are organized into tiers:
//! - Tier 1 (Critical): Enforced on CREATE and UPDATE (size bounds)
//! - Tier 2 (Create): Only on CREATE (forbidden names)
//! - Tier 2 (Update): Only on UPDATE (no scale down)
//! - Tier 3 (Delete): Only on DELETE (deletion protection)
//!
//! Tier 1 always runs first, so an out-of-range size is reported even when a
//! later tier would also deny the request.

pub mod deletion_protection;
pub mod naming;
pub mod scaling;
pub mod size;

use crate::crd::Memcached;

/// Result of a validation check
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the validation passed
    pub allowed: bool,
    /// Reason for denial (if not allowed)
    pub reason: Option<String>,
    /// Detailed message (if not allowed)
    pub message: Option<String>,
    /// Non-fatal warnings returned to the client (only when allowed)
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Create an allowed result
    pub fn allowed() -> Self {
        Self {
            allowed: true,
            reason: None,
            message: None,
            warnings: Vec::new(),
        }
    }

    /// Create an allowed result carrying warnings
    pub fn allowed_with_warnings(warnings: Vec<String>) -> Self {
        Self {
            warnings,
            ..Self::allowed()
        }
    }

    /// Create a denied result
    pub fn denied(reason: &str, message: &str) -> Self {
        Self {
            allowed: false,
            reason: Some(reason.to_string()),
            message: Some(message.to_string()),
            warnings: Vec::new(),
        }
    }
}

/// Context for validation
#[derive(Clone, Copy, Debug)]
pub struct ValidationContext<'a> {
    /// The resource being validated
    pub resource: &'a Memcached,
    /// The old resource (for UPDATE operations)
    pub old_resource: Option<&'a Memcached>,
}

impl<'a> ValidationContext<'a> {
    /// Context for a CREATE or DELETE operation
    pub fn new(resource: &'a Memcached) -> Self {
        Self {
            resource,
            old_resource: None,
        }
    }

    /// Context for an UPDATE operation
    pub fn update(old_resource: &'a Memcached, resource: &'a Memcached) -> Self {
        Self {
            resource,
            old_resource: Some(old_resource),
        }
    }

    /// Check if this is an UPDATE operation
    pub fn is_update(&self) -> bool {
        self.old_resource.is_some()
    }
}

/// Run the policies that apply on CREATE
pub fn validate_create(ctx: &ValidationContext<'_>) -> ValidationResult {
    // Tier 1: Critical validations
    let result = size::validate(ctx);
    if !result.allowed {
        return result;
    }

    // Tier 2: Create validations
    let result = naming::validate(ctx);
    if !result.allowed {
        return result;
    }

    ValidationResult::allowed()
}

/// Run the policies that apply on UPDATE
pub fn validate_update(ctx: &ValidationContext<'_>) -> ValidationResult {
    // Tier 1: Critical validations
    let result = size::validate(ctx);
    if !result.allowed {
        return result;
    }

    let mut warnings = result.warnings;

    // Tier 2: Update validations
    if ctx.is_update() {
        let result = scaling::validate(ctx);
        if !result.allowed {
            return result;
        }
        warnings.extend(result.warnings);
    }

    ValidationResult::allowed_with_warnings(warnings)
}

/// Run the policies that apply on DELETE
pub fn validate_delete(ctx: &ValidationContext<'_>) -> ValidationResult {
    deletion_protection::validate(ctx)
}
