//! Size validation policy.
//!
//! Tier 1 (Critical): Enforced on CREATE and UPDATE
//!
//! Validates:
//! - `spec.size` is set
//! - `spec.size` is within [MIN_SIZE, MAX_SIZE]

use super::{ValidationContext, ValidationResult};
use crate::crd::Memcached;

/// Minimum number of Memcached instances
pub const MIN_SIZE: i32 = 1;

/// Maximum number of Memcached instances
pub const MAX_SIZE: i32 = 3;

/// Validate the size of the resource under admission
pub fn validate(ctx: &ValidationContext<'_>) -> ValidationResult {
    validate_spec(ctx.resource)
}

/// Shared spec validation for CREATE and UPDATE
pub fn validate_spec(resource: &Memcached) -> ValidationResult {
    let Some(size) = resource.spec.size else {
        return ValidationResult::denied(
            "MissingSize",
            "spec.size is required and must not be nil",
        );
    };

    if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
        return ValidationResult::denied(
            "InvalidSize",
            &format!(
                "spec.size must be between {} and {} (inclusive), but got {}",
                MIN_SIZE, MAX_SIZE, size
            ),
        );
    }

    ValidationResult::allowed()
}
