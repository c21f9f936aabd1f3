//! Scale-down protection policy.
//!
//! Tier 2 (Update): Only enforced on UPDATE operations
//!
//! Validates:
//! - `spec.size` never decreases, since the removed instances may hold
//!   cached data that would be lost

use super::{ValidationContext, ValidationResult};

/// Warning returned when the stored object predates size defaulting
pub const UNSIZED_PREVIOUS_WARNING: &str =
    "previous Memcached has no spec.size; scale-down protection was not evaluated";

/// Validate that an UPDATE does not shrink the resource
pub fn validate(ctx: &ValidationContext<'_>) -> ValidationResult {
    let old = match ctx.old_resource {
        Some(r) => r,
        None => return ValidationResult::allowed(), // Not an UPDATE
    };

    // Tier 1 rejects an unset new size before this policy runs
    let Some(new_size) = ctx.resource.spec.size else {
        return ValidationResult::allowed();
    };

    let Some(old_size) = old.spec.size else {
        return ValidationResult::allowed_with_warnings(vec![
            UNSIZED_PREVIOUS_WARNING.to_string(),
        ]);
    };

    if new_size < old_size {
        return ValidationResult::denied(
            "ScaleDownNotAllowed",
            &format!(
                "scaling down Memcached is not allowed to prevent potential data loss. Attempted scale down from {} to {}",
                old_size, new_size
            ),
        );
    }

    ValidationResult::allowed()
}
