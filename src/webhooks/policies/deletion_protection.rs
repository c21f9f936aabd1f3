//! Deletion protection policy.
//!
//! Tier 3 (Delete): Only enforced on DELETE operations
//!
//! A Memcached carrying `popgo.domain/deletion-protection: "true"` cannot be
//! deleted until the annotation is removed. Any other value leaves the
//! resource unprotected.

use kube::ResourceExt;

use super::{ValidationContext, ValidationResult};

/// Annotation key that blocks deletion
pub const DELETION_PROTECTION_ANNOTATION: &str = "popgo.domain/deletion-protection";

/// Annotation value that enables protection
const PROTECTION_ENABLED: &str = "true";

/// Check if the resource is protected against deletion
fn is_protected(ctx: &ValidationContext<'_>) -> bool {
    ctx.resource
        .metadata
        .annotations
        .as_ref()
        .and_then(|annotations| annotations.get(DELETION_PROTECTION_ANNOTATION))
        .is_some_and(|value| value == PROTECTION_ENABLED)
}

/// Validate that a DELETE is not blocked by the protection annotation
pub fn validate(ctx: &ValidationContext<'_>) -> ValidationResult {
    if !is_protected(ctx) {
        return ValidationResult::allowed();
    }

    ValidationResult::denied(
        "DeletionProtected",
        &format!(
            "deletion of Memcached {} is blocked by annotation '{}: {}'. Please remove the annotation to proceed",
            ctx.resource.name_any(),
            DELETION_PROTECTION_ANNOTATION,
            PROTECTION_ENABLED
        ),
    )
}
