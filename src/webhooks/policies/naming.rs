//! Forbidden name policy.
//!
//! Tier 2 (Create): Only enforced on CREATE operations
//!
//! Names are immutable after creation, so the denylist only needs to gate
//! the CREATE path.

use kube::ResourceExt;

use super::{ValidationContext, ValidationResult};

/// Name that may never be used for a Memcached resource
pub const FORBIDDEN_NAME: &str = "forbidden-name";

/// Validate that the resource name is not on the denylist
pub fn validate(ctx: &ValidationContext<'_>) -> ValidationResult {
    let name = ctx.resource.name_any();

    if name == FORBIDDEN_NAME {
        return ValidationResult::denied(
            "ForbiddenName",
            &format!(
                "the Memcached name '{}' is explicitly forbidden by policy",
                name
            ),
        );
    }

    ValidationResult::allowed()
}
