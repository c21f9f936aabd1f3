//! Error types for the admission webhooks.
//!
//! Policy violations are not errors: they are reported as a denied
//! `ValidationResult`. The variants here describe a host wiring problem or a
//! malformed request, and none of them is worth retrying.

use kube::core::admission::SerializePatchError;
use thiserror::Error;

/// Error type for webhook operations
#[derive(Error, Debug)]
pub enum Error {
    /// The supplied object is not a Memcached
    #[error("expected a {expected} object but got {found}")]
    TypeMismatch {
        /// `apiVersion, Kind=...` of the governed resource
        expected: String,
        /// What the caller actually supplied
        found: String,
    },

    /// The admission request carried no object for an operation that needs one
    #[error("missing {0} in admission request")]
    MissingObject(&'static str),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The JSON patch produced by defaulting could not be applied
    #[error("Patch error: {0}")]
    JsonPatch(#[from] json_patch::PatchError),

    /// The JSON patch produced by defaulting could not be attached
    #[error("Failed to attach patch: {0}")]
    Patch(#[from] SerializePatchError),
}

impl Error {
    /// Check if this error is a type mismatch at the object boundary
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Error::TypeMismatch { .. })
    }

    /// Check if this error should be retried
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::TypeMismatch { .. } | Error::MissingObject(_) => false,
            Error::Serialization(_) | Error::JsonPatch(_) | Error::Patch(_) => false,
        }
    }
}

/// Result type alias for webhook operations
pub type Result<T> = std::result::Result<T, Error>;
