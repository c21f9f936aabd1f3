//! Custom Resource Definitions (CRDs) for memcached-operator.
//!
//! - `Memcached`: a Memcached deployment sized by `spec.size`

mod memcached;

pub use memcached::*;
