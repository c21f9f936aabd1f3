//! Conversion between untyped admission objects and `Memcached`.
//!
//! This is the only place the kind of an incoming object is checked. Past this
//! boundary the policies work on `Memcached` values directly.

use kube::Resource;
use kube::core::DynamicObject;

use super::error::{Error, Result};
use crate::crd::Memcached;

/// `apiVersion, Kind=...` description of the governed resource
pub fn expected_kind() -> String {
    describe(&Memcached::api_version(&()), &Memcached::kind(&()))
}

fn describe(api_version: &str, kind: &str) -> String {
    format!("{}, Kind={}", api_version, kind)
}

/// Convert an untyped object into a `Memcached`.
///
/// Fails with [`Error::TypeMismatch`] when the object's type metadata names
/// another kind, or when its body does not deserialize as a Memcached.
pub fn to_memcached(obj: &DynamicObject) -> Result<Memcached> {
    let Some(types) = obj.types.as_ref() else {
        return Err(Error::TypeMismatch {
            expected: expected_kind(),
            found: "an object without apiVersion/kind".to_string(),
        });
    };

    if types.api_version != Memcached::api_version(&()) || types.kind != Memcached::kind(&()) {
        return Err(Error::TypeMismatch {
            expected: expected_kind(),
            found: describe(&types.api_version, &types.kind),
        });
    }

    let value = with_spec(serde_json::to_value(obj)?);
    serde_json::from_value(value).map_err(|e| Error::TypeMismatch {
        expected: expected_kind(),
        found: format!("a malformed {} ({})", types.kind, e),
    })
}

/// Fill an absent or null `spec` with an empty one.
///
/// `spec` is optional on the wire and every `MemcachedSpec` field has a
/// default, so a Memcached without one is still a Memcached.
pub(crate) fn with_spec(mut value: serde_json::Value) -> serde_json::Value {
    if let Some(fields) = value.as_object_mut() {
        let spec = fields.entry("spec").or_insert(serde_json::Value::Null);
        if spec.is_null() {
            *spec = serde_json::Value::Object(serde_json::Map::new());
        }
    }
    value
}
