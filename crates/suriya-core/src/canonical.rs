//! # Canonical Serialization
//!
//! Defines `CanonicalBytes`, the sole construction path for bytes used in
//! digest computation. Submission reference ids must not depend on field
//! order or formatting, so the bytes are produced by RFC 8785 (JCS)
//! serialization: sorted keys, compact separators, deterministic output.
//!
//! The inner buffer is private. The only way to obtain `CanonicalBytes` is
//! through [`CanonicalBytes::new()`], which rejects floats before
//! serializing; survey snapshots are integer-only, and floats have
//! non-deterministic canonical-number edge cases that would silently fork
//! reference ids.

use serde::Serialize;
use serde_json::Value;

use crate::error::CanonicalizationError;

/// Bytes produced exclusively by JCS-compatible canonicalization.
///
/// # Invariants
///
/// - The only constructor is [`CanonicalBytes::new()`].
/// - No float values appear anywhere in the serialized tree.
/// - Serialization uses sorted keys with compact separators (RFC 8785).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Construct canonical bytes from any serializable value.
    ///
    /// # Errors
    ///
    /// Returns [`CanonicalizationError::FloatRejected`] if the value
    /// contains non-integer numbers, or
    /// [`CanonicalizationError::SerializationFailed`] if JCS serialization
    /// fails.
    pub fn new(obj: &impl Serialize) -> Result<Self, CanonicalizationError> {
        let value = serde_json::to_value(obj)?;
        reject_floats(&value)?;
        let serialized = serde_jcs::to_string(&value)?;
        Ok(Self(serialized.into_bytes()))
    }

    /// Access the canonical bytes for digest computation.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length of the canonical byte sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the canonical byte sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Walk the JSON value tree and reject any number that is not representable
/// as `i64`/`u64`.
fn reject_floats(value: &Value) -> Result<(), CanonicalizationError> {
    match value {
        Value::Null | Value::Bool(_) | Value::String(_) => Ok(()),
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                Ok(())
            } else {
                Err(CanonicalizationError::FloatRejected(
                    n.as_f64().unwrap_or(f64::NAN),
                ))
            }
        }
        Value::Array(items) => {
            for item in items {
                reject_floats(item)?;
            }
            Ok(())
        }
        Value::Object(map) => {
            for item in map.values() {
                reject_floats(item)?;
            }
            Ok(())
        }
    }
}
