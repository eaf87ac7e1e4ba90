//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the identifiers used across the toolkit. These
//! prevent accidental identifier confusion: a province id cannot be passed
//! where a wizard session id is expected, and vice versa.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::error::SuriyaError;

/// Identifier of a province (or map region) from the fixed catalog.
///
/// Format: 1 to 16 lowercase ASCII letters or digits (`bkk`, `cmi`, `lksg`).
/// Construction validates the charset, on deserialization too; whether the
/// id names a real catalog entry is a separate question answered by
/// [`crate::province::Province::find`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ProvinceId(String);

impl<'de> Deserialize<'de> for ProvinceId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ProvinceId::new(raw).map_err(|error| D::Error::custom(error.to_string()))
    }
}

impl ProvinceId {
    /// Validate and wrap a raw identifier string.
    pub fn new(id: impl Into<String>) -> Result<Self, SuriyaError> {
        let id = id.into();
        if is_region_token(&id) {
            Ok(Self(id))
        } else {
            Err(SuriyaError::InvalidIdentifier(id))
        }
    }

    /// Access the inner identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Wrap a catalog literal without re-validating. Callers in this crate
    /// guarantee the literal passes `is_region_token`; the catalog test
    /// enforces it for every entry.
    pub(crate) fn from_catalog(id: &'static str) -> Self {
        Self(id.to_string())
    }
}

impl FromStr for ProvinceId {
    type Err = SuriyaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for ProvinceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique identifier for one wizard session.
///
/// A session is a single in-memory run of the survey; the id ties log lines
/// and the eventual submission back to the run that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Generate a new random session identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "session:{}", self.0)
    }
}

/// Lowercase ASCII alphanumeric, 1..=16 bytes.
fn is_region_token(s: &str) -> bool {
    !s.is_empty()
        && s.len() <= 16
        && s.bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_province_ids() {
        for id in ["bkk", "cmi", "lksg", "a", "p1"] {
            assert!(ProvinceId::new(id).is_ok(), "{id} should be valid");
        }
    }

    #[test]
    fn test_invalid_province_ids() {
        for id in ["", "BKK", "bang kok", "กรุงเทพ", "a-b", "abcdefghijklmnopq"] {
            assert!(ProvinceId::new(id).is_err(), "{id:?} should be rejected");
        }
    }

    #[test]
    fn test_province_id_display() {
        let id = ProvinceId::new("bkk").unwrap();
        assert_eq!(id.to_string(), "bkk");
        assert_eq!(id.as_str(), "bkk");
    }

    #[test]
    fn test_session_ids_unique() {
        assert_ne!(SessionId::new(), SessionId::new());
    }

    #[test]
    fn test_session_id_display_prefix() {
        assert!(SessionId::new().to_string().starts_with("session:"));
    }
}
