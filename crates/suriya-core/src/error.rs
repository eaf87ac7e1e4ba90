//! # Error Types
//!
//! Errors shared across the toolkit. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations.
//!
//! Household field mutators are total (clamp instead of reject), so the
//! surface here is small: identifier validation, canonicalization, and IO.

use thiserror::Error;

/// Top-level error type for the Suriya toolkit.
#[derive(Error, Debug)]
pub enum SuriyaError {
    /// An identifier failed charset or length validation.
    #[error("invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    /// A timestamp string failed validation.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Canonicalization failed.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// Float values are not permitted in canonical representations.
    /// Survey snapshots carry integers only.
    #[error("float values are not permitted in canonical representations: {0}")]
    FloatRejected(f64),

    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}
