//! Error types for the lanecard-protocol crate.
//!
//! This module defines all error types that can occur when working with
//! protocol types, including serialization failures and duration parsing.

use thiserror::Error;

/// Errors that can occur during protocol operations.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Failed to serialize a protocol type to JSON.
    #[error("failed to serialize to JSON: {0}")]
    SerializationFailed(#[source] serde_json::Error),

    /// Failed to deserialize a protocol type from JSON.
    #[error("failed to deserialize from JSON: {0}")]
    DeserializationFailed(#[source] serde_json::Error),

    /// A duration string does not start with a whole number of minutes.
    ///
    /// This is the "not a number" state of the time-remaining calculation.
    #[error("invalid duration {0:?}: expected a leading whole number of minutes")]
    InvalidDuration(String),

    /// A field name does not refer to a card field.
    #[error("unknown card field: {0:?}")]
    UnknownField(String),
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;
