//! # Error Types
//!
//! Validation errors shared across the workspace. All errors use `thiserror`
//! for derive-based `Display` and `Error` implementations. Operational
//! errors (store failures, reservation exhaustion) live in the crates that
//! produce them.

use thiserror::Error;

/// Validation failure when constructing a domain primitive.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The value is not a valid UUID-based identifier.
    #[error("invalid identifier {value:?}: {reason}")]
    InvalidIdentifier {
        /// The offending input.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The value is not a recognized owner reference.
    #[error("invalid owner reference: {0:?}")]
    InvalidOwnerRef(String),
}
