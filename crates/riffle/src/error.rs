//! Error types for the riffle crate.

use thiserror::Error;

/// Errors raised when composing queries or chunking sequences.
///
/// Every variant is raised synchronously, before any iteration over the
/// source begins. Nothing is caught or retried inside the library.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RiffleError {
    /// A chunk size of zero was passed to either chunking operator.
    #[error("chunk size must be greater than zero")]
    ZeroChunkSize,

    /// A computed field selector was passed to the search builder, which
    /// accepts only direct field reads.
    #[error("field '{field}' is computed; search requires direct field access")]
    ComputedField {
        /// Name of the offending selector.
        field: &'static str,
    },

    /// An `order_by` field name did not resolve to any queryable field.
    #[error("unknown field '{field}'")]
    UnknownField {
        /// The name that failed to resolve.
        field: String,
    },
}

/// Result type for riffle operations.
pub type Result<T> = std::result::Result<T, RiffleError>;
