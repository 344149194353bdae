//! Error types for Arbor.

use thiserror::Error;

/// Result type alias using ArborError.
pub type Result<T> = std::result::Result<T, ArborError>;

/// Errors that can occur in the fallible parts of the Arbor workspace.
///
/// The B+ tree core reports expected outcomes (key absent, key replaced)
/// through `Option` and `bool` returns; contract violations and internal
/// invariant violations are fatal there. This enum serves configuration
/// loading and the demo driver.
#[derive(Debug, Error)]
pub enum ArborError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid parameter: {name} = {value}")]
    InvalidParameter { name: String, value: String },

    #[error("Internal error: {0}")]
    Internal(String),
}
