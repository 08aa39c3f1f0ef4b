//! Error types for the mediscan-core library.
//!
//! Field extraction itself cannot fail: a field that does not match is simply
//! absent from the result. Errors here come from the surrounding machinery
//! (configuration files, serialization, I/O).

use thiserror::Error;

/// Main error type for the mediscan library.
#[derive(Error, Debug)]
pub enum MediscanError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the mediscan library.
pub type Result<T> = std::result::Result<T, MediscanError>;
