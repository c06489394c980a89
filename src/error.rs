//! Error types for Passforge

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for generation and persistence operations
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// A class count is negative or the limits are inconsistent
    #[error("Invalid composition: {0}")]
    InvalidComposition(String),

    /// All class counts are zero
    #[error("Empty composition: no characters requested")]
    EmptyComposition,

    /// Requested length exceeds the maximum
    #[error("Composition too large: {total} characters requested, maximum is {max}")]
    CompositionTooLarge { total: i64, max: usize },

    /// Key file exists but cannot be used as a key
    #[error("Corrupt key file {path:?}: expected {expected} bytes, found {found}")]
    CorruptKeyFile {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    /// I/O failure while creating the key or appending a record
    #[error("Persistence failure: {0}")]
    PersistenceFailure(#[from] std::io::Error),

    /// Encryption failed
    #[error("Encryption error: {0}")]
    EncryptionError(String),

    /// Decryption or authentication failed
    #[error("Decryption error: {0}")]
    DecryptionError(String),

    /// A persisted record line could not be decoded
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Options could not be loaded or are inconsistent
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<tempfile::PersistError> for GeneratorError {
    fn from(err: tempfile::PersistError) -> Self {
        GeneratorError::PersistenceFailure(err.error)
    }
}

impl From<serde_json::Error> for GeneratorError {
    fn from(err: serde_json::Error) -> Self {
        GeneratorError::ConfigError(err.to_string())
    }
}

/// Result type alias for Passforge operations
pub type Result<T> = std::result::Result<T, GeneratorError>;
