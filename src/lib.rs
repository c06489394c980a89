//! # Passforge
//!
//! Password composition, strength scoring and encrypted persistence.
//!
//! ## Features
//!
//! - Per-class composition (letters, digits, specials) drawn from a CSPRNG
//! - Minimum-length top-up and maximum-length cap
//! - Rule-based strength classification
//! - AES-256-GCM encrypted, append-only record log under a local key
//!
//! ## Example
//!
//! ```no_run
//! use passforge::{CompositionRequest, GeneratorSession, PersistenceRoot};
//! use std::path::Path;
//!
//! let root = PersistenceRoot::new(Path::new("/path/to/store"));
//! let mut session = GeneratorSession::with_root(root);
//!
//! let generated = session.generate(&CompositionRequest::new(8, 4, 4)).unwrap();
//! println!("{} ({})", generated.password.as_str(), generated.strength);
//! session.save(&generated.password).unwrap();
//! ```

pub mod business;
pub mod config;
pub mod crypto;
pub mod error;
pub mod generator;
pub mod storage;
pub mod utils;

// Re-export main types
pub use error::{GeneratorError, Result};
pub use business::{GeneratedPassword, GeneratorSession};
pub use config::GeneratorOptions;
pub use crypto::{load_or_create_key, EncryptedRecord, EncryptionKey};
pub use generator::{
    analyze, compose, normalize, score, CharacterClass, CompositionRequest, Password,
    StrengthLevel, StrengthReport,
};
pub use storage::{append, PersistenceRoot};

/// Minimum password length after normalization
pub const MIN_LENGTH: usize = 12;

/// Maximum password length accepted by the core
pub const MAX_LENGTH: usize = 100;

/// Key file name under the persistence root
pub const KEY_FILENAME: &str = "secret.key";

/// Encrypted record log name under the persistence root
pub const RECORDS_FILENAME: &str = "passwords.enc";

/// AES-256 key length in bytes
pub const KEY_LENGTH: usize = 32;

/// AES-GCM nonce length in bytes
pub const NONCE_LENGTH: usize = 12;
