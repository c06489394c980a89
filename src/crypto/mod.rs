//! Cryptographic operations for Passforge
//!
//! AES-256-GCM record encryption under a single locally stored key.

mod aes;
mod key;

pub use aes::{decrypt, encrypt, EncryptedRecord, TAG_LENGTH};
pub use key::{load_or_create_key, EncryptionKey};
