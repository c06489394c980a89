//! AES-256-GCM encryption and decryption of password records
//!
//! - 256-bit key
//! - 96-bit random nonce, fresh for every record
//! - 128-bit authentication tag appended to the ciphertext

use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Nonce};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::key::EncryptionKey;
use crate::error::{GeneratorError, Result};
use crate::NONCE_LENGTH;

/// Authentication tag size appended by AES-GCM
pub const TAG_LENGTH: usize = 16;

/// One encrypted password
///
/// Persisted as a single base64 line of `nonce || ciphertext || tag`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedRecord {
    /// Unique nonce for this record
    pub nonce: [u8; NONCE_LENGTH],
    /// Ciphertext with the authentication tag appended
    pub ciphertext: Vec<u8>,
}

impl EncryptedRecord {
    /// Encode as one line-safe string (no trailing newline)
    pub fn to_line(&self) -> String {
        let mut raw = Vec::with_capacity(NONCE_LENGTH + self.ciphertext.len());
        raw.extend_from_slice(&self.nonce);
        raw.extend_from_slice(&self.ciphertext);
        STANDARD.encode(raw)
    }

    /// Decode a line produced by `to_line`
    pub fn from_line(line: &str) -> Result<Self> {
        let raw = STANDARD
            .decode(line.trim_end_matches(['\r', '\n']))
            .map_err(|e| GeneratorError::InvalidRecord(format!("Invalid base64: {}", e)))?;

        if raw.len() < NONCE_LENGTH + TAG_LENGTH {
            return Err(GeneratorError::InvalidRecord(format!(
                "Record too short: {} bytes",
                raw.len()
            )));
        }

        let (nonce, ciphertext) = raw.split_at(NONCE_LENGTH);
        let nonce: [u8; NONCE_LENGTH] = nonce
            .try_into()
            .map_err(|_| GeneratorError::InvalidRecord("Invalid nonce length".to_string()))?;

        Ok(Self {
            nonce,
            ciphertext: ciphertext.to_vec(),
        })
    }
}

/// Encrypt `plaintext` under `key` with a freshly generated nonce
pub fn encrypt(key: &EncryptionKey, plaintext: &[u8]) -> Result<EncryptedRecord> {
    let cipher = Aes256Gcm::new(key.as_bytes().into());
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|e| GeneratorError::EncryptionError(format!("Encryption failed: {}", e)))?;

    Ok(EncryptedRecord {
        nonce: nonce.into(),
        ciphertext,
    })
}

/// Decrypt and authenticate a record
///
/// Fails with `DecryptionError` if the key is wrong or the record was modified.
pub fn decrypt(key: &EncryptionKey, record: &EncryptedRecord) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new(key.as_bytes().into());
    let nonce = Nonce::from(record.nonce);

    cipher
        .decrypt(&nonce, record.ciphertext.as_slice())
        .map_err(|_| GeneratorError::DecryptionError("Authentication failed".to_string()))
}
