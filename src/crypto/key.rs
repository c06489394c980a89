//! Key management for the encrypted record log
//!
//! One raw 32-byte key file per persistence root:
//! 1. If the file exists, load it and check its length
//! 2. Otherwise generate a key, write it to a temporary file in the root
//!    and link it into place without replacing anything already there

use std::fmt;
use std::fs;
use std::io::Write;

use aes_gcm::aead::{KeyInit, OsRng};
use aes_gcm::Aes256Gcm;
use tempfile::NamedTempFile;
use tracing::{debug, info};
use zeroize::Zeroize;

use crate::error::{GeneratorError, Result};
use crate::storage::PersistenceRoot;
use crate::utils::redact_bytes;
use crate::KEY_LENGTH;

/// AES-256 key material
#[derive(Clone, PartialEq, Eq)]
pub struct EncryptionKey {
    key: [u8; KEY_LENGTH],
}

impl EncryptionKey {
    /// Generate a new random key from the OS CSPRNG
    pub fn generate() -> Self {
        let key = Aes256Gcm::generate_key(&mut OsRng);
        Self { key: key.into() }
    }

    /// Create a key from raw bytes
    pub fn from_bytes(key: [u8; KEY_LENGTH]) -> Self {
        Self { key }
    }

    /// Create a key from a slice, failing unless it is exactly `KEY_LENGTH` bytes
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        let key: [u8; KEY_LENGTH] = bytes.try_into().ok()?;
        Some(Self { key })
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl fmt::Debug for EncryptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncryptionKey")
            .field("key", &redact_bytes(&self.key))
            .finish()
    }
}

impl Drop for EncryptionKey {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

/// Load the key for `root`, creating it on first use
///
/// A key file of the wrong length, or a key path that is not a regular file,
/// fails with `CorruptKeyFile` and is left untouched; it is never
/// regenerated, since that would orphan every record already encrypted under
/// it. A key file that exists but cannot be read (permissions, I/O errors)
/// fails with `PersistenceFailure`.
pub fn load_or_create_key(root: &PersistenceRoot) -> Result<EncryptionKey> {
    let path = root.key_path();

    match fs::metadata(&path) {
        Ok(meta) if !meta.is_file() => {
            return Err(GeneratorError::CorruptKeyFile {
                path,
                expected: KEY_LENGTH,
                found: 0,
            });
        }
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return create_key(root),
        Err(e) => return Err(e.into()),
    }

    match fs::read(&path) {
        Ok(mut bytes) => {
            let key = EncryptionKey::from_slice(&bytes);
            let found = bytes.len();
            bytes.zeroize();

            match key {
                Some(key) => {
                    debug!(path = %path.display(), "loaded existing key");
                    Ok(key)
                }
                None => Err(GeneratorError::CorruptKeyFile {
                    path,
                    expected: KEY_LENGTH,
                    found,
                }),
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => create_key(root),
        Err(e) => Err(e.into()),
    }
}

fn create_key(root: &PersistenceRoot) -> Result<EncryptionKey> {
    let path = root.key_path();
    fs::create_dir_all(root.dir())?;

    let key = EncryptionKey::generate();

    // NamedTempFile is created with mode 0600 on Unix
    let mut tmp = NamedTempFile::new_in(root.dir())?;
    tmp.write_all(key.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist_noclobber(&path)?;

    info!(path = %path.display(), "created new key");
    Ok(key)
}
