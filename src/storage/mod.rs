//! Persistence root and the encrypted record log
//!
//! All files live under one directory chosen by the caller:
//! - `secret.key`: raw AES-256 key
//! - `passwords.enc`: one base64 record per line, append-only

mod records;

pub use records::append;

use std::path::{Path, PathBuf};

use crate::{KEY_FILENAME, RECORDS_FILENAME};

/// Directory owning the key file and the record log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistenceRoot {
    dir: PathBuf,
}

impl PersistenceRoot {
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
        }
    }

    /// The root directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the key file
    pub fn key_path(&self) -> PathBuf {
        self.dir.join(KEY_FILENAME)
    }

    /// Path of the encrypted record log
    pub fn records_path(&self) -> PathBuf {
        self.dir.join(RECORDS_FILENAME)
    }
}
