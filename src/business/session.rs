//! Generator session
//!
//! Ties the length policy, composition engine and scorer together and,
//! when a persistence root is configured, saves passwords to the encrypted log.

use crate::config::GeneratorOptions;
use crate::crypto::{load_or_create_key, EncryptedRecord, EncryptionKey};
use crate::error::{GeneratorError, Result};
use crate::generator::{compose, normalize, score, CompositionRequest, Password, StrengthLevel};
use crate::storage::{self, PersistenceRoot};

/// A password together with how it was built and how it scores
#[derive(Debug, Clone)]
pub struct GeneratedPassword {
    pub password: Password,
    /// The request after normalization
    pub request: CompositionRequest,
    pub strength: StrengthLevel,
}

/// Main generator interface
pub struct GeneratorSession {
    /// Length bounds
    pub(crate) options: GeneratorOptions,
    /// Where keys and records live, if persistence is enabled
    pub(crate) root: Option<PersistenceRoot>,
    /// Key for `root`, loaded on first save
    pub(crate) key: Option<EncryptionKey>,
}

impl Default for GeneratorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorSession {
    /// Session with default bounds and no persistence
    pub fn new() -> Self {
        Self {
            options: GeneratorOptions::default(),
            root: None,
            key: None,
        }
    }

    /// Session with default bounds that saves under `root`
    pub fn with_root(root: PersistenceRoot) -> Self {
        Self {
            options: GeneratorOptions::default(),
            root: Some(root),
            key: None,
        }
    }

    /// Replace the length bounds
    pub fn with_options(mut self, options: GeneratorOptions) -> Result<Self> {
        options.validate()?;
        self.options = options;
        Ok(self)
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    pub fn root(&self) -> Option<&PersistenceRoot> {
        self.root.as_ref()
    }

    /// Normalize, compose and score one password
    pub fn generate(&self, counts: &CompositionRequest) -> Result<GeneratedPassword> {
        let request = normalize(counts, self.options.min_length, self.options.max_length)?;
        let password = compose(&request)?;
        let strength = score(password.as_str());

        Ok(GeneratedPassword {
            password,
            request,
            strength,
        })
    }

    /// Encrypt and append `password` to the record log
    ///
    /// The key is loaded (or created) once and reused for the rest of the session.
    pub fn save(&mut self, password: &Password) -> Result<EncryptedRecord> {
        let root = self.root.as_ref().ok_or_else(|| {
            GeneratorError::ConfigError("No persistence root configured".to_string())
        })?;

        let key = match self.key.take() {
            Some(key) => key,
            None => load_or_create_key(root)?,
        };
        let result = storage::append(root, &key, password);
        self.key = Some(key);

        result
    }

    /// Forget the cached key
    pub fn lock(&mut self) {
        self.key = None;
    }

    /// Whether a key is currently cached
    pub fn is_unlocked(&self) -> bool {
        self.key.is_some()
    }
}
