//! Generator options

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GeneratorError, Result};
use crate::{MAX_LENGTH, MIN_LENGTH};

/// Length bounds applied by a `GeneratorSession`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Requests shorter than this are topped up
    pub min_length: usize,
    /// Requests longer than this are rejected
    pub max_length: usize,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            min_length: MIN_LENGTH,
            max_length: MAX_LENGTH,
        }
    }
}

impl GeneratorOptions {
    /// Check the bounds are usable
    pub fn validate(&self) -> Result<()> {
        if self.min_length == 0 {
            return Err(GeneratorError::ConfigError(
                "min_length must be at least 1".to_string(),
            ));
        }
        if self.min_length > self.max_length {
            return Err(GeneratorError::ConfigError(format!(
                "min_length {} exceeds max_length {}",
                self.min_length, self.max_length
            )));
        }
        if self.max_length > MAX_LENGTH {
            return Err(GeneratorError::ConfigError(format!(
                "max_length {} exceeds the hard limit of {}",
                self.max_length, MAX_LENGTH
            )));
        }
        Ok(())
    }

    /// Parse and validate options from JSON; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let options: GeneratorOptions = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Read options from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            GeneratorError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }
}
