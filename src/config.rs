//! Generator configuration.
//!
//! The advisory bit-credit constants and the stream margin are
//! deliberately configurable; they tune UI feedback and exhaustion
//! probability, not security.

use crate::pool::PoolConfig;
use crate::selection::CharsetConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for password generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Stream bytes requested per password character.
    ///
    /// The expander produces `length * stream_margin` bytes so that
    /// rejection sampling exhausts the stream only with negligible
    /// probability. Exhaustion is still surfaced as an error.
    pub stream_margin: u32,
    /// Entropy pool settings.
    #[serde(default)]
    pub pool: PoolConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            stream_margin: 4,
            pool: PoolConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stream_margin == 0 {
            return Err(ConfigError::InvalidMargin);
        }
        if self.pool.bits_per_sample == 0 || self.pool.bits_per_sample > 256 {
            return Err(ConfigError::InvalidBitCredit);
        }
        if self.pool.bits_per_generation > 256 {
            return Err(ConfigError::InvalidBitCredit);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("stream margin must be at least 1")]
    InvalidMargin,
    #[error("advisory bit credit must be in 1-256")]
    InvalidBitCredit,
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub charset: CharsetConfig,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        let config: FileConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.generator.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::HashAlgorithm;

    #[test]
    fn test_default_config_valid() {
        assert!(GeneratorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_margin_invalid() {
        let mut config = GeneratorConfig::default();
        config.stream_margin = 0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidMargin)));
    }

    #[test]
    fn test_zero_bit_credit_invalid() {
        let mut config = GeneratorConfig::default();
        config.pool.bits_per_sample = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBitCredit)
        ));
    }

    #[test]
    fn test_parse_toml_sections() {
        let toml_text = r#"
            [generator]
            stream_margin = 8

            [generator.pool]
            bits_per_sample = 4
            bits_per_generation = 32
            algorithm = "sha256"

            [charset]
            lowercase = true
            uppercase = false
            digits = true
            symbols = false
            exclude_ambiguous = true
        "#;
        let config: FileConfig = toml::from_str(toml_text).unwrap();
        assert_eq!(config.generator.stream_margin, 8);
        assert_eq!(config.generator.pool.bits_per_sample, 4);
        assert_eq!(config.generator.pool.algorithm, HashAlgorithm::Sha256);
        assert!(config.charset.exclude_ambiguous);
        assert!(!config.charset.uppercase);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.generator.stream_margin, 4);
        assert!(config.charset.lowercase);
    }
}
