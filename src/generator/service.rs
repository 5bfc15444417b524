//! Random code generation using the OS CSPRNG

use rand::{rngs::OsRng, RngCore};

use crate::errors::{OtpError, OtpResult};

use super::config::{GeneratorConfig, GeneratorOptions};

/// The 10 digits
const NUMERIC_ALPHABET: &[u8] = b"0123456789";

/// The 26 uppercase letters followed by the 10 digits
const ALPHANUMERIC_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generator of random one-time codes.
///
/// Each character is selected by drawing one cryptographically secure random
/// byte and reducing it modulo the alphabet size. For alphabet sizes that do
/// not evenly divide 256 this slightly favors lower-valued symbols; the bias
/// is negligible for short-lived one-time codes (these are not key material).
#[derive(Debug, Clone)]
pub struct CodeGenerator {
    config: GeneratorConfig,
}

impl CodeGenerator {
    /// Create a generator with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`OtpError::InvalidConfig`] when `length` is zero.
    pub fn new(config: GeneratorConfig) -> OtpResult<Self> {
        Self::validate(&config)?;
        Ok(Self { config })
    }

    /// Create a generator with the default configuration (6-digit numeric)
    pub fn with_defaults() -> Self {
        Self {
            config: GeneratorConfig::default(),
        }
    }

    /// The current configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Merge the provided options over the current configuration.
    ///
    /// Absent fields keep their previous values.
    ///
    /// # Errors
    ///
    /// Returns [`OtpError::InvalidConfig`] when the merged `length` is zero;
    /// the previous configuration stays in effect.
    pub fn set_options(&mut self, options: GeneratorOptions) -> OtpResult<()> {
        let merged = self.config.merged(&options);
        Self::validate(&merged)?;
        self.config = merged;
        Ok(())
    }

    /// Generate one random code of the configured length and alphabet
    pub fn generate(&self) -> String {
        let alphabet = if self.config.numbers_only {
            NUMERIC_ALPHABET
        } else {
            ALPHANUMERIC_ALPHABET
        };

        let mut bytes = vec![0u8; self.config.length];
        OsRng.fill_bytes(&mut bytes);

        bytes
            .iter()
            .map(|b| alphabet[*b as usize % alphabet.len()] as char)
            .collect()
    }

    fn validate(config: &GeneratorConfig) -> OtpResult<()> {
        if config.length == 0 {
            return Err(OtpError::InvalidConfig {
                message: "code length must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::with_defaults()
    }
}
