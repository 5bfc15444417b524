//! Configuration for the code generator

use serde::{Deserialize, Serialize};

/// Default length of a generated code
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Configuration for the code generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of characters in a generated code
    pub length: usize,
    /// Restrict the alphabet to the 10 digits; otherwise uppercase
    /// letters followed by digits (36 symbols)
    pub numbers_only: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_CODE_LENGTH,
            numbers_only: true,
        }
    }
}

/// Partial generator configuration for merge-style updates.
///
/// Fields left as `None` keep their current value when applied via
/// [`crate::generator::CodeGenerator::set_options`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorOptions {
    pub length: Option<usize>,
    pub numbers_only: Option<bool>,
}

impl GeneratorConfig {
    /// Overlay the provided fields onto this configuration
    pub(crate) fn merged(&self, options: &GeneratorOptions) -> Self {
        Self {
            length: options.length.unwrap_or(self.length),
            numbers_only: options.numbers_only.unwrap_or(self.numbers_only),
        }
    }
}
