//! Configuration for the commitment service

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::OtpError;

/// Hash algorithm used for the keyed commitment digest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Sha256,
    Sha512,
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sha256 => write!(f, "sha256"),
            Self::Sha512 => write!(f, "sha512"),
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = OtpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sha256" => Ok(Self::Sha256),
            "sha512" => Ok(Self::Sha512),
            other => Err(OtpError::UnsupportedAlgorithm {
                name: other.to_string(),
            }),
        }
    }
}

/// Configuration for the commitment service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitmentConfig {
    /// Hash algorithm for the HMAC digest
    pub algorithm: HashAlgorithm,
    /// Static HMAC key; an empty salt is permitted and is the default
    pub salt: String,
}

/// Partial commitment configuration for merge-style updates.
///
/// Fields left as `None` keep their current value when applied via
/// [`crate::commitment::CommitmentService::set_options`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitmentOptions {
    pub algorithm: Option<HashAlgorithm>,
    pub salt: Option<String>,
}

impl CommitmentConfig {
    /// Overlay the provided fields onto this configuration
    pub(crate) fn merged(&self, options: &CommitmentOptions) -> Self {
        Self {
            algorithm: options.algorithm.unwrap_or(self.algorithm),
            salt: options.salt.clone().unwrap_or_else(|| self.salt.clone()),
        }
    }
}
