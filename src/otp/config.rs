//! Configuration for the OTP service

use chrono::Duration;

use crate::commitment::CommitmentConfig;
use crate::generator::GeneratorConfig;

/// Default expiry window for issued codes (10 minutes)
pub const DEFAULT_TTL_MINUTES: i64 = 10;

/// Configuration for the OTP service.
///
/// `ttl` is the expiry window applied to issued codes; `None` means issued
/// codes never expire. The default is a 10-minute window.
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Code generation settings
    pub generator: GeneratorConfig,
    /// Commitment digest settings
    pub commitment: CommitmentConfig,
    /// Expiry window, or `None` for codes that never expire
    pub ttl: Option<Duration>,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            commitment: CommitmentConfig::default(),
            ttl: Some(Duration::minutes(DEFAULT_TTL_MINUTES)),
        }
    }
}
