//! Main OTP service implementation

use chrono::{DateTime, Duration, Utc};
use tracing;

use crate::commitment::{CommitmentOptions, CommitmentService};
use crate::errors::OtpResult;
use crate::generator::{CodeGenerator, GeneratorOptions};

use super::config::OtpServiceConfig;
use super::types::{Issuance, Validation};

/// OTP service composing code generation, commitment, and expiry policy.
///
/// All operations are synchronous and perform no I/O beyond the OS entropy
/// source; every outcome is represented in the typed result structures.
pub struct OtpService {
    /// Code generator
    generator: CodeGenerator,
    /// Commitment service
    commitment: CommitmentService,
    /// Expiry window for issued codes; `None` disables expiry
    ttl: Option<Duration>,
}

impl OtpService {
    /// Create a new OTP service.
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::OtpError::InvalidConfig`] when the generator
    /// configuration is invalid (zero code length).
    pub fn new(config: OtpServiceConfig) -> OtpResult<Self> {
        Ok(Self {
            generator: CodeGenerator::new(config.generator)?,
            commitment: CommitmentService::new(config.commitment),
            ttl: config.ttl,
        })
    }

    /// Create a service with the default configuration: 6-digit numeric
    /// codes, sha256 with empty salt, 10-minute expiry window.
    pub fn with_defaults() -> Self {
        Self {
            generator: CodeGenerator::with_defaults(),
            commitment: CommitmentService::with_defaults(),
            ttl: Some(Duration::minutes(super::config::DEFAULT_TTL_MINUTES)),
        }
    }

    /// The configured expiry window, if any
    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    /// Merge generator options over the current generator configuration
    pub fn set_generator_options(&mut self, options: GeneratorOptions) -> OtpResult<()> {
        self.generator.set_options(options)
    }

    /// Merge commitment options over the current commitment configuration
    pub fn set_commitment_options(&mut self, options: CommitmentOptions) {
        self.commitment.set_options(options);
    }

    /// Replace the expiry window; `None` disables expiry
    pub fn set_ttl(&mut self, ttl: Option<Duration>) {
        self.ttl = ttl;
    }

    /// Issue a new code.
    ///
    /// Generates a random code, computes its commitment, and stamps the
    /// expiry instant when an expiry window is configured. The plaintext
    /// code is returned for one-time delivery; callers persist the
    /// commitment and the expiry-relevant timestamp, never the code.
    pub fn issue(&self) -> Issuance {
        let code = self.generator.generate();
        let commitment = self.commitment.commit(&code);
        let expires_at = self.ttl.map(|ttl| Utc::now() + ttl);

        tracing::debug!(
            event = "otp_issued",
            code_length = code.len(),
            has_expiry = expires_at.is_some(),
            "Issued one-time code"
        );

        Issuance {
            code,
            commitment,
            expires_at,
        }
    }

    /// Validate a supplied code against a stored commitment.
    ///
    /// When an expiry window is configured and `issued_at` is supplied, an
    /// elapsed window rejects the code before any commitment comparison, so
    /// an expired-but-correct code reports `expired: true` rather than
    /// `valid: true`. Without an expiry window, or without `issued_at`
    /// (expiry cannot be evaluated), the result carries no `expired` field.
    pub fn validate(
        &self,
        code: &str,
        commitment: &str,
        issued_at: Option<DateTime<Utc>>,
    ) -> Validation {
        if let (Some(ttl), Some(issued_at)) = (self.ttl, issued_at) {
            let expiry_instant = issued_at + ttl;
            if Utc::now() > expiry_instant {
                tracing::debug!(
                    event = "otp_expired",
                    issued_at = %issued_at,
                    "Rejected code past its expiry window"
                );
                return Validation {
                    valid: false,
                    expired: Some(true),
                };
            }
        }

        let valid = self.commitment.verify(code, commitment);

        tracing::debug!(event = "otp_validated", valid, "Validated one-time code");

        Validation {
            valid,
            expired: None,
        }
    }
}

impl Default for OtpService {
    fn default() -> Self {
        Self::with_defaults()
    }
}
