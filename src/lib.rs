//! # OtpCommit
//!
//! One-time-password issuance and keyed-hash commitment verification.
//!
//! The crate is built from three stateless components:
//! - [`generator::CodeGenerator`] produces random codes from a configurable
//!   alphabet using the OS CSPRNG.
//! - [`commitment::CommitmentService`] computes and verifies an HMAC
//!   commitment of a code, so the plaintext code never has to be stored.
//! - [`otp::OtpService`] composes both with an expiry policy into the
//!   two-operation public contract: [`otp::OtpService::issue`] and
//!   [`otp::OtpService::validate`].
//!
//! Callers persist `{commitment, expires_at}` from an [`otp::Issuance`] and
//! deliver the plaintext code out of band; the code itself is never stored.

pub mod commitment;
pub mod errors;
pub mod generator;
pub mod otp;

// Re-export commonly used types for convenience
pub use commitment::{CommitmentConfig, CommitmentOptions, CommitmentService, HashAlgorithm};
pub use errors::{OtpError, OtpResult};
pub use generator::{CodeGenerator, GeneratorConfig, GeneratorOptions};
pub use otp::{Issuance, OtpService, OtpServiceConfig, Validation};
