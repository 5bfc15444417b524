//! Error types for OTP issuance and commitment verification.
//!
//! The surface is deliberately small: configuration problems are the only
//! failure mode. A wrong code and an expired code are normal, typed outcomes
//! (see [`crate::otp::Validation`]), not errors.

use thiserror::Error;

/// Errors raised by OTP configuration and construction
#[derive(Error, Debug)]
pub enum OtpError {
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Unsupported hash algorithm: {name}")]
    UnsupportedAlgorithm { name: String },
}

pub type OtpResult<T> = Result<T, OtpError>;
