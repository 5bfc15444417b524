//! OTP orchestration module.
//!
//! Composes code generation, commitment, and an expiry policy into the
//! two-operation contract most callers use directly:
//! [`OtpService::issue`] and [`OtpService::validate`].

mod config;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use config::{OtpServiceConfig, DEFAULT_TTL_MINUTES};
pub use service::OtpService;
pub use types::{Issuance, Validation};
