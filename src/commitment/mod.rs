//! Keyed-hash commitment component.
//!
//! Computes an HMAC commitment of a code so the plaintext code never has to
//! be persisted, and verifies candidate codes against a stored commitment
//! using constant-time comparison.

mod config;
mod service;

pub use config::{CommitmentConfig, CommitmentOptions, HashAlgorithm};
pub use service::CommitmentService;
