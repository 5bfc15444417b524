//! Result types for OTP issuance and validation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of issuing a code.
///
/// The plaintext `code` is returned once for delivery to the end user and is
/// not recoverable from `commitment`; callers persist `{commitment,
/// expires_at}` (or the issuance timestamp) only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issuance {
    /// The plaintext one-time code, for one-time delivery
    pub code: String,
    /// Keyed-hash commitment of the code, safe to persist
    pub commitment: String,
    /// When the code expires; absent when expiry is disabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Result of validating a code.
///
/// `expired` is present (and true) only when the code was rejected solely
/// because its expiry window elapsed; a wrong code yields `valid: false`
/// with `expired` absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    /// Whether the supplied code matched the stored commitment
    pub valid: bool,
    /// Set to `true` when rejection was due to expiry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expired: Option<bool>,
}
