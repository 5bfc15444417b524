//! HMAC commitment computation and constant-time verification

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use constant_time_eq::constant_time_eq;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha512};

use super::config::{CommitmentConfig, CommitmentOptions, HashAlgorithm};

/// Service producing and verifying keyed-hash commitments of codes.
///
/// A commitment is `HMAC(algorithm, key = salt, message = code)` encoded as
/// standard base64. It is deterministic in `(code, algorithm, salt)` and
/// one-way under standard assumptions on the underlying hash, so it is safe
/// to persist where the plaintext code is not.
#[derive(Debug, Clone)]
pub struct CommitmentService {
    config: CommitmentConfig,
}

impl CommitmentService {
    pub fn new(config: CommitmentConfig) -> Self {
        Self { config }
    }

    /// Create a service with the default configuration (sha256, empty salt)
    pub fn with_defaults() -> Self {
        Self {
            config: CommitmentConfig::default(),
        }
    }

    /// The current configuration
    pub fn config(&self) -> &CommitmentConfig {
        &self.config
    }

    /// Merge the provided options over the current configuration.
    ///
    /// Absent fields keep their previous values.
    pub fn set_options(&mut self, options: CommitmentOptions) {
        self.config = self.config.merged(&options);
    }

    /// Compute the base64-encoded HMAC commitment of a code
    pub fn commit(&self, code: &str) -> String {
        BASE64.encode(self.digest(code))
    }

    /// Verify a code against a stored commitment.
    ///
    /// Recomputes the commitment under the current configuration and compares
    /// it with `constant_time_eq`, so verification time does not depend on
    /// where the two digests first differ.
    pub fn verify(&self, code: &str, commitment: &str) -> bool {
        let candidate = self.commit(code);
        let candidate_bytes = candidate.as_bytes();
        let commitment_bytes = commitment.as_bytes();

        if candidate_bytes.len() != commitment_bytes.len() {
            // A length mismatch can only mean not-equal. Still run the
            // comparison over an equal-length input so this path does the
            // same work as the equal-length path.
            let _ = constant_time_eq(candidate_bytes, candidate_bytes);
            return false;
        }

        constant_time_eq(candidate_bytes, commitment_bytes)
    }

    fn digest(&self, code: &str) -> Vec<u8> {
        let key = self.config.salt.as_bytes();
        match self.config.algorithm {
            HashAlgorithm::Sha256 => {
                let mut mac =
                    Hmac::<Sha256>::new_from_slice(key).expect("HMAC accepts keys of any length");
                mac.update(code.as_bytes());
                mac.finalize().into_bytes().to_vec()
            }
            HashAlgorithm::Sha512 => {
                let mut mac =
                    Hmac::<Sha512>::new_from_slice(key).expect("HMAC accepts keys of any length");
                mac.update(code.as_bytes());
                mac.finalize().into_bytes().to_vec()
            }
        }
    }
}

impl Default for CommitmentService {
    fn default() -> Self {
        Self::with_defaults()
    }
}
