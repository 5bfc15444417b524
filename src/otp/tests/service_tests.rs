//! Unit tests for the OTP service

use chrono::{Duration, Utc};

use crate::commitment::{CommitmentConfig, CommitmentOptions, HashAlgorithm};
use crate::errors::OtpError;
use crate::generator::{GeneratorConfig, GeneratorOptions};
use crate::otp::{OtpService, OtpServiceConfig, DEFAULT_TTL_MINUTES};

#[test]
fn test_issue_with_defaults() {
    let service = OtpService::with_defaults();
    let issuance = service.issue();

    assert_eq!(issuance.code.len(), 6);
    assert!(issuance.code.chars().all(|c| c.is_ascii_digit()));
    assert!(!issuance.commitment.is_empty());

    let expires_at = issuance.expires_at.expect("default config has an expiry window");
    let expected = Utc::now() + Duration::minutes(DEFAULT_TTL_MINUTES);
    assert!(expires_at <= expected);
    assert!(expires_at > expected - Duration::seconds(5));
}

#[test]
fn test_issue_then_validate_round_trip() {
    let service = OtpService::with_defaults();
    let issuance = service.issue();

    let result = service.validate(&issuance.code, &issuance.commitment, Some(Utc::now()));
    assert!(result.valid);
    assert_eq!(result.expired, None);
}

#[test]
fn test_wrong_code_is_invalid_without_expired_flag() {
    let service = OtpService::with_defaults();
    let issuance = service.issue();

    // Tamper with one character
    let mut chars: Vec<char> = issuance.code.chars().collect();
    chars[0] = if chars[0] == '0' { '1' } else { '0' };
    let tampered: String = chars.into_iter().collect();

    let result = service.validate(&tampered, &issuance.commitment, Some(Utc::now()));
    assert!(!result.valid);
    assert_eq!(result.expired, None);
}

#[test]
fn test_expired_code_rejected_past_window() {
    let service = OtpService::new(OtpServiceConfig {
        ttl: Some(Duration::milliseconds(500)),
        ..OtpServiceConfig::default()
    })
    .unwrap();
    let issuance = service.issue();

    let issued_at = Utc::now() - Duration::milliseconds(501);
    let result = service.validate(&issuance.code, &issuance.commitment, Some(issued_at));
    assert!(!result.valid);
    assert_eq!(result.expired, Some(true));
}

#[test]
fn test_code_within_window_falls_through_to_comparison() {
    let service = OtpService::new(OtpServiceConfig {
        ttl: Some(Duration::milliseconds(10_000)),
        ..OtpServiceConfig::default()
    })
    .unwrap();
    let issuance = service.issue();

    let issued_at = Utc::now() - Duration::milliseconds(9_000);
    let result = service.validate(&issuance.code, &issuance.commitment, Some(issued_at));
    assert!(result.valid);
    assert_eq!(result.expired, None);
}

#[test]
fn test_expiry_dominates_correct_code() {
    let service = OtpService::with_defaults();
    let issuance = service.issue();

    // The code is correct, but the window has long elapsed
    let issued_at = Utc::now() - Duration::minutes(DEFAULT_TTL_MINUTES) - Duration::seconds(1);
    let result = service.validate(&issuance.code, &issuance.commitment, Some(issued_at));
    assert!(!result.valid);
    assert_eq!(result.expired, Some(true));
}

#[test]
fn test_no_expiry_mode_never_reports_expired() {
    let service = OtpService::new(OtpServiceConfig {
        ttl: None,
        ..OtpServiceConfig::default()
    })
    .unwrap();
    let issuance = service.issue();
    assert_eq!(issuance.expires_at, None);

    // Arbitrarily old issuance timestamp
    let issued_at = Utc::now() - Duration::days(365);
    let result = service.validate(&issuance.code, &issuance.commitment, Some(issued_at));
    assert!(result.valid);
    assert_eq!(result.expired, None);

    let wrong = service.validate("000000", &issuance.commitment, Some(issued_at));
    assert!(!wrong.valid);
    assert_eq!(wrong.expired, None);
}

#[test]
fn test_missing_issued_at_skips_expiry_check() {
    let service = OtpService::with_defaults();
    let issuance = service.issue();

    let result = service.validate(&issuance.code, &issuance.commitment, None);
    assert!(result.valid);
    assert_eq!(result.expired, None);
}

#[test]
fn test_construction_rejects_zero_length() {
    let result = OtpService::new(OtpServiceConfig {
        generator: GeneratorConfig {
            length: 0,
            numbers_only: true,
        },
        ..OtpServiceConfig::default()
    });
    assert!(matches!(result, Err(OtpError::InvalidConfig { .. })));
}

#[test]
fn test_option_merging_through_service() {
    let mut service = OtpService::with_defaults();

    service
        .set_generator_options(GeneratorOptions {
            length: Some(8),
            numbers_only: Some(false),
        })
        .unwrap();
    service.set_commitment_options(CommitmentOptions {
        algorithm: Some(HashAlgorithm::Sha512),
        salt: Some("s1".to_string()),
    });

    let issuance = service.issue();
    assert_eq!(issuance.code.len(), 8);
    assert!(issuance
        .code
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));

    let result = service.validate(&issuance.code, &issuance.commitment, Some(Utc::now()));
    assert!(result.valid);
}

#[test]
fn test_set_ttl_switches_expiry_mode() {
    let mut service = OtpService::with_defaults();
    assert!(service.ttl().is_some());

    service.set_ttl(None);
    assert_eq!(service.ttl(), None);
    assert_eq!(service.issue().expires_at, None);

    service.set_ttl(Some(Duration::minutes(5)));
    assert!(service.issue().expires_at.is_some());
}

#[test]
fn test_commitment_config_changes_invalidate_old_commitments() {
    let mut service = OtpService::with_defaults();
    let issuance = service.issue();

    service.set_commitment_options(CommitmentOptions {
        algorithm: None,
        salt: Some("rotated".to_string()),
    });

    let result = service.validate(&issuance.code, &issuance.commitment, Some(Utc::now()));
    assert!(!result.valid);
}

#[test]
fn test_validation_serializes_without_null_expired() {
    let service = OtpService::with_defaults();
    let issuance = service.issue();

    let result = service.validate(&issuance.code, &issuance.commitment, Some(Utc::now()));
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json.get("valid"), Some(&serde_json::Value::Bool(true)));
    assert!(json.get("expired").is_none());

    let expired = service.validate(
        &issuance.code,
        &issuance.commitment,
        Some(Utc::now() - Duration::minutes(DEFAULT_TTL_MINUTES + 1)),
    );
    let json = serde_json::to_value(&expired).unwrap();
    assert_eq!(json.get("expired"), Some(&serde_json::Value::Bool(true)));
}

#[test]
fn test_issuance_serialization_round_trip() {
    let service = OtpService::with_defaults();
    let issuance = service.issue();

    let json = serde_json::to_string(&issuance).unwrap();
    let deserialized: crate::otp::Issuance = serde_json::from_str(&json).unwrap();
    assert_eq!(issuance, deserialized);
}

#[test]
fn test_commitment_config_from_parsed_algorithm() {
    let algorithm: HashAlgorithm = "sha512".parse().unwrap();
    let service = OtpService::new(OtpServiceConfig {
        commitment: CommitmentConfig {
            algorithm,
            salt: "s1".to_string(),
        },
        ..OtpServiceConfig::default()
    })
    .unwrap();

    let issuance = service.issue();
    let result = service.validate(&issuance.code, &issuance.commitment, Some(Utc::now()));
    assert!(result.valid);
}
