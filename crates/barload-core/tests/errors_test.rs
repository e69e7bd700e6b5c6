use barload_core::errors::*;
use barload_core::LiftType;

#[test]
fn validation_error_carries_field() {
    let err = ConfigError::ValidationFailed {
        field: "opener_ratio".into(),
        message: "must be in (0.0, 1.0]".into(),
    };
    assert!(err.to_string().contains("opener_ratio"));
}

#[test]
fn attempt_count_error_carries_athlete_and_lift() {
    let err = EstimateError::InvalidAttemptCount {
        athlete: "Ana".into(),
        lift: LiftType::Snatch,
        len: 2,
    };
    let msg = err.to_string();
    assert!(msg.contains("Ana"));
    assert!(msg.contains("snatch"));
    assert!(msg.contains('2'));
}

#[test]
fn subsystem_errors_convert_into_barload_error() {
    let err: BarloadError = ConfigError::ParseError {
        message: "bad".into(),
    }
    .into();
    assert!(matches!(err, BarloadError::Config(_)));
    assert!(err.to_string().starts_with("configuration error"));
}
