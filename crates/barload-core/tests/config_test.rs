use barload_core::config::EstimatorConfig;
use barload_core::errors::ConfigError;
use barload_core::{IncreasePair, LiftType};

#[test]
fn defaults_match_published_constants() {
    let config = EstimatorConfig::default();
    assert_eq!(config.window_years, 2);
    assert_eq!(config.opener_ratio, 0.93);
    assert_eq!(config.entry_total_ratio, 0.93);
    assert_eq!(config.snatch_share, 0.43);
    assert_eq!(config.clean_jerk_share, 0.57);
    assert_eq!(config.athlete_default_increase, IncreasePair::new(3, 3));
    assert_eq!(config.session_default_snatch_increase, IncreasePair::new(3, 3));
    assert_eq!(
        config.session_default_clean_jerk_increase,
        IncreasePair::new(4, 4)
    );
    assert!(config.validate().is_ok());
}

#[test]
fn empty_toml_yields_defaults() {
    let config = EstimatorConfig::from_toml("").unwrap();
    assert_eq!(config, EstimatorConfig::default());
}

#[test]
fn partial_toml_overrides_only_named_fields() {
    let config = EstimatorConfig::from_toml(
        r#"
        window_years = 3
        session_default_clean_jerk_increase = [5, 6]
        "#,
    )
    .unwrap();
    assert_eq!(config.window_years, 3);
    assert_eq!(
        config.session_default_increase(LiftType::CleanJerk),
        IncreasePair::new(5, 6)
    );
    assert_eq!(config.opener_ratio, 0.93);
    assert_eq!(config.total_share(LiftType::Snatch), 0.43);
}

#[test]
fn unknown_keys_are_ignored() {
    let config = EstimatorConfig::from_toml("some_future_knob = true").unwrap();
    assert_eq!(config, EstimatorConfig::default());
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = EstimatorConfig::from_toml("window_years = = 2").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn zero_window_is_rejected() {
    let err = EstimatorConfig::from_toml("window_years = 0").unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "window_years"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn out_of_range_ratios_are_rejected() {
    let config = EstimatorConfig {
        opener_ratio: 1.5,
        ..EstimatorConfig::default()
    };
    assert!(config.validate().is_err());

    let config = EstimatorConfig {
        snatch_share: -0.1,
        ..EstimatorConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("snatch_share"));
}
