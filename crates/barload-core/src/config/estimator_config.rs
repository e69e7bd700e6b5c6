use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::ConfigError;
use crate::lift::{IncreasePair, LiftType};

/// Algorithm parameters for attempt estimation.
///
/// These are fixed for production use; the struct exists so that they are
/// passed explicitly and tests or embedders can override them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Only history within this many years of the computation date is used.
    pub window_years: u32,
    /// Opener = best × this ratio.
    pub opener_ratio: f64,
    /// Expected total = entry total × this ratio.
    pub entry_total_ratio: f64,
    /// Snatch opener share of the expected total.
    pub snatch_share: f64,
    /// Clean-and-jerk opener share of the expected total.
    pub clean_jerk_share: f64,
    /// Per-athlete jump used when a transition has no samples.
    pub athlete_default_increase: IncreasePair,
    /// Session snatch jump when no athlete has a snatch best.
    pub session_default_snatch_increase: IncreasePair,
    /// Session clean-and-jerk jump when no athlete has a C&J best.
    pub session_default_clean_jerk_increase: IncreasePair,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            window_years: constants::DEFAULT_WINDOW_YEARS,
            opener_ratio: constants::DEFAULT_OPENER_RATIO,
            entry_total_ratio: constants::DEFAULT_ENTRY_TOTAL_RATIO,
            snatch_share: constants::DEFAULT_SNATCH_SHARE,
            clean_jerk_share: constants::DEFAULT_CLEAN_JERK_SHARE,
            athlete_default_increase: IncreasePair::uniform(
                constants::DEFAULT_ATHLETE_INCREASE_KG,
            ),
            session_default_snatch_increase: IncreasePair::uniform(
                constants::DEFAULT_SESSION_SNATCH_INCREASE_KG,
            ),
            session_default_clean_jerk_increase: IncreasePair::uniform(
                constants::DEFAULT_SESSION_CLEAN_JERK_INCREASE_KG,
            ),
        }
    }
}

impl EstimatorConfig {
    /// Load configuration from a TOML string. Unknown keys are ignored.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_years == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "window_years".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        for (field, ratio) in [
            ("opener_ratio", self.opener_ratio),
            ("entry_total_ratio", self.entry_total_ratio),
        ] {
            if !(ratio > 0.0 && ratio <= 1.0) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be in (0.0, 1.0]".to_string(),
                });
            }
        }
        for (field, share) in [
            ("snatch_share", self.snatch_share),
            ("clean_jerk_share", self.clean_jerk_share),
        ] {
            if !(0.0..=1.0).contains(&share) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Share of the expected total attributed to a lift's opener.
    pub fn total_share(&self, lift: LiftType) -> f64 {
        match lift {
            LiftType::Snatch => self.snatch_share,
            LiftType::CleanJerk => self.clean_jerk_share,
        }
    }

    /// Session-wide default jump for a lift.
    pub fn session_default_increase(&self, lift: LiftType) -> IncreasePair {
        match lift {
            LiftType::Snatch => self.session_default_snatch_increase,
            LiftType::CleanJerk => self.session_default_clean_jerk_increase,
        }
    }
}
