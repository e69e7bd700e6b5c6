use serde::{Deserialize, Serialize};

use crate::constants::ATTEMPTS_PER_LIFT;
use crate::errors::EstimateError;
use crate::lift::{IncreasePair, LiftType};

/// Projected attempts and lineup position for one athlete in a session.
///
/// Produced by the estimator with `*_attempts_out` at zero, then copied by the
/// lineup sequencer with the counts filled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteAttemptEstimate {
    pub athlete_name: String,
    /// Three projected snatch attempts, or empty when there is no basis.
    pub snatch_estimates: Vec<u32>,
    /// Three projected clean-and-jerk attempts, or empty when there is no basis.
    pub cj_estimates: Vec<u32>,
    pub average_snatch_increase: IncreasePair,
    pub average_cj_increase: IncreasePair,
    pub best_snatch: Option<u32>,
    pub best_cj: Option<u32>,
    pub snatch_make_rate: f64,
    pub cj_make_rate: f64,
    #[serde(default)]
    pub snatch_attempts_out: u32,
    #[serde(default)]
    pub cj_attempts_out: u32,
}

impl AthleteAttemptEstimate {
    /// Projected attempts for a lift.
    pub fn estimates(&self, lift: LiftType) -> &[u32] {
        match lift {
            LiftType::Snatch => &self.snatch_estimates,
            LiftType::CleanJerk => &self.cj_estimates,
        }
    }

    /// Projected opener for a lift, if any.
    pub fn opener(&self, lift: LiftType) -> Option<u32> {
        self.estimates(lift).first().copied()
    }

    pub fn average_increase(&self, lift: LiftType) -> IncreasePair {
        match lift {
            LiftType::Snatch => self.average_snatch_increase,
            LiftType::CleanJerk => self.average_cj_increase,
        }
    }

    pub fn best(&self, lift: LiftType) -> Option<u32> {
        match lift {
            LiftType::Snatch => self.best_snatch,
            LiftType::CleanJerk => self.best_cj,
        }
    }

    pub fn make_rate(&self, lift: LiftType) -> f64 {
        match lift {
            LiftType::Snatch => self.snatch_make_rate,
            LiftType::CleanJerk => self.cj_make_rate,
        }
    }

    pub fn attempts_out(&self, lift: LiftType) -> u32 {
        match lift {
            LiftType::Snatch => self.snatch_attempts_out,
            LiftType::CleanJerk => self.cj_attempts_out,
        }
    }

    /// Copy of this estimate with both attempts-out counts set.
    pub fn with_attempts_out(&self, snatch: u32, clean_jerk: u32) -> Self {
        Self {
            snatch_attempts_out: snatch,
            cj_attempts_out: clean_jerk,
            ..self.clone()
        }
    }

    /// Check the structural invariants every estimate must satisfy.
    ///
    /// A failure here is a defect in the engine, never a data condition.
    pub fn check_invariants(&self) -> Result<(), EstimateError> {
        for lift in LiftType::ALL {
            let len = self.estimates(lift).len();
            if len != 0 && len != ATTEMPTS_PER_LIFT {
                return Err(EstimateError::InvalidAttemptCount {
                    athlete: self.athlete_name.clone(),
                    lift,
                    len,
                });
            }
            let rate = self.make_rate(lift);
            if !(0.0..=1.0).contains(&rate) {
                return Err(EstimateError::MakeRateOutOfRange {
                    athlete: self.athlete_name.clone(),
                    lift,
                    rate,
                });
            }
        }
        Ok(())
    }
}
