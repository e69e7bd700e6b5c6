//! Session-wide fallback jumps for athletes projected from a declared total.

use barload_core::{EstimatorConfig, IncreasePair, LiftType};

use crate::aggregates::{mean_kg, AthleteAggregate};

/// Average jumps across the session, computed once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionFallbacks {
    pub snatch: IncreasePair,
    pub clean_jerk: IncreasePair,
}

impl SessionFallbacks {
    /// For each lift, average the per-athlete jumps of every athlete with a
    /// recent best in that lift. A lift with no such athlete uses the
    /// configured session default.
    pub fn compute(aggregates: &[AthleteAggregate], config: &EstimatorConfig) -> Self {
        Self {
            snatch: session_increase(aggregates, LiftType::Snatch, config),
            clean_jerk: session_increase(aggregates, LiftType::CleanJerk, config),
        }
    }

    pub fn for_lift(&self, lift: LiftType) -> IncreasePair {
        match lift {
            LiftType::Snatch => self.snatch,
            LiftType::CleanJerk => self.clean_jerk,
        }
    }
}

fn session_increase(
    aggregates: &[AthleteAggregate],
    lift: LiftType,
    config: &EstimatorConfig,
) -> IncreasePair {
    let default = config.session_default_increase(lift);
    let (first, second): (Vec<u32>, Vec<u32>) = aggregates
        .iter()
        .map(|a| a.lift(lift))
        .filter(|l| l.best.is_some())
        .map(|l| (l.increase.first_to_second, l.increase.second_to_third))
        .unzip();

    IncreasePair::new(
        mean_kg(&first).unwrap_or(default.first_to_second),
        mean_kg(&second).unwrap_or(default.second_to_third),
    )
}
