//! LineupSequencer: orders projected attempts and fills in attempts-out counts.

use barload_core::{sequence_span, AthleteAttemptEstimate, LiftType};

use crate::attempts_out;
use crate::order;
use crate::slots::{self, AttemptSlot};

/// Stateless lineup sequencer.
pub struct LineupSequencer;

impl LineupSequencer {
    /// Return a copy of `estimates`, in the same order, with both
    /// attempts-out counts populated. Nothing else changes.
    pub fn sequence(estimates: &[AthleteAttemptEstimate]) -> Vec<AthleteAttemptEstimate> {
        let _span = sequence_span!(estimates.len()).entered();

        let snatch = Self::lineup(estimates, LiftType::Snatch);
        let clean_jerk = Self::lineup(estimates, LiftType::CleanJerk);

        estimates
            .iter()
            .enumerate()
            .map(|(index, estimate)| {
                let snatch_out = attempts_out::count(&snatch, index);
                let clean_jerk_out = attempts_out::count(&clean_jerk, index);
                tracing::debug!(
                    athlete = %estimate.athlete_name,
                    snatch_out,
                    clean_jerk_out,
                    "attempts out"
                );
                estimate.with_attempts_out(snatch_out, clean_jerk_out)
            })
            .collect()
    }

    /// Predicted bar-loading order for one lift.
    pub fn lineup(estimates: &[AthleteAttemptEstimate], lift: LiftType) -> Vec<AttemptSlot> {
        order::ordered(slots::flatten(estimates, lift))
    }
}
