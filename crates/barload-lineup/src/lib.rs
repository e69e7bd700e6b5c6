//! # barload-lineup
//!
//! Second pass of a session computation: merges every athlete's projected
//! attempts into the predicted bar-loading order and counts, per athlete and
//! lift, how many loadings come before their opener ("attempts out").
//!
//! ## Self-follow
//!
//! When two consecutive slots ahead of an athlete's opener belong to the same
//! lifter, that pair counts one extra attempt out. Only pairs that lie wholly
//! before the athlete's own opener are considered.

pub mod attempts_out;
pub mod order;
pub mod sequencer;
pub mod slots;

pub use sequencer::LineupSequencer;
pub use slots::AttemptSlot;

use barload_core::{AthleteAttemptEstimate, AthleteEntry, EstimatorConfig, HistoricalResult};
use barload_estimator::EstimationContext;

/// Populate attempts-out counts on a copy of `estimates`.
pub fn sequence(estimates: &[AthleteAttemptEstimate]) -> Vec<AthleteAttemptEstimate> {
    LineupSequencer::sequence(estimates)
}

/// Estimate and sequence a whole session in one call.
///
/// Equivalent to `sequence(&barload_estimator::estimate(..))`.
pub fn run_session(
    roster: &[AthleteEntry],
    history: &[HistoricalResult],
    ctx: &EstimationContext,
    config: &EstimatorConfig,
) -> Vec<AthleteAttemptEstimate> {
    let estimates = barload_estimator::estimate(roster, history, ctx, config);
    LineupSequencer::sequence(&estimates)
}
