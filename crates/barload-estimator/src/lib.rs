//! # barload-estimator
//!
//! Projects each athlete's three snatch and three clean-and-jerk attempts.
//!
//! ## Projection sources
//!
//! | Source | Opener | Jumps |
//! |--------|--------|-------|
//! | Recent best (2-year window) | round(best × 0.93) | athlete's own average jumps |
//! | Declared entry total | round(round(total × 0.93) × share) | session-wide fallback jumps |
//! | Neither | no projection | n/a |
//!
//! Shares are 0.43 for the snatch and 0.57 for the clean and jerk. Every
//! parameter comes from [`EstimatorConfig`], so callers can override them.

pub mod aggregates;
pub mod context;
pub mod engine;
pub mod fallback;
pub mod projection;
pub mod window;

pub use aggregates::{AthleteAggregate, LiftAggregate};
pub use context::EstimationContext;
pub use engine::EstimatorEngine;
pub use fallback::SessionFallbacks;
pub use projection::{LiftProjection, ProjectionSource};
pub use window::RecentWindow;

use barload_core::{AthleteAttemptEstimate, AthleteEntry, EstimatorConfig, HistoricalResult};

/// Estimate every athlete in `roster` with an explicit context and config.
///
/// Attempts-out counts are left at zero; the lineup sequencer fills them in.
pub fn estimate(
    roster: &[AthleteEntry],
    history: &[HistoricalResult],
    ctx: &EstimationContext,
    config: &EstimatorConfig,
) -> Vec<AthleteAttemptEstimate> {
    EstimatorEngine::with_config(config.clone()).estimate_with_context(roster, history, ctx)
}
