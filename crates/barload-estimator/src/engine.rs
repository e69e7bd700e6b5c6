//! EstimatorEngine, the first pass of a session computation.
//!
//! Windows history, aggregates each athlete, derives session fallbacks, then
//! projects both lifts for every athlete in roster order.

use barload_core::{
    estimate_span, AthleteAttemptEstimate, AthleteEntry, EstimatorConfig, HistoricalResult,
    LiftType,
};

use crate::aggregates::AthleteAggregate;
use crate::context::EstimationContext;
use crate::fallback::SessionFallbacks;
use crate::projection::{self, LiftProjection};
use crate::window::RecentWindow;

/// Attempt estimator. Holds only its configuration; every call is independent.
#[derive(Debug, Clone, Default)]
pub struct EstimatorEngine {
    config: EstimatorConfig,
}

impl EstimatorEngine {
    /// Create an engine with the default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom parameters.
    pub fn with_config(config: EstimatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Estimate every athlete, windowing history against today's date.
    pub fn estimate(
        &self,
        roster: &[AthleteEntry],
        history: &[HistoricalResult],
    ) -> Vec<AthleteAttemptEstimate> {
        self.estimate_with_context(roster, history, &EstimationContext::default())
    }

    /// Estimate every athlete with an explicit computation date.
    ///
    /// The result is in roster order with attempts-out counts at zero.
    pub fn estimate_with_context(
        &self,
        roster: &[AthleteEntry],
        history: &[HistoricalResult],
        ctx: &EstimationContext,
    ) -> Vec<AthleteAttemptEstimate> {
        let _span = estimate_span!(roster.len(), history.len()).entered();

        let window = RecentWindow::from_context(ctx, self.config.window_years);
        let recent = window.group_by_athlete(history);

        let aggregates: Vec<AthleteAggregate> = roster
            .iter()
            .map(|entry| {
                let rows = recent.get(entry.name.as_str()).map(Vec::as_slice).unwrap_or(&[]);
                AthleteAggregate::compute(&entry.name, rows, self.config.athlete_default_increase)
            })
            .collect();

        let fallbacks = self.session_fallbacks(&aggregates);
        tracing::debug!(
            snatch = %fallbacks.snatch,
            clean_jerk = %fallbacks.clean_jerk,
            "session fallback increases"
        );

        roster
            .iter()
            .zip(&aggregates)
            .map(|(entry, aggregate)| self.build_estimate(entry, aggregate, &fallbacks))
            .collect()
    }

    /// First-pass aggregates for a single athlete.
    pub fn aggregate_athlete(
        &self,
        athlete_name: &str,
        history: &[HistoricalResult],
        ctx: &EstimationContext,
    ) -> AthleteAggregate {
        let window = RecentWindow::from_context(ctx, self.config.window_years);
        let rows = window.filter(history, athlete_name);
        AthleteAggregate::compute(athlete_name, &rows, self.config.athlete_default_increase)
    }

    /// Session-wide fallback jumps over a set of first-pass aggregates.
    pub fn session_fallbacks(&self, aggregates: &[AthleteAggregate]) -> SessionFallbacks {
        SessionFallbacks::compute(aggregates, &self.config)
    }

    fn build_estimate(
        &self,
        entry: &AthleteEntry,
        aggregate: &AthleteAggregate,
        fallbacks: &SessionFallbacks,
    ) -> AthleteAttemptEstimate {
        let snatch = self.project_lift(LiftType::Snatch, entry, aggregate, fallbacks);
        let clean_jerk = self.project_lift(LiftType::CleanJerk, entry, aggregate, fallbacks);

        let estimate = AthleteAttemptEstimate {
            athlete_name: entry.name.clone(),
            snatch_estimates: snatch.attempts,
            cj_estimates: clean_jerk.attempts,
            average_snatch_increase: snatch.increase,
            average_cj_increase: clean_jerk.increase,
            best_snatch: aggregate.snatch.best,
            best_cj: aggregate.clean_jerk.best,
            snatch_make_rate: aggregate.snatch.make_rate,
            cj_make_rate: aggregate.clean_jerk.make_rate,
            snatch_attempts_out: 0,
            cj_attempts_out: 0,
        };
        debug_assert!(estimate.check_invariants().is_ok());
        estimate
    }

    fn project_lift(
        &self,
        lift: LiftType,
        entry: &AthleteEntry,
        aggregate: &AthleteAggregate,
        fallbacks: &SessionFallbacks,
    ) -> LiftProjection {
        let projection = projection::project(
            lift,
            entry,
            aggregate.lift(lift),
            fallbacks.for_lift(lift),
            &self.config,
        );
        tracing::debug!(
            athlete = %entry.name,
            lift = %lift,
            source = projection.source.as_str(),
            recent_results = aggregate.recent_results,
            attempts = ?projection.attempts,
            "projected attempts"
        );
        projection
    }
}
