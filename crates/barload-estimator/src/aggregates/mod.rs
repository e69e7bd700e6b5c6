//! Per-athlete aggregates over recent history.

pub mod best;
pub mod increase;
pub mod make_rate;

use barload_core::{HistoricalResult, IncreasePair, LiftType};

/// Aggregates for one lift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiftAggregate {
    /// Heaviest made lift in the window, if any.
    pub best: Option<u32>,
    /// Rounded average jumps, per-athlete defaults filling empty transitions.
    pub increase: IncreasePair,
    /// Fraction of openers taken that were made.
    pub make_rate: f64,
}

impl LiftAggregate {
    /// Compute all aggregates for a lift over an athlete's recent rows.
    pub fn compute(
        rows: &[&HistoricalResult],
        lift: LiftType,
        default_increase: IncreasePair,
    ) -> Self {
        Self {
            best: best::calculate(rows, lift),
            increase: increase::calculate(rows, lift, default_increase),
            make_rate: make_rate::calculate(rows, lift),
        }
    }
}

/// First-pass aggregates for one athlete.
#[derive(Debug, Clone, PartialEq)]
pub struct AthleteAggregate {
    pub athlete_name: String,
    /// Number of history rows inside the window.
    pub recent_results: usize,
    pub snatch: LiftAggregate,
    pub clean_jerk: LiftAggregate,
}

impl AthleteAggregate {
    pub fn compute(
        athlete_name: &str,
        rows: &[&HistoricalResult],
        default_increase: IncreasePair,
    ) -> Self {
        Self {
            athlete_name: athlete_name.to_string(),
            recent_results: rows.len(),
            snatch: LiftAggregate::compute(rows, LiftType::Snatch, default_increase),
            clean_jerk: LiftAggregate::compute(rows, LiftType::CleanJerk, default_increase),
        }
    }

    pub fn lift(&self, lift: LiftType) -> &LiftAggregate {
        match lift {
            LiftType::Snatch => &self.snatch,
            LiftType::CleanJerk => &self.clean_jerk,
        }
    }
}

/// Round a non-negative kilogram figure to the nearest whole kilogram.
pub fn round_kg(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

/// Rounded mean of kilogram samples, `None` when there are none.
pub fn mean_kg(samples: &[u32]) -> Option<u32> {
    if samples.is_empty() {
        return None;
    }
    let sum: u64 = samples.iter().map(|&s| u64::from(s)).sum();
    Some(round_kg(sum as f64 / samples.len() as f64))
}
