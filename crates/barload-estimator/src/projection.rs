//! Three-attempt projection for one athlete and lift.

use barload_core::{AthleteEntry, EstimatorConfig, IncreasePair, LiftType};

use crate::aggregates::{round_kg, LiftAggregate};

/// Where a projection's opener came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionSource {
    /// Recent best in the window.
    RecentBest,
    /// Declared entry total.
    EntryTotal,
    /// No basis; no attempts projected.
    NoBasis,
}

impl ProjectionSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RecentBest => "recent_best",
            Self::EntryTotal => "entry_total",
            Self::NoBasis => "no_basis",
        }
    }
}

/// Projected attempts plus the jumps to report alongside them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiftProjection {
    /// Three attempts, or empty when `source` is [`ProjectionSource::NoBasis`].
    pub attempts: Vec<u32>,
    pub increase: IncreasePair,
    pub source: ProjectionSource,
}

/// Project one lift.
///
/// A recent best takes precedence over a declared total; the two lifts are
/// projected independently, so an athlete may have a history-based snatch
/// and a total-based clean and jerk.
pub fn project(
    lift: LiftType,
    entry: &AthleteEntry,
    aggregate: &LiftAggregate,
    session_increase: IncreasePair,
    config: &EstimatorConfig,
) -> LiftProjection {
    if let Some(best) = aggregate.best {
        let opener = round_kg(f64::from(best) * config.opener_ratio);
        return LiftProjection {
            attempts: aggregate.increase.progression(opener).to_vec(),
            increase: aggregate.increase,
            source: ProjectionSource::RecentBest,
        };
    }

    if entry.has_entry_total() {
        let expected_total = round_kg(f64::from(entry.entry_total) * config.entry_total_ratio);
        let opener = round_kg(f64::from(expected_total) * config.total_share(lift));
        return LiftProjection {
            attempts: session_increase.progression(opener).to_vec(),
            increase: session_increase,
            source: ProjectionSource::EntryTotal,
        };
    }

    LiftProjection {
        attempts: Vec::new(),
        increase: aggregate.increase,
        source: ProjectionSource::NoBasis,
    }
}
