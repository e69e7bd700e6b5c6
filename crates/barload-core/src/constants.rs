/// Barload engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of attempts per lift in a session.
pub const ATTEMPTS_PER_LIFT: usize = 3;

/// Length of the recent-history window, in years.
pub const DEFAULT_WINDOW_YEARS: u32 = 2;

/// Opener as a fraction of the athlete's recent best.
pub const DEFAULT_OPENER_RATIO: f64 = 0.93;

/// Expected total as a fraction of the declared entry total.
pub const DEFAULT_ENTRY_TOTAL_RATIO: f64 = 0.93;

/// Share of the expected total attributed to the snatch opener.
pub const DEFAULT_SNATCH_SHARE: f64 = 0.43;

/// Share of the expected total attributed to the clean-and-jerk opener.
pub const DEFAULT_CLEAN_JERK_SHARE: f64 = 0.57;

/// Per-athlete jump (kg) used when an athlete has no sample for a transition.
/// Applies to both lifts and both transitions.
pub const DEFAULT_ATHLETE_INCREASE_KG: u32 = 3;

/// Session-wide snatch jump (kg) when no athlete in the session has a snatch best.
pub const DEFAULT_SESSION_SNATCH_INCREASE_KG: u32 = 3;

/// Session-wide clean-and-jerk jump (kg) when no athlete in the session has a C&J best.
pub const DEFAULT_SESSION_CLEAN_JERK_INCREASE_KG: u32 = 4;

/// Date format expected on historical results.
pub const HISTORY_DATE_FORMAT: &str = "%Y-%m-%d";
