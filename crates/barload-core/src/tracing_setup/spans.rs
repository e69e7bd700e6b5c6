//! Span definitions per engine pass.

/// Create an estimation span.
#[macro_export]
macro_rules! estimate_span {
    ($athletes:expr, $history_rows:expr) => {
        tracing::info_span!(
            "barload.estimate",
            athletes = $athletes,
            history_rows = $history_rows
        )
    };
}

/// Create a lineup sequencing span.
#[macro_export]
macro_rules! sequence_span {
    ($athletes:expr) => {
        tracing::info_span!("barload.sequence", athletes = $athletes)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const ESTIMATE: &str = "barload.estimate";
    pub const SEQUENCE: &str = "barload.sequence";
}
