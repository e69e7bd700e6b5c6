use crate::lift::LiftType;

/// Structural defects in a produced estimate.
///
/// None of these are reachable through the estimation rules; seeing one means
/// an engine bug.
#[derive(Debug, thiserror::Error)]
pub enum EstimateError {
    #[error("{athlete}: {lift} has {len} projected attempts, expected 0 or 3")]
    InvalidAttemptCount {
        athlete: String,
        lift: LiftType,
        len: usize,
    },

    #[error("{athlete}: {lift} make rate {rate} is outside [0, 1]")]
    MakeRateOutOfRange {
        athlete: String,
        lift: LiftType,
        rate: f64,
    },
}
