use barload_core::{AthleteAttemptEstimate, LiftType};
use serde::Serialize;

/// One predicted bar loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttemptSlot {
    /// Position of the athlete in the estimate list; identifies the lifter.
    pub athlete_index: usize,
    pub athlete_name: String,
    pub weight: u32,
    /// 1-based attempt number.
    pub attempt_number: u8,
    pub lift: LiftType,
}

/// Emit one slot per positive projected weight, athlete by athlete, attempt
/// by attempt. Athletes without a projection for `lift` emit nothing.
pub fn flatten(estimates: &[AthleteAttemptEstimate], lift: LiftType) -> Vec<AttemptSlot> {
    estimates
        .iter()
        .enumerate()
        .flat_map(|(athlete_index, estimate)| {
            estimate
                .estimates(lift)
                .iter()
                .zip(1u8..)
                .filter(|(weight, _)| **weight > 0)
                .map(move |(&weight, attempt_number)| AttemptSlot {
                    athlete_index,
                    athlete_name: estimate.athlete_name.clone(),
                    weight,
                    attempt_number,
                    lift,
                })
        })
        .collect()
}
