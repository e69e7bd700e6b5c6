use barload_core::{HistoricalResult, IncreasePair, LiftType};

use super::mean_kg;

/// Average jump between consecutive made attempts.
///
/// A 1→2 sample needs attempts 1 and 2 made; a 2→3 sample needs attempts 2
/// and 3 made. Each transition without samples takes its value from `default`.
pub fn calculate(
    rows: &[&HistoricalResult],
    lift: LiftType,
    default: IncreasePair,
) -> IncreasePair {
    let mut first_to_second = Vec::new();
    let mut second_to_third = Vec::new();

    for row in rows {
        let [a1, a2, a3] = row.attempts(lift);
        if a1 > 0 && a2 > 0 {
            first_to_second.push(a2.abs_diff(a1));
        }
        if a2 > 0 && a3 > 0 {
            second_to_third.push(a3.abs_diff(a2));
        }
    }

    IncreasePair::new(
        mean_kg(&first_to_second).unwrap_or(default.first_to_second),
        mean_kg(&second_to_third).unwrap_or(default.second_to_third),
    )
}
