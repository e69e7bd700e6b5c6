use barload_core::{HistoricalResult, LiftType};

/// Opener make rate: of the rows where a first attempt was made, the share
/// whose session best is at least that opener.
///
/// 0.0 when no row qualifies.
pub fn calculate(rows: &[&HistoricalResult], lift: LiftType) -> f64 {
    let mut taken = 0u32;
    let mut made = 0u32;

    for row in rows {
        let opener = row.attempts(lift)[0];
        if opener > 0 {
            taken += 1;
            if row.best(lift) >= opener {
                made += 1;
            }
        }
    }

    if taken == 0 {
        0.0
    } else {
        f64::from(made) / f64::from(taken)
    }
}
