use barload_core::{HistoricalResult, LiftType};

/// Heaviest positive session best across rows. `None` when no row has one.
pub fn calculate(rows: &[&HistoricalResult], lift: LiftType) -> Option<u32> {
    rows.iter()
        .map(|row| row.best(lift))
        .filter(|&best| best > 0)
        .max()
        .map(|best| best.unsigned_abs())
}
