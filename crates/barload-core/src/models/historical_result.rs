use serde::{Deserialize, Serialize};

use crate::lift::LiftType;

/// One competition result for an athlete.
///
/// Attempt values follow the results-sheet convention: a positive value is a
/// made lift at that weight, zero or negative is a miss or an attempt not taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalResult {
    pub athlete_name: String,
    /// Competition date, `yyyy-mm-dd`.
    pub date: String,
    #[serde(default)]
    pub snatch1: i32,
    #[serde(default)]
    pub snatch2: i32,
    #[serde(default)]
    pub snatch3: i32,
    #[serde(default)]
    pub cj1: i32,
    #[serde(default)]
    pub cj2: i32,
    #[serde(default)]
    pub cj3: i32,
    #[serde(default)]
    pub snatch_best: i32,
    #[serde(default)]
    pub cj_best: i32,
    #[serde(default)]
    pub total: i32,
}

impl HistoricalResult {
    /// The three attempt values for a lift, in order.
    pub fn attempts(&self, lift: LiftType) -> [i32; 3] {
        match lift {
            LiftType::Snatch => [self.snatch1, self.snatch2, self.snatch3],
            LiftType::CleanJerk => [self.cj1, self.cj2, self.cj3],
        }
    }

    /// Best made lift of the session for a lift.
    pub fn best(&self, lift: LiftType) -> i32 {
        match lift {
            LiftType::Snatch => self.snatch_best,
            LiftType::CleanJerk => self.cj_best,
        }
    }
}
