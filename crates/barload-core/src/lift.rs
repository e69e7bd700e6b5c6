use serde::{Deserialize, Serialize};
use std::fmt;

/// The two competition lifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiftType {
    Snatch,
    CleanJerk,
}

impl LiftType {
    /// Both lifts, in competition order.
    pub const ALL: [LiftType; 2] = [LiftType::Snatch, LiftType::CleanJerk];

    /// Stable string name, used in log fields and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            LiftType::Snatch => "snatch",
            LiftType::CleanJerk => "clean_jerk",
        }
    }
}

impl fmt::Display for LiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Average jumps between attempts, in whole kilograms.
///
/// Serialized as a `[first_to_second, second_to_third]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct IncreasePair {
    /// Jump from the first to the second attempt.
    pub first_to_second: u32,
    /// Jump from the second to the third attempt.
    pub second_to_third: u32,
}

impl IncreasePair {
    pub const fn new(first_to_second: u32, second_to_third: u32) -> Self {
        Self {
            first_to_second,
            second_to_third,
        }
    }

    /// Same jump for both transitions.
    pub const fn uniform(kg: u32) -> Self {
        Self::new(kg, kg)
    }

    /// Expand an opener into a three-attempt progression.
    pub fn progression(self, opener: u32) -> [u32; 3] {
        let second = opener + self.first_to_second;
        let third = second + self.second_to_third;
        [opener, second, third]
    }
}

impl From<(u32, u32)> for IncreasePair {
    fn from((first_to_second, second_to_third): (u32, u32)) -> Self {
        Self::new(first_to_second, second_to_third)
    }
}

impl From<IncreasePair> for (u32, u32) {
    fn from(pair: IncreasePair) -> Self {
        (pair.first_to_second, pair.second_to_third)
    }
}

impl fmt::Display for IncreasePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{}/+{}", self.first_to_second, self.second_to_third)
    }
}
