use chrono::{NaiveDate, Utc};

/// Inputs to an estimation run that come from the environment rather than the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstimationContext {
    /// The computation date; the recent-history window ends here.
    pub as_of: NaiveDate,
}

impl EstimationContext {
    pub fn new(as_of: NaiveDate) -> Self {
        Self { as_of }
    }
}

impl Default for EstimationContext {
    /// Today, in UTC.
    fn default() -> Self {
        Self {
            as_of: Utc::now().date_naive(),
        }
    }
}
