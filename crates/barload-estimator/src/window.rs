//! Recent-history window.
//!
//! Only results dated on or after `as_of - window_years` count toward any
//! aggregate. Dates must be `yyyy-mm-dd`; anything else is outside the window.

use std::collections::HashMap;

use barload_core::constants::HISTORY_DATE_FORMAT;
use barload_core::HistoricalResult;
use chrono::{Months, NaiveDate};

use crate::context::EstimationContext;

/// The inclusive lower bound of recent history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecentWindow {
    cutoff: NaiveDate,
}

impl RecentWindow {
    /// Window of `years` ending at the context's computation date.
    pub fn from_context(ctx: &EstimationContext, years: u32) -> Self {
        let cutoff = ctx
            .as_of
            .checked_sub_months(Months::new(years.saturating_mul(12)))
            .unwrap_or(NaiveDate::MIN);
        Self { cutoff }
    }

    /// First date inside the window.
    pub fn cutoff(&self) -> NaiveDate {
        self.cutoff
    }

    /// Whether a history date string falls inside the window.
    ///
    /// Unparseable dates are never inside.
    pub fn contains(&self, date: &str) -> bool {
        match NaiveDate::parse_from_str(date, HISTORY_DATE_FORMAT) {
            Ok(parsed) => parsed >= self.cutoff,
            Err(_) => {
                tracing::trace!(date, "history row has malformed date, excluded");
                false
            }
        }
    }

    /// Recent rows for one athlete, in input order.
    pub fn filter<'a>(
        &self,
        history: &'a [HistoricalResult],
        athlete: &str,
    ) -> Vec<&'a HistoricalResult> {
        history
            .iter()
            .filter(|row| row.athlete_name == athlete && self.contains(&row.date))
            .collect()
    }

    /// Recent rows grouped by athlete name, in input order within each group.
    pub fn group_by_athlete<'a>(
        &self,
        history: &'a [HistoricalResult],
    ) -> HashMap<&'a str, Vec<&'a HistoricalResult>> {
        let mut grouped: HashMap<&str, Vec<&HistoricalResult>> = HashMap::new();
        for row in history {
            if self.contains(&row.date) {
                grouped.entry(row.athlete_name.as_str()).or_default().push(row);
            }
        }
        grouped
    }
}
