//! Plain records exchanged with the roster, history, and presentation layers.

pub mod athlete_entry;
pub mod attempt_estimate;
pub mod historical_result;

pub use athlete_entry::AthleteEntry;
pub use attempt_estimate::AthleteAttemptEstimate;
pub use historical_result::HistoricalResult;
