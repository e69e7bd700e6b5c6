//! # barload-core
//!
//! Foundation crate for the Barload attempt engine.
//! Defines the roster/history/estimate records, lift types, errors, config,
//! constants, and tracing setup. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod lift;
pub mod models;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::EstimatorConfig;
pub use errors::{BarloadError, BarloadResult};
pub use lift::{IncreasePair, LiftType};
pub use models::{AthleteAttemptEstimate, AthleteEntry, HistoricalResult};
