//! Error handling for Barload.
//! One error enum per concern, `thiserror` only.

pub mod config_error;
pub mod estimate_error;

pub use config_error::ConfigError;
pub use estimate_error::EstimateError;

/// Top-level error aggregating every subsystem error.
#[derive(Debug, thiserror::Error)]
pub enum BarloadError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("estimate defect: {0}")]
    Estimate(#[from] EstimateError),
}

/// Convenience alias used across the workspace.
pub type BarloadResult<T> = Result<T, BarloadError>;
