//! Configuration for the estimation engine.
//! TOML-based; every field falls back to the compiled defaults in [`crate::constants`].

pub mod estimator_config;

pub use estimator_config::EstimatorConfig;
