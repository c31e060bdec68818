//! Error types for MargaEstimation.
//!
//! Only misconfiguration is an error. Runtime conditions (no usable
//! segments, stale encoder input, collapsed belief) are documented degraded
//! states surfaced through the estimator APIs, never through `Err`.

use thiserror::Error;

/// Errors raised when constructing an estimator or loading configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A parameter that must be strictly positive was zero or negative.
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    /// A `[min, max]` pair with `max <= min`.
    #[error("{name} bounds are inverted: [{min}, {max}]")]
    InvertedBounds {
        name: &'static str,
        min: f32,
        max: f32,
    },

    /// Config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(String),

    /// Config file could not be parsed as TOML.
    #[error("failed to parse config: {0}")]
    Parse(String),
}

/// Crate-level result alias.
pub type Result<T> = std::result::Result<T, ConfigError>;
