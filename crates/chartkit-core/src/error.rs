// File: crates/chartkit-core/src/error.rs
// Summary: Error type for the fallible edges of the crate (config loading, point validation).
// Geometry and scale functions never return errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid range: lower bound {lower} is above upper bound {upper}")]
    InvalidRange { lower: f64, upper: f64 },

    #[error("invalid style configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ChartError>;
