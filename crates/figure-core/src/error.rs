// File: crates/figure-core/src/error.rs
// Summary: Typed error kinds for data generation and derived statistics.

use thiserror::Error;

/// Errors raised by dataset construction and statistics.
/// All are raised at the point of detection and propagate to the caller;
/// the computations are pure, so retrying without new input is pointless.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("insufficient data: {0}")]
    InsufficientData(String),
}

impl DataError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn insufficient_data(msg: impl Into<String>) -> Self {
        Self::InsufficientData(msg.into())
    }
}
