//! Centralized error type for gainmath.

use thiserror::Error;

/// Error type for gainmath operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Clamp bounds given out of order.
    #[error("Invalid argument: max ({max}) is less than min ({min})")]
    InvalidArgument { min: f32, max: f32 },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
