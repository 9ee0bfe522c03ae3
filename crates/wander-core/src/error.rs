//! Configuration error type.
//!
//! Only construction can fail.  Once a controller exists, every per-frame
//! call is infallible: bad frame deltas are clamped, missing clips are
//! skipped.

use thiserror::Error;

/// Errors raised while validating a [`WanderConfig`][crate::WanderConfig].
#[derive(Debug, Error, PartialEq)]
pub enum WanderError {
    #[error("{what} must be finite, got {value}")]
    NonFinite { what: &'static str, value: f32 },

    #[error("{what} must be greater than zero, got {value}")]
    NonPositive { what: &'static str, value: f32 },

    #[error("{what} must not be negative, got {value}")]
    Negative { what: &'static str, value: f32 },

    #[error("idle range is inverted: min {min} > max {max}")]
    InvalidIdleRange { min: f32, max: f32 },
}

/// Shorthand result type for all `wander-*` crates.
pub type WanderResult<T> = Result<T, WanderError>;
