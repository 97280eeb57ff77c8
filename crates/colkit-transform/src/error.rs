//! Error types for expression builders.

use colkit_model::InvalidDayError;
use thiserror::Error;

/// Errors raised while building an expression.
///
/// These are configuration errors: they surface before any data is touched.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Weekday label outside `Sun`..`Sat`.
    #[error(transparent)]
    InvalidDay(#[from] InvalidDayError),

    /// Regular expression failed to compile.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Result type alias for expression builders.
pub type Result<T> = std::result::Result<T, TransformError>;
