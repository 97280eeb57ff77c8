use thiserror::Error;

use crate::day::VALID_DAY_LABELS;

/// A weekday label outside the seven canonical abbreviations.
///
/// This is a configuration error raised before any date logic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "the day you entered '{day}' is not valid; valid days are [{}]",
    VALID_DAY_LABELS.join(",")
)]
pub struct InvalidDayError {
    /// The rejected label, as supplied.
    pub day: String,
}

impl InvalidDayError {
    pub fn new(day: impl Into<String>) -> Self {
        Self { day: day.into() }
    }
}
