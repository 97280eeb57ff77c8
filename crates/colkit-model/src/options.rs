//! Configuration options for validation and calendar transforms.

use serde::{Deserialize, Serialize};

use crate::day::DayLabel;

/// Options for schema validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    /// Compare schema fields on name and type only.
    /// Default: false.
    pub ignore_nullable: bool,
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ignore_nullable(mut self, ignore: bool) -> Self {
        self.ignore_nullable = ignore;
        self
    }
}

/// Week boundary convention.
///
/// Labels deserialize from `"Sun"` .. `"Sat"`; anything else is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeekOptions {
    /// First day of the week. Default: `Sun`.
    pub start_day: DayLabel,

    /// Last day of the week. Default: `Sat`.
    pub end_day: DayLabel,
}

impl Default for WeekOptions {
    fn default() -> Self {
        Self {
            start_day: DayLabel::DEFAULT_WEEK_START,
            end_day: DayLabel::DEFAULT_WEEK_END,
        }
    }
}

impl WeekOptions {
    /// A week starting on `start_day` and ending the day before it.
    pub fn starting_on(start_day: DayLabel) -> Self {
        Self {
            start_day,
            end_day: start_day.previous(),
        }
    }

    /// Move the week start to `day`; the end follows to the day before it.
    pub fn with_start_day(mut self, day: DayLabel) -> Self {
        self.start_day = day;
        self.end_day = day.previous();
        self
    }

    /// Override the end day alone. Call after [`Self::with_start_day`].
    pub fn with_end_day(mut self, day: DayLabel) -> Self {
        self.end_day = day;
        self
    }
}
