//! Weekday labels and the native week numbering.
//!
//! The native week runs Sunday to Saturday and numbers its days
//! Sunday = 1 through Saturday = 7. Callers name days with the three-letter
//! labels `Sun`, `Mon`, `Tue`, `Wed`, `Thu`, `Fri` and `Sat`; nothing else
//! parses.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::InvalidDayError;

/// Accepted labels, in the order they are listed in error messages.
pub const VALID_DAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// One of the seven days of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DayLabel {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayLabel {
    /// All days in native order (Sunday first).
    pub const NATIVE_WEEK: [DayLabel; 7] = [
        DayLabel::Sunday,
        DayLabel::Monday,
        DayLabel::Tuesday,
        DayLabel::Wednesday,
        DayLabel::Thursday,
        DayLabel::Friday,
        DayLabel::Saturday,
    ];

    /// Default last day of a week.
    pub const DEFAULT_WEEK_END: DayLabel = DayLabel::Saturday;

    /// Default first day of a week.
    pub const DEFAULT_WEEK_START: DayLabel = DayLabel::Sunday;

    /// Three-letter label (`"Sun"`, `"Mon"`, ...).
    pub const fn label(self) -> &'static str {
        match self {
            DayLabel::Sunday => "Sun",
            DayLabel::Monday => "Mon",
            DayLabel::Tuesday => "Tue",
            DayLabel::Wednesday => "Wed",
            DayLabel::Thursday => "Thu",
            DayLabel::Friday => "Fri",
            DayLabel::Saturday => "Sat",
        }
    }

    /// Native day number, Sunday = 1 through Saturday = 7.
    pub const fn native_number(self) -> i8 {
        match self {
            DayLabel::Sunday => 1,
            DayLabel::Monday => 2,
            DayLabel::Tuesday => 3,
            DayLabel::Wednesday => 4,
            DayLabel::Thursday => 5,
            DayLabel::Friday => 6,
            DayLabel::Saturday => 7,
        }
    }

    /// Inverse of [`DayLabel::native_number`].
    pub fn from_native_number(number: i8) -> Option<Self> {
        usize::try_from(number)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| Self::NATIVE_WEEK.get(idx).copied())
    }

    /// The day before this one, wrapping Sunday back to Saturday.
    ///
    /// A week that starts on `self` ends on `self.previous()`.
    pub const fn previous(self) -> Self {
        match self {
            DayLabel::Sunday => DayLabel::Saturday,
            DayLabel::Monday => DayLabel::Sunday,
            DayLabel::Tuesday => DayLabel::Monday,
            DayLabel::Wednesday => DayLabel::Tuesday,
            DayLabel::Thursday => DayLabel::Wednesday,
            DayLabel::Friday => DayLabel::Thursday,
            DayLabel::Saturday => DayLabel::Friday,
        }
    }

    /// The day after this one, wrapping Saturday to Sunday.
    pub const fn next(self) -> Self {
        match self {
            DayLabel::Sunday => DayLabel::Monday,
            DayLabel::Monday => DayLabel::Tuesday,
            DayLabel::Tuesday => DayLabel::Wednesday,
            DayLabel::Wednesday => DayLabel::Thursday,
            DayLabel::Thursday => DayLabel::Friday,
            DayLabel::Friday => DayLabel::Saturday,
            DayLabel::Saturday => DayLabel::Sunday,
        }
    }

    /// Parse a label, rejecting anything but the seven canonical spellings.
    pub fn parse(label: &str) -> Result<Self, InvalidDayError> {
        Self::NATIVE_WEEK
            .iter()
            .copied()
            .find(|day| day.label() == label)
            .ok_or_else(|| InvalidDayError::new(label))
    }
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DayLabel {
    type Err = InvalidDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DayLabel {
    type Error = InvalidDayError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DayLabel> for String {
    fn from(day: DayLabel) -> Self {
        day.label().to_string()
    }
}

impl From<DayLabel> for Weekday {
    fn from(day: DayLabel) -> Self {
        match day {
            DayLabel::Sunday => Weekday::Sun,
            DayLabel::Monday => Weekday::Mon,
            DayLabel::Tuesday => Weekday::Tue,
            DayLabel::Wednesday => Weekday::Wed,
            DayLabel::Thursday => Weekday::Thu,
            DayLabel::Friday => Weekday::Fri,
            DayLabel::Saturday => Weekday::Sat,
        }
    }
}

impl From<Weekday> for DayLabel {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Sun => DayLabel::Sunday,
            Weekday::Mon => DayLabel::Monday,
            Weekday::Tue => DayLabel::Tuesday,
            Weekday::Wed => DayLabel::Wednesday,
            Weekday::Thu => DayLabel::Thursday,
            Weekday::Fri => DayLabel::Friday,
            Weekday::Sat => DayLabel::Saturday,
        }
    }
}
