//! Week start and week end dates.
//!
//! The native week runs Sunday to Saturday with days numbered Sunday = 1
//! through Saturday = 7. Callers may pick any day as the boundary:
//!
//! - **week end**: a date already on the end day is its own week end;
//!   otherwise the next occurrence of the end day.
//! - **week start**: the week that starts on `S` ends on the day before `S`,
//!   so the start is that week end minus six days. The seven days
//!   `[start, start + 6]` always contain the input date.
//!
//! Timestamps are truncated to their date first, so results are always
//! dates. Null dates stay null through every step. Both computations are written
//! against [`DateExpr`], implemented for Polars expressions ([`expr`]) and for
//! single optional dates ([`scalar`]).

pub mod expr;
pub mod scalar;

use colkit_model::{DayLabel, WeekOptions};
use tracing::debug;

use crate::error::Result;

/// Date-valued expression operations needed for week arithmetic.
pub trait DateExpr: Clone {
    /// Boolean result of a comparison.
    type Mask;

    /// The calendar date of `self`, dropping any time of day.
    fn to_date(&self) -> Self;

    /// Null-safe test of the native (Sunday = 1) day of week against
    /// `native_number`. A null date compares unequal.
    fn day_of_week_eq_missing(&self, native_number: i8) -> Self::Mask;

    /// The first date strictly after `self` that falls on `day`.
    fn next_day(&self, day: DayLabel) -> Self;

    /// Shift by a signed number of days.
    fn add_days(&self, days: i32) -> Self;

    /// `when_true` where `mask` holds, `otherwise` elsewhere.
    fn select(mask: Self::Mask, when_true: Self, otherwise: Self) -> Self;
}

/// Last day of the week containing `date`, for a week ending on `week_end_day`.
pub fn week_end_date_on<E: DateExpr>(date: E, week_end_day: DayLabel) -> E {
    let date = date.to_date();
    let on_boundary = date.day_of_week_eq_missing(week_end_day.native_number());
    let next = date.next_day(week_end_day);
    E::select(on_boundary, date, next)
}

/// First day of the week containing `date`, for a week starting on `week_start_day`.
pub fn week_start_date_on<E: DateExpr>(date: E, week_start_day: DayLabel) -> E {
    week_end_date_on(date, week_start_day.previous()).add_days(-6)
}

/// Like [`week_end_date_on`], with the end day given as a label (`"Sat"`).
///
/// The label is validated before the expression is built.
pub fn week_end_date<E: DateExpr>(date: E, week_end_day: &str) -> Result<E> {
    let day = parse_day(week_end_day)?;
    Ok(week_end_date_on(date, day))
}

/// Like [`week_start_date_on`], with the start day given as a label (`"Sun"`).
///
/// The label is validated before the expression is built.
pub fn week_start_date<E: DateExpr>(date: E, week_start_day: &str) -> Result<E> {
    let day = parse_day(week_start_day)?;
    Ok(week_start_date_on(date, day))
}

/// Week start under a configured convention.
pub fn week_start_for<E: DateExpr>(date: E, options: &WeekOptions) -> E {
    week_start_date_on(date, options.start_day)
}

/// Week end under a configured convention.
pub fn week_end_for<E: DateExpr>(date: E, options: &WeekOptions) -> E {
    week_end_date_on(date, options.end_day)
}

fn parse_day(label: &str) -> Result<DayLabel> {
    DayLabel::parse(label).map_err(|err| {
        debug!(day = label, "rejected weekday label");
        err.into()
    })
}
