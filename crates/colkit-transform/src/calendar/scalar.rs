//! [`DateExpr`] for a single optional date.
//!
//! `None` plays the role of a null date. Shifts that would leave chrono's
//! representable range also yield `None`.

use chrono::{Datelike, NaiveDate, TimeDelta};
use colkit_model::DayLabel;

use super::DateExpr;

impl DateExpr for Option<NaiveDate> {
    type Mask = bool;

    fn to_date(&self) -> Self {
        *self
    }

    fn day_of_week_eq_missing(&self, native_number: i8) -> bool {
        self.is_some_and(|date| native_day_of_week(date) == native_number)
    }

    fn next_day(&self, day: DayLabel) -> Self {
        self.and_then(|date| {
            let current = i64::from(native_day_of_week(date));
            let target = i64::from(day.native_number());
            let days_ahead = (target - current).rem_euclid(7);
            let days_ahead = if days_ahead == 0 { 7 } else { days_ahead };
            date.checked_add_signed(TimeDelta::days(days_ahead))
        })
    }

    fn add_days(&self, days: i32) -> Self {
        self.and_then(|date| date.checked_add_signed(TimeDelta::days(i64::from(days))))
    }

    fn select(mask: bool, when_true: Self, otherwise: Self) -> Self {
        if mask { when_true } else { otherwise }
    }
}

fn native_day_of_week(date: NaiveDate) -> i8 {
    DayLabel::from(date.weekday()).native_number()
}
