//! [`DateExpr`] for Polars expressions.
//!
//! The input may be `Date` or `Datetime`; it is cast to `Date` before any
//! comparison or shift. Polars reports ISO weekdays
//! (Monday = 1 .. Sunday = 7); `iso % 7 + 1` turns that into the native
//! Sunday-first numbering. Day shifts go through the `Int32`
//! days-since-epoch representation of `Date`.

use colkit_model::DayLabel;
use polars::prelude::{DataType, Expr, lit, when};

use super::DateExpr;

impl DateExpr for Expr {
    type Mask = Expr;

    fn to_date(&self) -> Expr {
        self.clone().cast(DataType::Date)
    }

    fn day_of_week_eq_missing(&self, native_number: i8) -> Expr {
        native_day_of_week(self.clone()).eq_missing(lit(i32::from(native_number)))
    }

    fn next_day(&self, day: DayLabel) -> Expr {
        let target = lit(i32::from(day.native_number()));
        // (target - current + 6) % 7 + 1 is in 1..=7 and never negative
        let days_ahead =
            ((target - native_day_of_week(self.clone()) + lit(6i32)) % lit(7i32)) + lit(1i32);
        shift_days(self.clone(), days_ahead)
    }

    fn add_days(&self, days: i32) -> Expr {
        shift_days(self.clone(), lit(days))
    }

    fn select(mask: Expr, when_true: Expr, otherwise: Expr) -> Expr {
        when(mask).then(when_true).otherwise(otherwise)
    }
}

/// Sunday = 1 .. Saturday = 7.
fn native_day_of_week(date: Expr) -> Expr {
    (date.dt().weekday().cast(DataType::Int32) % lit(7i32)) + lit(1i32)
}

fn shift_days(date: Expr, days: Expr) -> Expr {
    (date.cast(DataType::Int32) + days).cast(DataType::Date)
}
