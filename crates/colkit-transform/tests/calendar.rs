//! Tests for week boundary expressions.

use chrono::{Datelike, NaiveDate, TimeDelta};
use colkit_model::{DayLabel, WeekOptions};
use colkit_transform::{
    TransformError, week_end_date, week_end_date_on, week_end_for, week_start_date,
    week_start_date_on, week_start_for,
};
use polars::prelude::*;
use proptest::prelude::*;

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn date_frame(dates: &[Option<NaiveDate>]) -> DataFrame {
    let days: Vec<Option<i32>> = dates
        .iter()
        .map(|date| date.map(|d| (d - epoch()).num_days() as i32))
        .collect();
    let series = Series::new("d".into(), days).cast(&DataType::Date).unwrap();
    DataFrame::new(vec![series.into()]).unwrap()
}

fn evaluate(df: DataFrame, expr: Expr) -> Vec<Option<NaiveDate>> {
    let out = df
        .lazy()
        .select([expr.cast(DataType::Int32).alias("out")])
        .collect()
        .unwrap();
    out.column("out")
        .unwrap()
        .i32()
        .unwrap()
        .into_iter()
        .map(|days| days.map(|n| epoch() + TimeDelta::days(i64::from(n))))
        .collect()
}

#[test]
fn week_end_of_wednesday_is_saturday() {
    let df = date_frame(&[Some(ymd(2024, 6, 12))]);
    let expr = week_end_date(col("d"), "Sat").unwrap();
    assert_eq!(evaluate(df, expr), vec![Some(ymd(2024, 6, 15))]);
}

#[test]
fn week_start_of_wednesday_is_preceding_monday() {
    let df = date_frame(&[Some(ymd(2024, 6, 12))]);
    let expr = week_start_date(col("d"), "Mon").unwrap();
    assert_eq!(evaluate(df, expr), vec![Some(ymd(2024, 6, 10))]);
}

#[test]
fn boundary_dates_are_returned_unchanged() {
    let df = date_frame(&[Some(ymd(2024, 6, 15)), Some(ymd(2024, 6, 9))]);
    let ends = evaluate(df.clone(), week_end_date(col("d"), "Sat").unwrap());
    assert_eq!(ends[0], Some(ymd(2024, 6, 15)));

    let starts = evaluate(df, week_start_date(col("d"), "Sun").unwrap());
    assert_eq!(starts[1], Some(ymd(2024, 6, 9)));
}

#[test]
fn null_dates_propagate() {
    let df = date_frame(&[None, Some(ymd(2024, 6, 12)), None]);
    let ends = evaluate(df.clone(), week_end_date(col("d"), "Sat").unwrap());
    assert_eq!(ends, vec![None, Some(ymd(2024, 6, 15)), None]);

    let starts = evaluate(df, week_start_date(col("d"), "Sun").unwrap());
    assert_eq!(starts, vec![None, Some(ymd(2024, 6, 9)), None]);
}

#[test]
fn timestamps_are_truncated_to_dates() {
    let micros: Vec<Option<i64>> = [
        Some(ymd(2024, 6, 12).and_hms_opt(0, 0, 0).unwrap()),
        Some(ymd(2024, 6, 15).and_hms_opt(18, 30, 0).unwrap()),
        None,
    ]
    .into_iter()
    .map(|ts| ts.map(|ts| ts.and_utc().timestamp_micros()))
    .collect();
    let ts = Series::new("ts".into(), micros)
        .cast(&DataType::Datetime(TimeUnit::Microseconds, None))
        .unwrap();
    let df = DataFrame::new(vec![ts.into()]).unwrap();

    let ends = df
        .clone()
        .lazy()
        .select([week_end_date(col("ts"), "Sat").unwrap().alias("end")])
        .collect()
        .unwrap();
    assert_eq!(ends.column("end").unwrap().dtype(), &DataType::Date);

    let ends = evaluate(df.clone(), week_end_date(col("ts"), "Sat").unwrap());
    assert_eq!(ends, vec![Some(ymd(2024, 6, 15)), Some(ymd(2024, 6, 15)), None]);

    let starts = evaluate(df, week_start_date(col("ts"), "Mon").unwrap());
    assert_eq!(starts, vec![Some(ymd(2024, 6, 10)), Some(ymd(2024, 6, 10)), None]);
}

#[test]
fn invalid_day_fails_before_building() {
    // The column does not exist; the label is rejected first.
    let err = week_end_date(col("no_such_column"), "Saturday").unwrap_err();
    assert!(matches!(&err, TransformError::InvalidDay(inner) if inner.day == "Saturday"));
    insta::assert_snapshot!(
        err.to_string(),
        @"the day you entered 'Saturday' is not valid; valid days are [Mon,Tue,Wed,Thu,Fri,Sat,Sun]"
    );

    assert!(matches!(
        week_start_date(Some(ymd(2024, 6, 12)), "mon"),
        Err(TransformError::InvalidDay(_))
    ));
}

#[test]
fn configured_week_applies_both_boundaries() {
    let options = WeekOptions::starting_on(DayLabel::Monday);
    let df = date_frame(&[Some(ymd(2024, 6, 12))]);
    let out = evaluate(df.clone(), week_start_for(col("d"), &options));
    assert_eq!(out, vec![Some(ymd(2024, 6, 10))]);
    let out = evaluate(df, week_end_for(col("d"), &options));
    assert_eq!(out, vec![Some(ymd(2024, 6, 16))]);
}

#[test]
fn polars_and_scalar_backends_agree() {
    let start = ymd(2023, 12, 20);
    let dates: Vec<Option<NaiveDate>> = (0..45)
        .map(|offset| Some(start + TimeDelta::days(offset)))
        .collect();
    let df = date_frame(&dates);

    for day in DayLabel::NATIVE_WEEK {
        let ends = evaluate(df.clone(), week_end_date_on(col("d"), day));
        let starts = evaluate(df.clone(), week_start_date_on(col("d"), day));
        for (idx, date) in dates.iter().enumerate() {
            assert_eq!(ends[idx], week_end_date_on(*date, day), "end {day} for {date:?}");
            assert_eq!(starts[idx], week_start_date_on(*date, day), "start {day} for {date:?}");
        }
    }
}

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (-200_000i64..200_000).prop_map(|offset| epoch() + TimeDelta::days(offset))
}

fn any_day() -> impl Strategy<Value = DayLabel> {
    prop::sample::select(DayLabel::NATIVE_WEEK.to_vec())
}

proptest! {
    #[test]
    fn week_end_is_nearest_boundary_on_or_after(date in any_date(), day in any_day()) {
        let end = week_end_date_on(Some(date), day).unwrap();
        prop_assert_eq!(DayLabel::from(end.weekday()), day);
        let gap = (end - date).num_days();
        prop_assert!((0..=6).contains(&gap));
    }

    #[test]
    fn week_end_fixed_point(date in any_date(), day in any_day()) {
        let on_day = week_end_date_on(Some(date), day);
        prop_assert_eq!(week_end_date_on(on_day, day), on_day);
    }

    #[test]
    fn week_start_contains_date(date in any_date(), day in any_day()) {
        let start = week_start_date(Some(date), day.label()).unwrap().unwrap();
        prop_assert_eq!(DayLabel::from(start.weekday()), day);
        prop_assert!(start <= date);
        prop_assert!(date <= start + TimeDelta::days(6));
    }
}
