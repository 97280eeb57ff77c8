//! Column expression builders for Polars.
//!
//! - **calendar**: week start / week end dates for any boundary day
//! - **strings**: whitespace normalization and regex cleanup
//! - **numeric**: approximate equality
//! - **arrays**: random element selection from list columns
//! - **predicates**: any/all aggregation of element predicates over lists
//!
//! Every builder returns a lazy [`Expr`](polars::prelude::Expr); nothing is
//! evaluated until the caller runs the query.

pub mod arrays;
pub mod calendar;
pub mod error;
pub mod numeric;
pub mod predicates;
pub mod strings;

pub use arrays::{array_choice, array_choice_seeded};
pub use calendar::{
    DateExpr, week_end_date, week_end_date_on, week_end_for, week_start_date, week_start_date_on,
    week_start_for,
};
pub use error::{Result, TransformError};
pub use numeric::approx_equal;
pub use predicates::{exists, for_all, multi_equals};
pub use strings::{
    anti_trim, regexp_extract_all, remove_all_whitespace, remove_non_word_characters,
    single_space,
};
