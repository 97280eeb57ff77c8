//! Shared model types for colkit.
//!
//! - **field**: [`StructField`], a named, typed, nullable schema entry
//! - **day**: [`DayLabel`] and the Sunday-first native week numbering
//! - **dataset**: the [`DatasetHandle`] trait for reading column names and schemas
//! - **frame**: [`DatasetFrame`], a `DataFrame` with declared nullability
//! - **options**: validation and week-convention configuration

pub mod dataset;
pub mod day;
pub mod error;
pub mod field;
pub mod frame;
pub mod options;

pub use dataset::DatasetHandle;
pub use day::{DayLabel, VALID_DAY_LABELS};
pub use error::InvalidDayError;
pub use field::{StructField, format_fields};
pub use frame::{DatasetFrame, DatasetFrameMeta};
pub use options::{ValidationOptions, WeekOptions};
