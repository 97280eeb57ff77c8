//! Structural validation for Polars datasets.
//!
//! Checks read a dataset's column names and schema through
//! [`DatasetHandle`](colkit_model::DatasetHandle) and fail with a typed
//! [`ValidationError`] that carries both the offending set and everything the
//! dataset actually has. Nothing is mutated or repaired.
//!
//! ```
//! use colkit_validate::{ValidationError, validate_presence_of_columns};
//! use polars::prelude::{Column, DataFrame};
//!
//! let df = DataFrame::new(vec![
//!     Column::new("id".into(), vec![1i64]),
//!     Column::new("name".into(), vec!["a"]),
//! ])
//! .unwrap();
//!
//! let err = validate_presence_of_columns(&df, &["id", "age"]).unwrap_err();
//! assert!(matches!(err, ValidationError::MissingColumns { ref missing, .. } if missing == &["age"]));
//! ```

pub mod checks;
pub mod error;
pub mod report;

pub use checks::{
    FrameRequirements, check_requirements, validate_absence_of_columns,
    validate_presence_of_columns, validate_requirements, validate_schema,
};
pub use error::{Result, ValidationError};
pub use report::ValidationReport;
