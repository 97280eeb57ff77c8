//! Error types for structural validation.

use colkit_model::{StructField, format_fields};
use polars::prelude::PolarsError;
use thiserror::Error;

/// A dataset failed a structural check.
///
/// Each variant carries the offending names or fields together with the full
/// set found on the dataset, so callers can branch on the kind and report
/// both.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Required columns are absent.
    #[error(
        "the {missing:?} columns are not included in the DataFrame with the following columns {all:?}"
    )]
    MissingColumns {
        missing: Vec<String>,
        all: Vec<String>,
    },

    /// Required schema fields are absent.
    #[error(
        "the {} struct fields are not included in the DataFrame with the following struct fields {}",
        format_fields(.missing),
        format_fields(.all)
    )]
    MissingStructFields {
        missing: Vec<StructField>,
        all: Vec<StructField>,
    },

    /// Prohibited columns are present.
    #[error(
        "the {found:?} columns are not allowed to be included in the DataFrame with the following columns {all:?}"
    )]
    ProhibitedColumns { found: Vec<String>, all: Vec<String> },

    /// The dataset's structure could not be read.
    #[error("failed to read dataset structure: {0}")]
    Polars(#[from] PolarsError),
}

impl ValidationError {
    /// Short name of the failed check.
    pub fn check_name(&self) -> &'static str {
        match self {
            ValidationError::MissingColumns { .. } => "presence",
            ValidationError::MissingStructFields { .. } => "schema",
            ValidationError::ProhibitedColumns { .. } => "absence",
            ValidationError::Polars(_) => "introspection",
        }
    }
}

/// Result type alias for validation.
pub type Result<T> = std::result::Result<T, ValidationError>;
