//! Named dataset frames with declared nullability.
//!
//! Polars does not record whether a column may hold nulls. [`DatasetFrame`]
//! wraps a [`DataFrame`] with a name and optional metadata declaring which
//! columns are non-nullable, so schema checks can compare nullability the way
//! a declared table schema would.

use std::collections::BTreeSet;

use polars::prelude::{DataFrame, PolarsResult};

use crate::dataset::DatasetHandle;
use crate::field::StructField;

/// Declared structure of a dataset frame.
#[derive(Debug, Clone, Default)]
pub struct DatasetFrameMeta {
    /// Columns declared as never holding nulls.
    pub non_nullable: BTreeSet<String>,

    /// Free-form description used in reports.
    pub description: Option<String>,
}

/// A dataset with a name and optional declared metadata.
#[derive(Debug, Clone)]
pub struct DatasetFrame {
    /// Dataset name (e.g., "orders", "customers").
    pub name: String,
    /// The dataset contents.
    pub data: DataFrame,
    /// Optional declared metadata.
    pub meta: Option<DatasetFrameMeta>,
}

impl DatasetFrame {
    /// Create a frame with no declared metadata.
    pub fn new(name: impl Into<String>, data: DataFrame) -> Self {
        Self {
            name: name.into(),
            data,
            meta: None,
        }
    }

    /// Declare columns as non-nullable.
    #[must_use]
    pub fn with_non_nullable<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let meta = self.meta.get_or_insert_with(DatasetFrameMeta::default);
        meta.non_nullable.extend(columns.into_iter().map(Into::into));
        self
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let meta = self.meta.get_or_insert_with(DatasetFrameMeta::default);
        meta.description = Some(description.into());
        self
    }

    /// Returns the number of records in the frame.
    pub fn record_count(&self) -> usize {
        self.data.height()
    }

    /// Whether `column` may hold nulls. Undeclared columns are nullable.
    pub fn is_nullable(&self, column: &str) -> bool {
        self.meta
            .as_ref()
            .is_none_or(|meta| !meta.non_nullable.contains(column))
    }

    /// Get the description, if any.
    pub fn description(&self) -> Option<&str> {
        self.meta.as_ref().and_then(|m| m.description.as_deref())
    }
}

impl DatasetHandle for DatasetFrame {
    fn column_names(&self) -> PolarsResult<Vec<String>> {
        self.data.column_names()
    }

    fn struct_fields(&self) -> PolarsResult<Vec<StructField>> {
        Ok(self
            .data
            .get_columns()
            .iter()
            .map(|column| {
                let name = column.name().as_str();
                StructField::new(name, column.dtype().clone(), self.is_nullable(name))
            })
            .collect())
    }
}
