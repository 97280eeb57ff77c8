//! Read-only access to a dataset's column names and schema.

use polars::prelude::{DataFrame, LazyFrame, PolarsResult};

use crate::field::StructField;

/// A dataset whose structure can be inspected.
///
/// Every call reads the handle's current state; implementations must not
/// cache, so two calls separated by a structural change may disagree.
pub trait DatasetHandle {
    /// Column names in dataset order.
    fn column_names(&self) -> PolarsResult<Vec<String>>;

    /// Schema fields in dataset order.
    fn struct_fields(&self) -> PolarsResult<Vec<StructField>>;
}

/// Polars columns may always hold nulls, so every field is reported nullable.
impl DatasetHandle for DataFrame {
    fn column_names(&self) -> PolarsResult<Vec<String>> {
        Ok(self
            .get_column_names()
            .into_iter()
            .map(ToString::to_string)
            .collect())
    }

    fn struct_fields(&self) -> PolarsResult<Vec<StructField>> {
        Ok(self
            .get_columns()
            .iter()
            .map(|column| StructField::new(column.name().as_str(), column.dtype().clone(), true))
            .collect())
    }
}

/// Resolves the plan's output schema without executing it.
impl DatasetHandle for LazyFrame {
    fn column_names(&self) -> PolarsResult<Vec<String>> {
        Ok(DatasetHandle::struct_fields(self)?
            .into_iter()
            .map(|field| field.name)
            .collect())
    }

    fn struct_fields(&self) -> PolarsResult<Vec<StructField>> {
        let schema = self.clone().collect_schema()?;
        Ok(schema
            .iter()
            .map(|(name, dtype)| StructField::new(name.as_str(), dtype.clone(), true))
            .collect())
    }
}

impl<T: DatasetHandle + ?Sized> DatasetHandle for &T {
    fn column_names(&self) -> PolarsResult<Vec<String>> {
        (**self).column_names()
    }

    fn struct_fields(&self) -> PolarsResult<Vec<StructField>> {
        (**self).struct_fields()
    }
}
