//! Validation check modules.
//!
//! Each module performs one structural check; [`check_requirements`] runs all
//! of them against a bundle of requirements.

mod absence;
mod presence;
mod schema;

pub use absence::validate_absence_of_columns;
pub use presence::validate_presence_of_columns;
pub use schema::validate_schema;

use colkit_model::{DatasetHandle, StructField, ValidationOptions};

use crate::error::Result;
use crate::report::ValidationReport;

/// Structural requirements for a dataset.
#[derive(Debug, Clone, Default)]
pub struct FrameRequirements {
    /// Columns that must be present.
    pub required_columns: Vec<String>,
    /// Columns that must not be present.
    pub prohibited_columns: Vec<String>,
    /// Fields the schema must contain.
    pub required_schema: Vec<StructField>,
}

impl FrameRequirements {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn require_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_columns
            .extend(columns.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn prohibit_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prohibited_columns
            .extend(columns.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn require_fields<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = StructField>,
    {
        self.required_schema.extend(fields);
        self
    }

    /// True when no requirement is declared.
    pub fn is_empty(&self) -> bool {
        self.required_columns.is_empty()
            && self.prohibited_columns.is_empty()
            && self.required_schema.is_empty()
    }
}

/// Run presence, absence and schema checks in that order; the first failure
/// is returned.
pub fn validate_requirements<H>(
    handle: &H,
    requirements: &FrameRequirements,
    options: &ValidationOptions,
) -> Result<()>
where
    H: DatasetHandle + ?Sized,
{
    check_requirements(handle, requirements, options).into_result()
}

/// Run every declared check and collect all failures.
pub fn check_requirements<H>(
    handle: &H,
    requirements: &FrameRequirements,
    options: &ValidationOptions,
) -> ValidationReport
where
    H: DatasetHandle + ?Sized,
{
    let mut report = ValidationReport::new();

    // 1. Required columns
    if !requirements.required_columns.is_empty() {
        report.record(validate_presence_of_columns(
            handle,
            &requirements.required_columns,
        ));
    }

    // 2. Prohibited columns
    if !requirements.prohibited_columns.is_empty() {
        report.record(validate_absence_of_columns(
            handle,
            &requirements.prohibited_columns,
        ));
    }

    // 3. Schema containment
    if !requirements.required_schema.is_empty() {
        report.record(validate_schema(
            handle,
            &requirements.required_schema,
            options.ignore_nullable,
        ));
    }

    report
}
