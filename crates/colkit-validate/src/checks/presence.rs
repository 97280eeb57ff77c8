//! Required column checks.

use std::collections::HashSet;

use colkit_model::DatasetHandle;
use tracing::{debug, trace};

use crate::error::{Result, ValidationError};

/// Fail unless every name in `required` is a column of `handle`.
///
/// The missing list keeps the order of `required`; the full column list keeps
/// dataset order.
pub fn validate_presence_of_columns<H, S>(handle: &H, required: &[S]) -> Result<()>
where
    H: DatasetHandle + ?Sized,
    S: AsRef<str>,
{
    let all = handle.column_names()?;
    let present: HashSet<&str> = all.iter().map(String::as_str).collect();

    let missing: Vec<String> = required
        .iter()
        .map(|name| name.as_ref())
        .filter(|name| !present.contains(name))
        .map(str::to_string)
        .collect();

    if missing.is_empty() {
        trace!(required = required.len(), "presence check passed");
        return Ok(());
    }

    debug!(
        missing_count = missing.len(),
        column_count = all.len(),
        "presence check failed"
    );
    Err(ValidationError::MissingColumns { missing, all })
}

#[cfg(test)]
mod tests {
    use polars::prelude::{Column, DataFrame};

    use super::*;

    fn df() -> DataFrame {
        DataFrame::new(vec![
            Column::new("id".into(), vec![1i64]),
            Column::new("name".into(), vec!["a"]),
        ])
        .unwrap()
    }

    #[test]
    fn all_present() {
        assert!(validate_presence_of_columns(&df(), &["name", "id"]).is_ok());
    }

    #[test]
    fn empty_requirement_passes() {
        let required: [&str; 0] = [];
        assert!(validate_presence_of_columns(&df(), &required).is_ok());
    }

    #[test]
    fn missing_keeps_required_order() {
        let err = validate_presence_of_columns(&df(), &["zeta", "id", "alpha"]).unwrap_err();
        match err {
            ValidationError::MissingColumns { missing, all } => {
                assert_eq!(missing, vec!["zeta", "alpha"]);
                assert_eq!(all, vec!["id", "name"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicate_requirement_reported_per_occurrence() {
        let err = validate_presence_of_columns(&df(), &["age", "age"]).unwrap_err();
        let ValidationError::MissingColumns { missing, .. } = err else {
            panic!("expected missing columns");
        };
        assert_eq!(missing, vec!["age", "age"]);
    }
}
