//! Prohibited column checks.

use std::collections::HashSet;

use colkit_model::DatasetHandle;
use tracing::{debug, trace};

use crate::error::{Result, ValidationError};

/// Fail if any column of `handle` is named in `prohibited`.
///
/// Offending columns are reported in dataset order.
pub fn validate_absence_of_columns<H, S>(handle: &H, prohibited: &[S]) -> Result<()>
where
    H: DatasetHandle + ?Sized,
    S: AsRef<str>,
{
    let all = handle.column_names()?;
    let banned: HashSet<&str> = prohibited.iter().map(|name| name.as_ref()).collect();

    let found: Vec<String> = all
        .iter()
        .filter(|name| banned.contains(name.as_str()))
        .cloned()
        .collect();

    if found.is_empty() {
        trace!(prohibited = prohibited.len(), "absence check passed");
        return Ok(());
    }

    debug!(
        found_count = found.len(),
        column_count = all.len(),
        "absence check failed"
    );
    Err(ValidationError::ProhibitedColumns { found, all })
}
