//! Schema containment checks.
//!
//! The dataset schema must contain every required field; extra dataset fields
//! are allowed. When nullability is ignored, both sides are cloned and their
//! `nullable` flags cleared before comparing, so neither the caller's schema
//! nor the dataset is touched.

use colkit_model::{DatasetHandle, StructField};
use tracing::{debug, trace};

use crate::error::{Result, ValidationError};

/// Fail unless every field of `required` appears in `handle`'s schema.
///
/// Fields match structurally on name, dtype and nullability; with
/// `ignore_nullable` they match on name and dtype only. The missing list keeps
/// the order of `required`; the reported schema is the normalized one.
pub fn validate_schema<H>(handle: &H, required: &[StructField], ignore_nullable: bool) -> Result<()>
where
    H: DatasetHandle + ?Sized,
{
    let mut actual = handle.struct_fields()?;
    let mut required = required.to_vec();

    if ignore_nullable {
        actual
            .iter_mut()
            .chain(required.iter_mut())
            .for_each(StructField::normalize_nullability);
    }

    let missing: Vec<StructField> = required
        .into_iter()
        .filter(|field| !actual.contains(field))
        .collect();

    if missing.is_empty() {
        trace!(ignore_nullable, "schema check passed");
        return Ok(());
    }

    debug!(
        missing_count = missing.len(),
        field_count = actual.len(),
        ignore_nullable,
        "schema check failed"
    );
    Err(ValidationError::MissingStructFields {
        missing,
        all: actual,
    })
}
