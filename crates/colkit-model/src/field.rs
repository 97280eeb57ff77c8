//! Schema field definitions.

use std::fmt;

use polars::prelude::{DataType, Field};

/// A named, typed schema entry.
///
/// Two fields are equal when their name, dtype and nullability all match.
/// `nullable` is `Some` when the nullability is declared; it becomes `None`
/// once normalized away for a comparison that ignores nullability, so that a
/// declared-nullable field and a declared-non-nullable field compare equal.
#[derive(Debug, Clone, PartialEq)]
pub struct StructField {
    /// Column name.
    pub name: String,
    /// Polars data type.
    pub dtype: DataType,
    /// Declared nullability, or `None` when normalized.
    pub nullable: Option<bool>,
}

impl StructField {
    /// Create a field with declared nullability.
    pub fn new(name: impl Into<String>, dtype: DataType, nullable: bool) -> Self {
        Self {
            name: name.into(),
            dtype,
            nullable: Some(nullable),
        }
    }

    /// Create a field from a Polars field.
    ///
    /// Polars does not track nullability, so the caller supplies it.
    pub fn from_polars(field: &Field, nullable: bool) -> Self {
        Self::new(field.name().as_str(), field.dtype().clone(), nullable)
    }

    /// Clear the nullability flag.
    pub fn normalize_nullability(&mut self) {
        self.nullable = None;
    }

    /// Returns a copy with the nullability flag cleared.
    #[must_use]
    pub fn without_nullability(&self) -> Self {
        let mut field = self.clone();
        field.normalize_nullability();
        field
    }
}

impl fmt::Display for StructField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.nullable {
            Some(nullable) => write!(f, "StructField({}, {}, {nullable})", self.name, self.dtype),
            None => write!(f, "StructField({}, {})", self.name, self.dtype),
        }
    }
}

/// Render a list of fields as `[StructField(..), ..]` for diagnostics.
pub fn format_fields(fields: &[StructField]) -> String {
    let rendered: Vec<String> = fields.iter().map(ToString::to_string).collect();
    format!("[{}]", rendered.join(", "))
}
