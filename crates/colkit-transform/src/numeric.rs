//! Numeric comparison expressions.

use polars::prelude::{Expr, lit};

/// True where `|col1 - col2| < threshold`. Nulls on either side give null.
pub fn approx_equal(col1: Expr, col2: Expr, threshold: f64) -> Expr {
    (col1 - col2).abs().lt(lit(threshold))
}
