//! Row-level predicate aggregation.
//!
//! [`exists`] and [`for_all`] lift an element predicate to a builder that
//! maps a list column to a boolean column. Null lists give null; an empty
//! list gives `false` for `exists` and `true` for `for_all`.

use polars::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Quantifier {
    Any,
    All,
}

impl Quantifier {
    fn apply<F>(self, values: &Series, predicate: &F) -> bool
    where
        F: Fn(&AnyValue<'_>) -> bool,
    {
        let mut elements = (0..values.len()).filter_map(|idx| values.get(idx).ok());
        match self {
            Quantifier::Any => elements.any(|value| predicate(&value)),
            Quantifier::All => elements.all(|value| predicate(&value)),
        }
    }
}

/// Builder returning true where any element of the row's list satisfies
/// `predicate`.
///
/// ```
/// use colkit_transform::exists;
/// use polars::prelude::*;
///
/// let has_negative = exists(|v: &AnyValue<'_>| v.extract::<i64>().is_some_and(|n| n < 0));
/// let expr = has_negative(col("readings"));
/// # let _ = expr;
/// ```
pub fn exists<F>(predicate: F) -> impl Fn(Expr) -> Expr
where
    F: Fn(&AnyValue<'_>) -> bool + Clone + Send + Sync + 'static,
{
    move |list: Expr| quantify(list, predicate.clone(), Quantifier::Any)
}

/// Builder returning true where every element of the row's list satisfies
/// `predicate`.
pub fn for_all<F>(predicate: F) -> impl Fn(Expr) -> Expr
where
    F: Fn(&AnyValue<'_>) -> bool + Clone + Send + Sync + 'static,
{
    move |list: Expr| quantify(list, predicate.clone(), Quantifier::All)
}

/// Builder returning true where every given column equals `value`.
///
/// Nulls compare unequal; an empty column set is vacuously true.
pub fn multi_equals(value: Expr) -> impl Fn(&[Expr]) -> Expr {
    move |columns: &[Expr]| {
        columns
            .iter()
            .map(|column| column.clone().eq_missing(value.clone()))
            .reduce(Expr::and)
            .unwrap_or_else(|| lit(true))
    }
}

fn quantify<F>(list: Expr, predicate: F, quantifier: Quantifier) -> Expr
where
    F: Fn(&AnyValue<'_>) -> bool + Send + Sync + 'static,
{
    list.map(
        move |c: Column| {
            let ca = c.list()?;
            let out: BooleanChunked = ca
                .into_iter()
                .map(|row| row.map(|values| quantifier.apply(&values, &predicate)))
                .collect();
            Ok(out.with_name(c.name().clone()).into_column())
        },
        |_, field| Ok(Field::new(field.name().clone(), DataType::Boolean)),
    )
}
