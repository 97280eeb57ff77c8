//! Random selection from list columns.
//!
//! A uniform draw in `[0, 1)` per row is scaled by the row's list length and
//! truncated to an index, so every element is equally likely. Empty and null
//! lists select null.

use fastrand::Rng;
use polars::prelude::{Column, DataType, Expr, Field};

/// One uniformly random element per row of a list column.
pub fn array_choice(col: Expr) -> Expr {
    choose_with(col, |_| Rng::new())
}

/// Like [`array_choice`], but draws from a generator seeded with `seed`, so
/// every evaluation picks the same elements.
///
/// The generator is seeded per evaluated batch (a whole column, one group in
/// `group_by().agg`, or one streamed chunk) from `seed` and the batch length.
/// Batches of different length draw different sequences; batches of equal
/// length repeat the same index sequence.
pub fn array_choice_seeded(col: Expr, seed: u64) -> Expr {
    choose_with(col, move |len| Rng::with_seed(batch_seed(seed, len)))
}

fn batch_seed(seed: u64, len: usize) -> u64 {
    seed ^ (len as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

fn choose_with<F>(col: Expr, make_rng: F) -> Expr
where
    F: Fn(usize) -> Rng + Send + Sync + 'static,
{
    let uniform = col.clone().map(
        move |c: Column| {
            let mut rng = make_rng(c.len());
            let draws: Vec<f64> = (0..c.len()).map(|_| rng.f64()).collect();
            Ok(Column::new(c.name().clone(), draws))
        },
        |_, field| Ok(Field::new(field.name().clone(), DataType::Float64)),
    );
    let len = col.clone().list().len().cast(DataType::Float64);
    let index = (uniform * len).cast(DataType::Int64);
    col.list().get(index, true)
}
