//! String cleanup expressions.
//!
//! All builders take a string-valued expression and return a new one; null
//! values stay null.

use polars::prelude::*;
use regex::Regex;

use crate::error::Result;

/// Collapse runs of spaces to one space and trim spaces at both ends.
///
/// ```
/// use colkit_transform::single_space;
/// use polars::prelude::*;
///
/// let df = DataFrame::new(vec![Column::new("s".into(), ["  hi   there  "])]).unwrap();
/// let out = df.lazy().select([single_space(col("s"))]).collect().unwrap();
/// assert_eq!(out.column("s").unwrap().str().unwrap().get(0), Some("hi there"));
/// ```
pub fn single_space(col: Expr) -> Expr {
    col.str()
        .replace_all(lit(" +"), lit(" "), false)
        .str()
        .strip_chars(lit(" "))
}

/// Remove every whitespace character.
pub fn remove_all_whitespace(col: Expr) -> Expr {
    col.str().replace_all(lit(r"\s+"), lit(""), false)
}

/// Remove whitespace between words, keeping leading and trailing whitespace.
pub fn anti_trim(col: Expr) -> Expr {
    col.str().replace_all(lit(r"\b\s+\b"), lit(""), false)
}

/// Remove everything that is neither a word character nor whitespace.
pub fn remove_non_word_characters(col: Expr) -> Expr {
    col.str().replace_all(lit(r"[^\w\s]+"), lit(""), false)
}

/// All non-overlapping matches of `pattern` in each value, as a list column.
///
/// With exactly one capture group the group's text is collected; otherwise
/// the whole match. A group that did not participate yields `""`.
pub fn regexp_extract_all(col: Expr, pattern: &str) -> Result<Expr> {
    let regex = Regex::new(pattern)?;
    let group = usize::from(regex.captures_len() == 2);

    Ok(col.map(
        move |c: Column| {
            let ca = c.str()?;
            let mut builder = ListStringChunkedBuilder::new(c.name().clone(), ca.len(), ca.len());
            for value in ca.into_iter() {
                match value {
                    Some(text) => builder.append_values_iter(
                        regex
                            .captures_iter(text)
                            .map(|caps| caps.get(group).map_or("", |m| m.as_str())),
                    ),
                    None => builder.append_null(),
                }
            }
            Ok(builder.finish().into_column())
        },
        |_, field| {
            Ok(Field::new(
                field.name().clone(),
                DataType::List(Box::new(DataType::String)),
            ))
        },
    ))
}
