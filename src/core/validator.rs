//! Sales data validation
//!
//! Turns the comma-separated tokens a user typed into a [`SalesRow`].

use crate::error::ValidationError;
use crate::types::{SalesRow, ITEM_COUNT};

/// Split one line of user input into the raw tokens the validator expects.
///
/// Only the separator is handled here; whitespace around each token is left
/// in place and tolerated by [`validate`].
pub fn split_tokens(line: &str) -> Vec<&str> {
    line.split(',').collect()
}

/// Validate raw tokens as sales figures.
///
/// Every token must parse as a base-10 integer (surrounding whitespace is
/// ignored) and there must be exactly [`ITEM_COUNT`] of them. The integer
/// check runs first, so a bad token is reported even when the count is also
/// wrong.
pub fn validate(values: &[&str]) -> Result<SalesRow, ValidationError> {
    parse_row(values).map(SalesRow::new_unchecked)
}

/// Same checks as [`validate`], for rows that are not sales (e.g. stock
/// typed on the command line).
pub fn parse_row(values: &[&str]) -> Result<Vec<i64>, ValidationError> {
    let parsed = values
        .iter()
        .map(|raw| {
            raw.trim()
                .parse::<i64>()
                .map_err(|_| ValidationError::NotAnInteger(raw.to_string()))
        })
        .collect::<Result<Vec<i64>, _>>()?;

    if parsed.len() != ITEM_COUNT {
        return Err(ValidationError::WrongCount {
            expected: ITEM_COUNT,
            provided: parsed.len(),
        });
    }

    Ok(parsed)
}

/// Convenience wrapper: split a line and validate the tokens.
pub fn parse_sales_line(line: &str) -> Result<SalesRow, ValidationError> {
    validate(&split_tokens(line))
}
