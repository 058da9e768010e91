//! Surplus calculation

use crate::error::{SandwichError, SandwichResult};

/// Per-position `stock - sales`.
///
/// Pairing stops at the shorter of the two slices. Positive values are
/// waste, negative values mean demand outran supply. A difference outside
/// the `i64` range is an [`SandwichError::Overflow`], never a wrapped value.
pub fn compute_surplus(stock: &[i64], sales: &[i64]) -> SandwichResult<Vec<i64>> {
    stock
        .iter()
        .zip(sales.iter())
        .map(|(&stock, &sales)| {
            stock.checked_sub(sales).ok_or_else(|| {
                SandwichError::Overflow(format!("surplus {stock} - {sales}"))
            })
        })
        .collect()
}
