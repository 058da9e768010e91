//! Next-market stock planning
//!
//! Stock for the next market is the average of recent sales per sandwich
//! type plus a 10% margin.

use crate::error::{SandwichError, SandwichResult};

/// Number of past markets averaged when planning stock
pub const RECENT_MARKETS: usize = 5;

/// Multiplier applied to average sales
pub const STOCK_MARGIN: f64 = 1.1;

/// 2^63: the first float past `i64::MAX`
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// The last `count` data cells of a worksheet column.
///
/// The first cell is the column header and is never returned.
pub fn recent_entries(column: &[String], count: usize) -> &[String] {
    let data = column.get(1..).unwrap_or(&[]);
    &data[data.len().saturating_sub(count)..]
}

/// Recommended stock per column: `round(mean * STOCK_MARGIN)`.
///
/// Rounds half away from zero. An empty column recommends 0. Sums are taken
/// in `i128`; a recommendation outside the `i64` range is an
/// [`SandwichError::Overflow`].
pub fn calculate_stock_data(columns: &[Vec<i64>]) -> SandwichResult<Vec<i64>> {
    columns
        .iter()
        .map(|column| {
            if column.is_empty() {
                return Ok(0);
            }
            let total: i128 = column.iter().map(|&v| i128::from(v)).sum();
            let average = total as f64 / column.len() as f64;
            let planned = (average * STOCK_MARGIN).round();
            if !(-I64_LIMIT..I64_LIMIT).contains(&planned) {
                return Err(SandwichError::Overflow(format!(
                    "stock plan {planned} from average {average}"
                )));
            }
            Ok(planned as i64)
        })
        .collect()
}
