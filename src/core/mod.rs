//! Pure market-day calculations: validation, surplus and stock planning

pub mod stock;
pub mod surplus;
pub mod validator;

pub use stock::{calculate_stock_data, recent_entries, RECENT_MARKETS, STOCK_MARGIN};
pub use surplus::compute_surplus;
pub use validator::{parse_row, parse_sales_line, split_tokens, validate};
