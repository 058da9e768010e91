//! Love Sandwiches - market-day sales automation
//!
//! Records the sales from a market day in a Google Sheet, works out the
//! surplus against the stock that was made, and on request plans stock for
//! the next market.
//!
//! The storage backend is a trait seam ([`sheets::Document`] /
//! [`sheets::Worksheet`]), so the whole cycle runs against
//! [`sheets::MemoryDocument`] in tests.
//!
//! # Example
//!
//! ```
//! use love_sandwiches::market::run_market_cycle;
//! use love_sandwiches::sheets::MemoryDocument;
//! use love_sandwiches::types::WorksheetNames;
//! use std::io::Cursor;
//!
//! let document = MemoryDocument::new("love_sandwiches")
//!     .with_worksheet("sales", vec![vec!["ham"; 6]])
//!     .with_worksheet("surplus", vec![vec!["ham"; 6]])
//!     .with_worksheet("stock", vec![vec!["ham"; 6], vec!["50"; 6]]);
//!
//! let mut input = Cursor::new("10,20,30,40,50,60\n");
//! let mut output = Vec::new();
//! let report = run_market_cycle(&document, &WorksheetNames::default(), &mut input, &mut output)?;
//!
//! assert_eq!(report.surplus, vec![40, 30, 20, 10, 0, -10]);
//! # Ok::<(), love_sandwiches::error::SandwichError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod logging;
pub mod market;
pub mod sheets;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{SandwichError, SandwichResult, ValidationError};
pub use types::{CycleReport, SalesRow, WorksheetNames, ITEM_COUNT};
