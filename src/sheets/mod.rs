//! Spreadsheet backends
//!
//! The market cycle talks to storage only through [`Document`] and
//! [`Worksheet`]. [`google`] is the real backend; [`memory`] keeps everything
//! in process for tests and offline runs.

pub mod auth;
pub mod google;
pub mod memory;

pub use google::{GoogleClient, GoogleDocument, GoogleWorksheet};
pub use memory::{MemoryDocument, MemoryWorksheet};

use crate::error::SandwichResult;

/// One named tab of a spreadsheet
pub trait Worksheet {
    fn title(&self) -> &str;

    /// Append `row` after the last row. Appending the same row twice stores
    /// it twice.
    fn append_row(&mut self, row: &[i64]) -> SandwichResult<()>;

    /// Every row as strings, padded to the widest row.
    fn get_all_values(&self) -> SandwichResult<Vec<Vec<String>>>;

    /// Values of the 1-based column `col`, top to bottom.
    ///
    /// Trailing empty cells are dropped.
    fn col_values(&self, col: usize) -> SandwichResult<Vec<String>> {
        let rows = self.get_all_values()?;
        Ok(column_of(&rows, col))
    }
}

/// A spreadsheet document holding named worksheets
pub trait Document {
    type Sheet: Worksheet;

    fn title(&self) -> &str;

    /// Open the worksheet called `name`, failing with
    /// [`SandwichError::WorksheetNotFound`](crate::error::SandwichError::WorksheetNotFound)
    /// when the document has no such tab.
    fn worksheet(&self, name: &str) -> SandwichResult<Self::Sheet>;
}

/// Pad every row with empty strings to the length of the widest row.
pub fn pad_rows(mut rows: Vec<Vec<String>>) -> Vec<Vec<String>> {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut rows {
        row.resize(width, String::new());
    }
    rows
}

fn column_of(rows: &[Vec<String>], col: usize) -> Vec<String> {
    let Some(index) = col.checked_sub(1) else {
        return Vec::new();
    };
    let mut values: Vec<String> = rows
        .iter()
        .map(|row| row.get(index).cloned().unwrap_or_default())
        .collect();
    while values.last().is_some_and(String::is_empty) {
        values.pop();
    }
    values
}
