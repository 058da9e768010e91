//! In-process spreadsheet backend

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::{pad_rows, Document, Worksheet};
use crate::error::{SandwichError, SandwichResult};

type Sheets = Rc<RefCell<BTreeMap<String, Vec<Vec<String>>>>>;

/// A document whose worksheets live in memory.
///
/// Clones share the same storage, as do the worksheets opened from it, so a
/// test can keep a handle and inspect what the cycle wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    title: String,
    sheets: Sheets,
}

impl MemoryDocument {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sheets: Sheets::default(),
        }
    }

    /// Add a worksheet with initial rows
    #[must_use]
    pub fn with_worksheet<I, R, S>(self, name: &str, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: ToString,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(|cell| cell.to_string()).collect())
            .collect();
        self.sheets.borrow_mut().insert(name.to_string(), rows);
        self
    }

    /// Current rows of a worksheet, or `None` if it doesn't exist
    pub fn rows(&self, name: &str) -> Option<Vec<Vec<String>>> {
        self.sheets.borrow().get(name).cloned()
    }
}

impl Document for MemoryDocument {
    type Sheet = MemoryWorksheet;

    fn title(&self) -> &str {
        &self.title
    }

    fn worksheet(&self, name: &str) -> SandwichResult<MemoryWorksheet> {
        if !self.sheets.borrow().contains_key(name) {
            return Err(SandwichError::WorksheetNotFound(name.to_string()));
        }
        Ok(MemoryWorksheet {
            title: name.to_string(),
            sheets: Rc::clone(&self.sheets),
        })
    }
}

#[derive(Debug, Clone)]
pub struct MemoryWorksheet {
    title: String,
    sheets: Sheets,
}

impl Worksheet for MemoryWorksheet {
    fn title(&self) -> &str {
        &self.title
    }

    fn append_row(&mut self, row: &[i64]) -> SandwichResult<()> {
        let mut sheets = self.sheets.borrow_mut();
        let rows = sheets
            .get_mut(&self.title)
            .ok_or_else(|| SandwichError::WorksheetNotFound(self.title.clone()))?;
        rows.push(row.iter().map(i64::to_string).collect());
        Ok(())
    }

    fn get_all_values(&self) -> SandwichResult<Vec<Vec<String>>> {
        let sheets = self.sheets.borrow();
        let rows = sheets
            .get(&self.title)
            .ok_or_else(|| SandwichError::WorksheetNotFound(self.title.clone()))?;
        Ok(pad_rows(rows.clone()))
    }
}
