use serde::Deserialize;

/// Number of sandwich types sold at each market
pub const ITEM_COUNT: usize = 6;

//==============================================================================
// Rows
//==============================================================================

/// Units sold per sandwich type at one market.
///
/// Only the validator constructs this, so a `SalesRow` always holds exactly
/// [`ITEM_COUNT`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesRow(Vec<i64>);

impl SalesRow {
    pub(crate) fn new_unchecked(values: Vec<i64>) -> Self {
        debug_assert_eq!(values.len(), ITEM_COUNT);
        SalesRow(values)
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<i64> {
        self.0
    }
}

impl AsRef<[i64]> for SalesRow {
    fn as_ref(&self) -> &[i64] {
        &self.0
    }
}

//==============================================================================
// Worksheet layout
//==============================================================================

/// Names of the tabs inside the spreadsheet document
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WorksheetNames {
    pub sales: String,
    pub surplus: String,
    pub stock: String,
}

impl Default for WorksheetNames {
    fn default() -> Self {
        Self {
            sales: "sales".to_string(),
            surplus: "surplus".to_string(),
            stock: "stock".to_string(),
        }
    }
}

//==============================================================================
// Cycle outcome
//==============================================================================

/// Rows written during one market cycle, in the order they were appended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    pub sales: Vec<i64>,
    pub surplus: Vec<i64>,
}
