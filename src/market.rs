//! One market-day cycle against a spreadsheet document

use std::io::{BufRead, Write};

use colored::Colorize;
use tracing::info;

use crate::core::{calculate_stock_data, compute_surplus, recent_entries, RECENT_MARKETS};
use crate::error::{SandwichError, SandwichResult};
use crate::input::collect_sales;
use crate::sheets::{Document, Worksheet};
use crate::types::{CycleReport, WorksheetNames, ITEM_COUNT};

/// Collect sales, then record sales and surplus.
///
/// Each write is committed as soon as it happens. If a later step fails the
/// earlier rows stay in the sheet. The stock worksheet is only read.
pub fn run_market_cycle<D, R, W>(
    document: &D,
    names: &WorksheetNames,
    input: &mut R,
    output: &mut W,
) -> SandwichResult<CycleReport>
where
    D: Document,
    R: BufRead,
    W: Write,
{
    let sales = collect_sales(input, output)?;
    update_worksheet(document, &names.sales, sales.as_slice(), output)?;

    let stock_row = last_row(document, &names.stock)?;
    let surplus = compute_surplus(&stock_row, sales.as_slice())?;
    update_worksheet(document, &names.surplus, &surplus, output)?;

    info!(document = document.title(), "market cycle complete");
    Ok(CycleReport {
        sales: sales.into_inner(),
        surplus,
    })
}

/// Plan stock for the next market from the last [`RECENT_MARKETS`] sales
/// rows and append the plan to the stock worksheet.
pub fn plan_next_market<D: Document, W: Write>(
    document: &D,
    names: &WorksheetNames,
    output: &mut W,
) -> SandwichResult<Vec<i64>> {
    let recent = last_sales_entries(document, &names.sales, RECENT_MARKETS)?;
    let stock = calculate_stock_data(&recent)?;
    update_worksheet(document, &names.stock, &stock, output)?;
    Ok(stock)
}

/// Append `row` to the named worksheet, reporting progress on `output`
pub fn update_worksheet<D: Document, W: Write>(
    document: &D,
    name: &str,
    row: &[i64],
    output: &mut W,
) -> SandwichResult<()> {
    writeln!(output, "Updating {name} worksheet...\n")?;
    let mut sheet = document.worksheet(name)?;
    sheet.append_row(row)?;
    info!(worksheet = name, ?row, "row appended");
    writeln!(
        output,
        "{}",
        format!("{} worksheet updated successfully.\n", capitalize(name)).green()
    )?;
    Ok(())
}

/// The most recent row of a worksheet, parsed as integers
pub fn last_row<D: Document>(document: &D, name: &str) -> SandwichResult<Vec<i64>> {
    let rows = document.worksheet(name)?.get_all_values()?;
    let last = rows
        .last()
        .ok_or_else(|| SandwichError::EmptyWorksheet(name.to_string()))?;
    parse_cells(name, last)
}

/// The last `count` entries of each sales column, header excluded
pub fn last_sales_entries<D: Document>(
    document: &D,
    name: &str,
    count: usize,
) -> SandwichResult<Vec<Vec<i64>>> {
    let sheet = document.worksheet(name)?;
    (1..=ITEM_COUNT)
        .map(|col| {
            let column = sheet.col_values(col)?;
            parse_cells(name, recent_entries(&column, count))
        })
        .collect()
}

fn parse_cells(worksheet: &str, cells: &[String]) -> SandwichResult<Vec<i64>> {
    cells
        .iter()
        .map(|cell| {
            cell.trim()
                .parse::<i64>()
                .map_err(|_| SandwichError::InvalidCell {
                    worksheet: worksheet.to_string(),
                    value: cell.clone(),
                })
        })
        .collect()
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
