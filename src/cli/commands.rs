use crate::config::Config;
use crate::core::{compute_surplus, parse_row, parse_sales_line, split_tokens};
use crate::error::SandwichResult;
use crate::market::{plan_next_market, run_market_cycle};
use crate::sheets::{Document, GoogleClient};
use colored::Colorize;
use std::io;
use tracing::info;

/// Format a row for display: `[40, 30, 20, 10, 0, -10]`
fn format_row(row: &[i64]) -> String {
    let cells: Vec<String> = row.iter().map(i64::to_string).collect();
    format!("[{}]", cells.join(", "))
}

/// Execute the run command: one market cycle against the shared spreadsheet.
/// With `plan_stock`, also append a stock plan for the next market.
pub fn run(config: &Config, plan_stock: bool) -> SandwichResult<()> {
    println!("{}", "🥪 Welcome to Love Sandwiches Data Automation".bold().green());
    println!("   Spreadsheet: {}", config.spreadsheet.bright_blue());
    println!("   Credentials: {}\n", config.credentials.display());

    let client = GoogleClient::from_credentials_file(&config.credentials)?;
    let document = client.open(&config.spreadsheet)?;
    info!(title = document.title(), "spreadsheet ready");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let report = run_market_cycle(&document, &config.worksheets, &mut input, &mut output)?;

    println!("{}", "✅ Market recorded:".bold().green());
    println!("   Sales:   {}", format_row(&report.sales));
    println!("   Surplus: {}", format_row(&report.surplus));

    if plan_stock {
        let stock = plan_next_market(&document, &config.worksheets, &mut output)?;
        println!(
            "\n{}",
            "Make the following numbers of sandwiches for next market:".bold()
        );
        println!("   {}", format_row(&stock).bright_yellow().bold());
    }

    Ok(())
}

/// Execute the validate command: check one line of sales data offline
pub fn validate(data: &str) -> SandwichResult<()> {
    match parse_sales_line(data) {
        Ok(row) => {
            println!("{} {}", "✅ Valid sales data:".green(), format_row(row.as_slice()));
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "❌ Invalid data:".red(), e);
            Err(e.into())
        }
    }
}

/// Execute the surplus command: `stock - sales` without touching the sheet
pub fn surplus(stock: &str, sales: &str) -> SandwichResult<()> {
    let stock = parse_row(&split_tokens(stock))?;
    let sales = parse_sales_line(sales)?;
    let surplus = compute_surplus(&stock, sales.as_slice())?;

    println!("{}", "📊 Surplus (stock - sales):".bold().green());
    println!("   Stock:   {}", format_row(&stock));
    println!("   Sales:   {}", format_row(sales.as_slice()));
    println!("   Surplus: {}", format_row(&surplus).bold());

    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
