//! Interactive sales entry

use std::io::{self, BufRead, Write};

use colored::Colorize;
use tracing::debug;

use crate::core::parse_sales_line;
use crate::error::SandwichResult;
use crate::types::SalesRow;

/// Prompt until the user enters six comma-separated integers.
///
/// Invalid lines are reported on `output` and the prompt repeats with no
/// attempt limit. Running out of input before a valid line is an
/// `UnexpectedEof` I/O error.
pub fn collect_sales<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> SandwichResult<SalesRow> {
    let mut attempts = 0usize;
    loop {
        attempts += 1;
        writeln!(output, "Please enter sales data from the last market.")?;
        writeln!(output, "Data should be six numbers, separated by commas.")?;
        writeln!(output, "Example: 10,20,30,40,50,60\n")?;
        write!(output, "Enter your data here: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before valid sales data was entered",
            )
            .into());
        }
        let line = line.trim_end_matches(|c: char| c == '\n' || c == '\r');

        match parse_sales_line(line) {
            Ok(row) => {
                debug!(attempts, "sales data accepted");
                writeln!(output, "{}", "Data is valid!".green())?;
                return Ok(row);
            }
            Err(e) => {
                debug!(attempts, error = %e, "sales data rejected");
                writeln!(
                    output,
                    "{}",
                    format!("Invalid data: {e}, please try again.\n").red()
                )?;
            }
        }
    }
}
