use clap::{Parser, Subcommand};
use love_sandwiches::cli;
use love_sandwiches::config::Config;
use love_sandwiches::logging;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "love-sandwiches")]
#[command(about = "Record market-day sandwich sales and plan the next market's stock.")]
#[command(long_about = "Love Sandwiches - market-day data automation

Enter the sales from the last market as six comma-separated numbers, one per
sandwich type. The figures are appended to the 'sales' worksheet and the
surplus (stock - sales) to 'surplus'. With --plan-stock, a stock plan for the
next market (average of the last 5 markets + 10%) is appended to 'stock'.

COMMANDS:
  run       - Interactive market cycle against the Google Sheet
  validate  - Check a line of sales data without touching the sheet
  surplus   - Compute stock - sales offline

EXAMPLES:
  love-sandwiches run
  love-sandwiches run --creds ~/keys/market.json --spreadsheet love_sandwiches
  love-sandwiches run --plan-stock
  love-sandwiches validate 10,20,30,40,50,60
  love-sandwiches surplus --stock 50,50,50,50,50,50 --sales 10,20,30,40,50,60")]
#[command(version)]
struct Cli {
    /// Show debug logs on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Run one market cycle.

Prompts for the sales figures until they are valid, then appends sales and
surplus rows to the spreadsheet. --plan-stock also appends a next-market
stock row. Rows already written stay in the sheet if a later step fails.

CONFIG FILE (optional YAML):
  credentials: creds.json
  spreadsheet: love_sandwiches
  worksheets:
    sales: sales
    surplus: surplus
    stock: stock")]
    /// Record a market's sales in the spreadsheet
    Run {
        /// Service-account credential file (default: creds.json)
        #[arg(long, env = "LOVE_SANDWICHES_CREDS")]
        creds: Option<PathBuf>,

        /// Spreadsheet name in Google Drive (default: love_sandwiches)
        #[arg(long, env = "LOVE_SANDWICHES_SPREADSHEET")]
        spreadsheet: Option<String>,

        /// YAML config file
        #[arg(short, long, env = "LOVE_SANDWICHES_CONFIG")]
        config: Option<PathBuf>,

        /// Also append a stock plan for the next market to the stock worksheet
        #[arg(long)]
        plan_stock: bool,
    },

    /// Validate a line of sales data
    Validate {
        /// Six comma-separated integers, e.g. 10,20,30,40,50,60
        #[arg(allow_hyphen_values = true)]
        data: String,
    },

    /// Compute surplus (stock - sales) offline
    Surplus {
        /// Stock row, six comma-separated integers
        #[arg(long, allow_hyphen_values = true)]
        stock: String,

        /// Sales row, six comma-separated integers
        #[arg(long, allow_hyphen_values = true)]
        sales: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Run {
            creds,
            spreadsheet,
            config,
            plan_stock,
        } => {
            let config = Config::resolve(config.as_deref(), creds, spreadsheet)?;
            cli::run(&config, plan_stock)?;
        }

        Commands::Validate { data } => cli::validate(&data)?,

        Commands::Surplus { stock, sales } => cli::surplus(&stock, &sales)?,
    }

    Ok(())
}
