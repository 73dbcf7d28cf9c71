mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::value::ValueArgs;

/// Bond valuation calculator
#[derive(Parser)]
#[command(
    name = "bondcalc",
    version,
    about = "Present-value bond pricing with cash-flow schedules",
    long_about = "Prices a fixed-coupon bond by discounting its coupon stream and \
                  face value at the yield to maturity, builds the full \
                  period-by-period cash-flow schedule, and reports whether the \
                  bond trades at par, a premium, or a discount."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Value a bond: price, schedule, and par/premium/discount classification
    Value(ValueArgs),
    /// Emit only the cash-flow schedule
    Schedule(ValueArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Value(args) => commands::value::run_value(args),
        Commands::Schedule(args) => commands::value::run_schedule(args),
        Commands::Version => {
            println!("bondcalc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
