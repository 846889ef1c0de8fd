//! Mispricing CLI binary.
//!
//! Fetches a company's fundamentals, filings and headlines and prints the
//! four-pillar report.

mod cmd;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::{path::PathBuf, process};

use crate::output::Format;

#[derive(Parser)]
#[command(name = "mispricing")]
#[command(about = "Fundamental analysis for spotting mispriced stocks", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch live data for a ticker and print the report
    Analyze {
        /// Ticker symbol
        ticker: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,

        /// Annual statements to fetch per kind
        #[arg(short, long)]
        periods: Option<u32>,

        /// News headlines to fetch
        #[arg(short, long)]
        news: Option<u32>,

        /// Cost of capital used for the earnings power value
        #[arg(long)]
        cost_of_capital: Option<f64>,

        /// Save the fetched company data to this JSON file
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Analyze a saved company data JSON file
    Report {
        /// Path to the company data file
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,

        /// Cost of capital used for the earnings power value
        #[arg(long)]
        cost_of_capital: Option<f64>,
    },

    /// Print the psychological checklist
    Checklist,
}

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            ticker,
            format,
            periods,
            news,
            cost_of_capital,
            save,
        } => {
            let options = cmd::analyze::AnalyzeOptions {
                periods,
                news,
                cost_of_capital,
                save,
            };
            cmd::analyze::run_analyze(&ticker, format, options).await?;
        }
        Commands::Report {
            file,
            format,
            cost_of_capital,
        } => {
            cmd::report::run_report(&file, format, cost_of_capital)?;
        }
        Commands::Checklist => {
            cmd::checklist::show_checklist();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::parse_from([
            "mispricing", "analyze", "aapl", "--format", "json", "--periods", "5",
        ]);
        match cli.command {
            Commands::Analyze {
                ticker,
                format,
                periods,
                news,
                ..
            } => {
                assert_eq!(ticker, "aapl");
                assert_eq!(format, Format::Json);
                assert_eq!(periods, Some(5));
                assert_eq!(news, None);
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_parse_report_defaults_to_text() {
        let cli = Cli::parse_from(["mispricing", "report", "acme.json"]);
        assert!(matches!(
            cli.command,
            Commands::Report {
                format: Format::Text,
                ..
            }
        ));
    }
}
