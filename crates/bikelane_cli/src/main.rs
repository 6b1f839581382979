//! Bikelane CLI
//!
//! Command-line front end for the bike-lane segment registry.
//!
//! # Commands
//!
//! - `report` - Load segments from a JSON file and print the report
//! - `demo` - Run the built-in maintenance scenario and print the report
//! - `version` - Show version information

mod commands;
mod error;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::commands::OutputFormat;
use crate::error::CliResult;

/// Bike-lane segment registry tools.
#[derive(Parser)]
#[command(name = "bikelane")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load segments from a JSON file and print the report
    Report {
        /// JSON file with an array of `{ "name", "length", "status"? }`
        #[arg(short, long)]
        input: PathBuf,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Fixed number of decimals for lengths
        #[arg(short, long)]
        precision: Option<usize>,

        /// Report title
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Run the built-in maintenance scenario
    Demo {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show version information
    Version,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Report {
            input,
            format,
            precision,
            title,
        } => {
            let options = commands::report::ReportOptions {
                format: OutputFormat::parse(&format),
                precision,
                title,
            };
            commands::report::run(&input, &options)?;
        }
        Commands::Demo { format } => {
            commands::demo::run(OutputFormat::parse(&format))?;
        }
        Commands::Version => {
            println!("Bikelane CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("Bikelane Core v{}", bikelane_core::VERSION);
        }
    }

    Ok(())
}
