//! Print quotes for STL files.
//!
//! # Commands
//!
//! - `print-quote quote <FILE>` - Estimate material cost and print time
//! - `print-quote inspect <FILE>` - Show triangle count, size and volume
//!
//! Settings start from the storefront defaults (0.2 mm layers, 2 walls,
//! 3 top and bottom layers, 20 % infill, PLA). A JSON settings file using
//! the API field names replaces them, and individual flags override both.
//!
//! Logging goes to stderr. `-v` shows progress, `-vv` shows decoder
//! detail, and `RUST_LOG` takes precedence over both.

mod inspect;
mod quote;
mod upload;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;

/// Material cost and print time quotes for 3D printing
#[derive(Parser)]
#[command(name = "print-quote")]
#[command(about = "Quote FDM prints from STL files", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate material cost and print time for an STL file
    Quote {
        /// The STL file to quote
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        settings: quote::SettingsArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the measured geometry of an STL file
    Inspect {
        /// The STL file to inspect
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the metrics as JSON
        #[arg(long)]
        json: bool,
    },
}

const fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(level_for(cli.verbose))
        .parse_default_env()
        .init();

    match cli.command {
        Commands::Quote {
            file,
            settings,
            json,
        } => quote::run(&file, &settings, json),
        Commands::Inspect { file, json } => inspect::run(&file, json),
    }
}
