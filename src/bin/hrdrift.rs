//! hrdrift CLI
//!
//! Commands:
//! - validate: Check an activity JSON file against the expected shape

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use hrdrift::schema::parse_activity_document;
use hrdrift::HRDRIFT_VERSION;

/// hrdrift - ingestion and validation pipeline for heart-rate drift analysis
#[derive(Parser)]
#[command(name = "hrdrift")]
#[command(version = HRDRIFT_VERSION)]
#[command(about = "Validate heart-rate activity documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check an activity JSON file against the expected shape
    Validate {
        /// Input file path
        input: PathBuf,

        /// Print the validated series as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct CliError {
    error: String,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError { error: message })
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Validate { input, json } => {
            let text = fs::read_to_string(&input)
                .map_err(|e| format!("failed to read {}: {}", input.display(), e))?;
            let series = parse_activity_document(&text).map_err(|e| e.to_string())?;

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&series).map_err(|e| e.to_string())?
                );
            } else {
                println!(
                    "valid activity document: {} heartrate samples, {} time samples",
                    series.heartrate.len(),
                    series.time.len()
                );
                if !series.is_aligned() {
                    eprintln!("warning: heartrate/time sample counts differ");
                }
            }
            Ok(())
        }
    }
}
