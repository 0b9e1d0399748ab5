//! `weekgrid` CLI -- expand, conflict-check, and classify weekly time blocks
//! from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Expand a block into day-scoped intervals (stdin → stdout)
//! echo '{"id":"b1","day":1,"start":"22:00","end":"02:00"}' | weekgrid expand
//!
//! # Check a candidate against existing blocks
//! weekgrid conflicts -i request.json
//!
//! # Classify the current instant against a schedule's blocks
//! weekgrid classify -i blocks.json
//!
//! # Classify a specific instant
//! weekgrid classify -i blocks.json --now 2026-08-03T09:00:00
//! ```

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::io::{self, Read};
use weekgrid::{
    classify, expand_block, find_conflicts, validate_block, Block, Classification,
    ConflictingBlock,
};

#[derive(Parser)]
#[command(
    name = "weekgrid",
    version,
    about = "Weekly time-block engine: expansion, overlap detection, classification"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand a block into its canonical day-scoped intervals
    Expand {
        /// Input file with one block as JSON (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// List existing blocks that overlap a candidate block
    Conflicts {
        /// Input file with {"candidate": .., "existing": [..]} (stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Determine the previous/current/next block for an instant
    Classify {
        /// Input file with a JSON array of blocks (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Instant to classify, e.g. 2026-08-03T09:00:00 (defaults to now)
        #[arg(long)]
        now: Option<String>,
    },
}

/// Request body for the `conflicts` subcommand.
#[derive(Deserialize)]
struct ConflictRequest {
    candidate: Block,
    #[serde(default)]
    existing: Vec<Block>,
}

/// Response body for the `conflicts` subcommand.
#[derive(Serialize)]
struct ConflictResponse {
    conflicts: Vec<ConflictingBlock>,
}

/// Response body for the `classify` subcommand: the classification plus the
/// resolved instant echoed back.
#[derive(Serialize)]
struct ClassifyResponse {
    #[serde(flatten)]
    classification: Classification,
    now: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Expand { input, output } => {
            let json = read_input(input.as_deref())?;
            let block: Block =
                serde_json::from_str(&json).context("Failed to parse block JSON")?;

            let intervals = expand_block(&block);
            write_output(output.as_deref(), &serde_json::to_string_pretty(&intervals)?)?;
        }
        Commands::Conflicts { input, output } => {
            let json = read_input(input.as_deref())?;
            let request: ConflictRequest =
                serde_json::from_str(&json).context("Failed to parse conflict request JSON")?;

            // Reject malformed candidates outright instead of guessing
            // whether they conflict with everything or nothing.
            validate_block(&request.candidate).context("Invalid candidate block")?;

            let conflicts = find_conflicts(&request.candidate, &request.existing);
            let response = ConflictResponse {
                conflicts: conflicts.iter().map(ConflictingBlock::from).collect(),
            };
            write_output(output.as_deref(), &serde_json::to_string_pretty(&response)?)?;
        }
        Commands::Classify { input, output, now } => {
            let json = read_input(input.as_deref())?;
            let blocks: Vec<Block> =
                serde_json::from_str(&json).context("Failed to parse blocks JSON")?;

            let instant = resolve_now(now.as_deref())?;
            let response = ClassifyResponse {
                classification: classify(&blocks, instant),
                now: instant.format("%Y-%m-%dT%H:%M:%S").to_string(),
            };
            write_output(output.as_deref(), &serde_json::to_string_pretty(&response)?)?;
        }
    }

    Ok(())
}

/// Parse the `--now` override, or fall back to the local wall-clock time.
///
/// Accepts `YYYY-MM-DDTHH:MM:SS` and the seconds-less `YYYY-MM-DDTHH:MM`.
fn resolve_now(arg: Option<&str>) -> Result<NaiveDateTime> {
    match arg {
        Some(raw) => NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
            .with_context(|| format!("Invalid --now value: {}", raw)),
        None => Ok(Local::now().naive_local()),
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
