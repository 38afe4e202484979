//! Dataid CLI - canonical serialization, content identifiers and value grouping.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{canonicalize, group, id, key};

#[derive(Parser)]
#[command(name = "dataid")]
#[command(about = "Deterministic data identity: canonical JSON, content IDs and value grouping")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the canonical form of input JSON
    Canonicalize {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
    },
    /// Derive the content identifier of input data
    Id {
        /// Input file (or stdin if not provided)
        input: Option<String>,
        /// Identifier method: uuid or sha256
        #[arg(long, default_value = "uuid")]
        method: String,
        /// Hash the raw input bytes instead of parsing JSON
        #[arg(long)]
        raw: bool,
    },
    /// Group co-occurring values from an array of [a, b] rows
    Group {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Missing-value tokens: JSON file path or inline JSON array
        #[arg(long)]
        empty_values: Option<String>,
    },
    /// Convert text to an identifier-style key
    Key {
        /// Text to convert
        text: String,
    },
}

/// `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Canonicalize { input } => canonicalize::run(input),
        Commands::Id { input, method, raw } => id::run(input, method, raw),
        Commands::Group {
            input,
            json,
            empty_values,
        } => group::run(input, json, empty_values),
        Commands::Key { text } => key::run(text),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
