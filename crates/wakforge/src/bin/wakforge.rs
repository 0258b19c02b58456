//! Command-line front end.
//!
//! ```text
//! wakforge [--config <file>] [--catalog <file>] encode <build.json | ->
//! wakforge [--config <file>] [--catalog <file>] decode <code | ->
//! wakforge [--config <file>] inspect <code | ->
//! ```
//!
//! `-` reads the argument from stdin. Results go to stdout, diagnostics
//! to stderr.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use wakforge::prelude::*;
use wakforge::{build_from_json, logging, values_to_json};

#[derive(Parser, Debug)]
#[command(name = "wakforge", version, about = "Shareable Wakfu build codes")]
struct Cli {
    /// Planner config file (JSON).
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Catalog file, overriding the config and `WAKFORGE_CATALOG`.
    #[arg(long, global = true, value_name = "FILE")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Command {
    /// Print the build code of a build JSON file.
    Encode {
        /// Build JSON file, or `-` for stdin.
        build: String,
    },
    /// Decode a build code against the catalog and print it as JSON.
    Decode {
        /// Build code, or `-` for stdin.
        code: String,
    },
    /// Print the raw value sequence of a build code.
    Inspect {
        /// Build code, or `-` for stdin.
        code: String,
    },
}

/// The argument itself, or stdin when it is `-`.
fn read_input(arg: &str) -> io::Result<String> {
    if arg != "-" {
        return Ok(arg.to_string());
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn run(command: Command, config: PlannerConfig) -> Result<String, Box<dyn std::error::Error>> {
    tracing::debug!(?command, catalog = ?config.catalog_path, "running");
    match command {
        Command::Encode { build } => {
            // a file path, or the JSON itself via stdin
            let json = match build.as_str() {
                "-" => read_input("-")?,
                path => fs::read_to_string(path)?,
            };
            let build = build_from_json(&json)?;
            Ok(BuildCodec::new(config.codec).encode(&build))
        }
        Command::Decode { code } => {
            let code = read_input(&code)?;
            let planner = Planner::from_config(&config)?;
            let build = planner.try_decode(code.trim())?;
            Ok(serde_json::to_string_pretty(&build)?)
        }
        Command::Inspect { code } => {
            let code = read_input(&code)?;
            let values = BuildCodec::new(config.codec).unpack(code.trim())?;
            Ok(values_to_json(&values).to_string())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match PlannerConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(path) = cli.catalog {
        config.catalog_path = Some(path);
    }
    logging::init(&config.log_filter);

    match run(cli.command, config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
