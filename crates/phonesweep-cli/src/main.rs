mod commands;
mod error;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{clean, columns, completions, normalize, Context};
use crate::error::{exit_code_for, report_error};
use phonesweep_config as config;

#[derive(Debug, Parser)]
#[command(
    name = "phonesweep",
    version,
    about = "Clean, validate, and deduplicate phone numbers in spreadsheet and CSV files"
)]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Normalize and deduplicate the phone column of a file
    Clean(clean::CleanArgs),
    /// List the columns of a file and the detected phone column
    Columns(columns::ColumnsArgs),
    /// Normalize individual values
    Normalize(normalize::NormalizeArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    let json = cli.json;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose, json);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    match command {
        Command::Completions(args) => completions::emit(args),
        Command::Normalize(args) => normalize::normalize(json, args),
        command => {
            let app_config = config::load(config_path.clone()).context("load config")?;
            if verbose {
                log_config_source(config_path);
            }
            let ctx = Context {
                json,
                config: &app_config,
            };
            match command {
                Command::Clean(args) => clean::clean(&ctx, args),
                Command::Columns(args) => columns::list_columns(&ctx, args),
                Command::Normalize(_) | Command::Completions(_) => {
                    unreachable!("handled before config load")
                }
            }
        }
    }
}

fn log_config_source(config_path: Option<PathBuf>) {
    match config::resolve_config_path(config_path) {
        Ok(path) if path.exists() => debug!(path = %path.display(), "using config file"),
        Ok(path) => debug!(path = %path.display(), "no config file, defaults apply"),
        Err(err) => debug!(error = %err, "no config location"),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
