use crate::commands::print_json;
use anyhow::Error;
use phonesweep_config::ConfigError;
use phonesweep_core::CoreError;
use phonesweep_io::{CleanError, CleanErrorKind, ErrorReport};
use serde::Serialize;
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_NOT_FOUND: u8 = 2;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub fn invalid_input(message: impl Into<String>) -> Error {
    CliError::InvalidInput(message.into()).into()
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
enum CliErrorKind {
    InvalidInput,
    Config,
    Failure,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum ReportKind {
    Clean(CleanErrorKind),
    Cli(CliErrorKind),
}

#[derive(Debug, Serialize)]
struct JsonErrorReport {
    error: String,
    kind: ReportKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    columns: Option<Vec<String>>,
}

impl JsonErrorReport {
    fn from_error(err: &Error) -> Self {
        let error = format!("{:#}", err);
        for cause in err.chain() {
            if let Some(clean_err) = cause.downcast_ref::<CleanError>() {
                let report = ErrorReport::from(clean_err);
                return Self {
                    error,
                    kind: ReportKind::Clean(report.kind),
                    columns: report.columns,
                };
            }
            let kind = if cause.is::<CliError>() || cause.is::<CoreError>() {
                Some(CliErrorKind::InvalidInput)
            } else if cause.is::<ConfigError>() {
                Some(CliErrorKind::Config)
            } else {
                None
            };
            if let Some(kind) = kind {
                return Self {
                    error,
                    kind: ReportKind::Cli(kind),
                    columns: None,
                };
            }
        }
        Self {
            error,
            kind: ReportKind::Cli(CliErrorKind::Failure),
            columns: None,
        }
    }
}

/// With `--json` the failure goes to stdout as `{ error, kind, columns? }`.
pub fn report_error(err: &Error, verbose: bool, json: bool) {
    if json && print_json(&JsonErrorReport::from_error(err)).is_ok() {
        return;
    }

    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return ExitCode::from(match cli_err {
                CliError::InvalidInput(_) => EXIT_INVALID_INPUT,
            });
        }
        if let Some(clean_err) = cause.downcast_ref::<CleanError>() {
            return ExitCode::from(clean_exit_code(clean_err));
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return ExitCode::from(config_exit_code(config_err));
        }
        if cause.is::<CoreError>() {
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
    }
    ExitCode::from(EXIT_FAILURE)
}

fn clean_exit_code(err: &CleanError) -> u8 {
    match err.kind() {
        CleanErrorKind::NoFile => EXIT_NOT_FOUND,
        CleanErrorKind::UnsupportedExtension
        | CleanErrorKind::UnparseableFile
        | CleanErrorKind::NoPhoneColumn => EXIT_INVALID_INPUT,
        CleanErrorKind::ProcessingError => EXIT_FAILURE,
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InvalidPhoneColumn
        | ConfigError::InvalidOutputFileName(..)
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}
