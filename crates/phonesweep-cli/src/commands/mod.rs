use crate::error::invalid_input;
use anyhow::Result;
use phonesweep_config::AppConfig;
use serde::Serialize;
use std::io::{self, Write};

pub mod clean;
pub mod columns;
pub mod completions;
pub mod normalize;

pub struct Context<'a> {
    pub json: bool,
    pub config: &'a AppConfig,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

/// `--column` wins over `input.phone_column`; both are trimmed the same way.
pub fn phone_column_override(flag: Option<String>, config: &AppConfig) -> Result<Option<String>> {
    let Some(flag) = flag else {
        return Ok(config.input.phone_column.clone());
    };
    let column = flag.trim();
    if column.is_empty() {
        return Err(invalid_input("--column must not be empty"));
    }
    Ok(Some(column.to_string()))
}
