use crate::error::Result;
use crate::read::{load_table, load_table_from_path};
use crate::write::{write_artifact, OutputArtifact};
use phonesweep_core::{process_table, InputTable, OutputFormat, ProcessOptions, ProcessingResult};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanOptions {
    pub phone_column: Option<String>,
    pub format: OutputFormat,
    pub file_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CleanOutcome {
    pub result: ProcessingResult,
    pub artifact: OutputArtifact,
}

pub fn clean_upload(file_name: &str, bytes: &[u8], options: &CleanOptions) -> Result<CleanOutcome> {
    let table = load_table(file_name, bytes)?;
    clean_table(&table, options)
}

pub fn clean_path(path: &Path, options: &CleanOptions) -> Result<CleanOutcome> {
    let table = load_table_from_path(path)?;
    clean_table(&table, options)
}

pub fn clean_table(table: &InputTable, options: &CleanOptions) -> Result<CleanOutcome> {
    let process_options = ProcessOptions {
        phone_column: options.phone_column.clone(),
    };
    let result = process_table(table, &process_options)?;
    debug!(
        phone_column = %result.phone_column,
        original = result.original_count,
        valid = result.valid_count,
        unique = result.unique_count,
        "phone numbers cleaned"
    );

    let artifact = write_artifact(
        result.phone_numbers(),
        options.format,
        options.file_name.as_deref(),
    )?;
    Ok(CleanOutcome { result, artifact })
}
