use crate::error::{CleanError, Result};
use crate::{delimited, workbook};
use phonesweep_core::InputTable;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Xlsx,
    Xls,
    Csv,
}

impl InputFormat {
    pub fn from_file_name(file_name: &str) -> Result<Self> {
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some("xlsx") => Ok(InputFormat::Xlsx),
            Some("xls") => Ok(InputFormat::Xls),
            Some("csv") => Ok(InputFormat::Csv),
            _ => Err(CleanError::UnsupportedExtension(file_name.to_string())),
        }
    }

    /// Readers to try, in order. Workbook readers come first whatever the
    /// extension says; the CSV reader only runs for `.csv` files.
    pub fn strategies(self) -> &'static [ParseStrategy] {
        match self {
            InputFormat::Xlsx | InputFormat::Xls => {
                &[ParseStrategy::XlsxWorkbook, ParseStrategy::XlsWorkbook]
            }
            InputFormat::Csv => &[
                ParseStrategy::XlsxWorkbook,
                ParseStrategy::XlsWorkbook,
                ParseStrategy::Csv,
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStrategy {
    XlsxWorkbook,
    XlsWorkbook,
    Csv,
}

impl ParseStrategy {
    pub fn label(self) -> &'static str {
        match self {
            ParseStrategy::XlsxWorkbook => "xlsx",
            ParseStrategy::XlsWorkbook => "xls",
            ParseStrategy::Csv => "csv",
        }
    }

    fn parse(self, bytes: &[u8]) -> std::result::Result<InputTable, String> {
        match self {
            ParseStrategy::XlsxWorkbook => workbook::read_xlsx(bytes),
            ParseStrategy::XlsWorkbook => workbook::read_xls(bytes),
            ParseStrategy::Csv => delimited::read_csv(bytes),
        }
    }
}

/// Loads an uploaded file given its original name and contents.
pub fn load_table(file_name: &str, bytes: &[u8]) -> Result<InputTable> {
    if file_name.trim().is_empty() {
        return Err(CleanError::NoFile("upload has no file name".to_string()));
    }
    let format = InputFormat::from_file_name(file_name)?;

    let mut attempts = Vec::new();
    for strategy in format.strategies() {
        match strategy.parse(bytes) {
            Ok(table) => {
                debug!(
                    file = file_name,
                    strategy = strategy.label(),
                    rows = table.row_count(),
                    columns = table.columns().len(),
                    "table loaded"
                );
                return Ok(table);
            }
            Err(reason) => {
                debug!(
                    file = file_name,
                    strategy = strategy.label(),
                    reason = %reason,
                    "parse attempt failed"
                );
                attempts.push(format!("{}: {}", strategy.label(), reason));
            }
        }
    }

    Err(CleanError::Unparseable {
        file: file_name.to_string(),
        attempts,
    })
}

pub fn load_table_from_path(path: &Path) -> Result<InputTable> {
    if !path.is_file() {
        return Err(CleanError::NoFile(path.display().to_string()));
    }
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    InputFormat::from_file_name(&file_name)?;

    let bytes = fs::read(path)?;
    load_table(&file_name, &bytes)
}
