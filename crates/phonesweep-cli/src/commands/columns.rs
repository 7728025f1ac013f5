use crate::commands::{phone_column_override, print_json, Context};
use anyhow::Result;
use clap::Args;
use phonesweep_core::{phone_column_candidates, resolve_phone_column, CoreError, ProcessOptions};
use phonesweep_io::{load_table_from_path, CleanError};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ColumnsArgs {
    pub file: PathBuf,
    /// Report this column as the phone column; it must exist
    #[arg(long)]
    pub column: Option<String>,
}

#[derive(Debug, Serialize)]
struct ColumnsReport {
    rows: usize,
    columns: Vec<ColumnEntry>,
    phone_column: Option<String>,
}

#[derive(Debug, Serialize)]
struct ColumnEntry {
    name: String,
    candidate: bool,
}

pub fn list_columns(ctx: &Context<'_>, args: ColumnsArgs) -> Result<()> {
    let table = load_table_from_path(&args.file)?;
    let options = ProcessOptions {
        phone_column: phone_column_override(args.column, ctx.config)?,
    };
    // No match is a normal answer here; a missing override is not.
    let phone_column = match resolve_phone_column(&table, &options) {
        Ok(column) => Some(column.name.clone()),
        Err(CoreError::NoPhoneColumn { .. }) => None,
        Err(err) => return Err(CleanError::from(err).into()),
    };

    let names = table.column_names();
    let candidates = phone_column_candidates(&names);
    let report = ColumnsReport {
        rows: table.row_count(),
        columns: names
            .iter()
            .map(|name| ColumnEntry {
                name: name.to_string(),
                candidate: candidates.contains(name),
            })
            .collect(),
        phone_column,
    };

    if ctx.json {
        return print_json(&report);
    }

    for entry in &report.columns {
        let marker = if report.phone_column.as_deref() == Some(entry.name.as_str()) {
            "*"
        } else if entry.candidate {
            "+"
        } else {
            " "
        };
        println!("{} {}", marker, entry.name);
    }
    match &report.phone_column {
        Some(name) => println!("Phone column: {} ({} rows)", name, report.rows),
        None => println!("No phone column found ({} rows)", report.rows),
    }
    Ok(())
}
