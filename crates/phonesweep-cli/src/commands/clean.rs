use crate::commands::{phone_column_override, print_json, Context};
use crate::error::invalid_input;
use anyhow::{Context as _, Result};
use clap::{Args, ValueEnum};
use phonesweep_core::{OutputFormat, ProcessingResult};
use phonesweep_io::{clean_path, CleanOptions, OutputArtifact};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Args)]
pub struct CleanArgs {
    /// Spreadsheet or CSV file (.xlsx, .xls, .csv)
    pub file: PathBuf,
    /// Where to write the cleaned file
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Read this column instead of detecting the phone column
    #[arg(long)]
    pub column: Option<String>,
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    Xlsx,
    Csv,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Xlsx => OutputFormat::Xlsx,
            FormatArg::Csv => OutputFormat::Csv,
        }
    }
}

#[derive(Debug, Serialize)]
struct CleanReport<'a> {
    success: bool,
    #[serde(flatten)]
    summary: &'a ProcessingResult,
    output: String,
}

pub fn clean(ctx: &Context<'_>, args: CleanArgs) -> Result<()> {
    let format = resolve_format(ctx, args.format, args.out.as_deref())?;
    let out = match args.out {
        Some(path) => path,
        None => PathBuf::from(default_file_name(ctx, format)),
    };
    let options = CleanOptions {
        phone_column: phone_column_override(args.column, ctx.config)?,
        format,
        file_name: out
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string),
    };

    let outcome = clean_path(&args.file, &options)?;
    write_artifact_file(&out, &outcome.artifact)?;
    debug!(
        path = %out.display(),
        bytes = outcome.artifact.bytes.len(),
        "cleaned file written"
    );

    let result = &outcome.result;
    if ctx.json {
        return print_json(&CleanReport {
            success: true,
            summary: result,
            output: out.display().to_string(),
        });
    }

    println!(
        "Cleaned column \"{}\": {} rows, {} valid, {} unique, {} duplicates removed",
        result.phone_column,
        result.original_count,
        result.valid_count,
        result.unique_count,
        result.duplicates_removed
    );
    println!(
        "Wrote {} phone numbers to {}",
        result.unique_count,
        out.display()
    );
    Ok(())
}

fn resolve_format(
    ctx: &Context<'_>,
    flag: Option<FormatArg>,
    out: Option<&Path>,
) -> Result<OutputFormat> {
    let from_out = out.and_then(format_for_path);
    match (flag.map(OutputFormat::from), from_out) {
        (Some(flag), Some(ext)) if flag != ext => Err(invalid_input(format!(
            "--out file extension .{} does not match --format {}",
            ext.extension(),
            flag.extension()
        ))),
        (Some(flag), _) => Ok(flag),
        (None, Some(ext)) => Ok(ext),
        (None, None) => Ok(ctx.config.output.format),
    }
}

fn format_for_path(path: &Path) -> Option<OutputFormat> {
    let name = path.file_name()?.to_str()?;
    [OutputFormat::Xlsx, OutputFormat::Csv]
        .into_iter()
        .find(|format| format.matches_file_name(name))
}

fn default_file_name(ctx: &Context<'_>, format: OutputFormat) -> String {
    let output = &ctx.config.output;
    if output.format == format {
        output.resolved_file_name()
    } else {
        format.default_file_name()
    }
}

fn write_artifact_file(path: &Path, artifact: &OutputArtifact) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create output directory {}", parent.display()))?;
        }
    }
    fs::write(path, &artifact.bytes)
        .with_context(|| format!("write output file {}", path.display()))
}
