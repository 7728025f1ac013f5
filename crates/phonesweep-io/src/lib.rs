pub mod clean;
mod delimited;
pub mod error;
pub mod read;
mod workbook;
pub mod write;

pub use clean::{clean_path, clean_table, clean_upload, CleanOptions, CleanOutcome};
pub use error::{CleanError, CleanErrorKind, ErrorReport, Result};
pub use read::{load_table, load_table_from_path, InputFormat, ParseStrategy};
pub use write::{write_artifact, OutputArtifact};
