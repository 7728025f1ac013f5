use phonesweep_core::CoreError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CleanError {
    #[error("no file supplied: {0}")]
    NoFile(String),
    #[error("unsupported file type: {0} (expected .xlsx, .xls, or .csv)")]
    UnsupportedExtension(String),
    #[error("could not read {file} as an Excel or CSV file ({})", .attempts.join("; "))]
    Unparseable { file: String, attempts: Vec<String> },
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("error processing file: {0}")]
    Processing(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CleanError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CleanErrorKind {
    NoFile,
    UnsupportedExtension,
    UnparseableFile,
    NoPhoneColumn,
    ProcessingError,
}

impl CleanError {
    pub fn kind(&self) -> CleanErrorKind {
        match self {
            CleanError::NoFile(_) => CleanErrorKind::NoFile,
            CleanError::UnsupportedExtension(_) => CleanErrorKind::UnsupportedExtension,
            CleanError::Unparseable { .. } | CleanError::Io(_) => CleanErrorKind::UnparseableFile,
            CleanError::Core(CoreError::NoPhoneColumn { .. })
            | CleanError::Core(CoreError::UnknownColumn { .. }) => CleanErrorKind::NoPhoneColumn,
            CleanError::Core(_) | CleanError::Processing(_) => CleanErrorKind::ProcessingError,
        }
    }

    pub fn columns(&self) -> Option<&[String]> {
        match self {
            CleanError::Core(err) => err.columns(),
            _ => None,
        }
    }
}

/// Serializable form of a [`CleanError`] for structured responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub error: String,
    pub kind: CleanErrorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<String>>,
}

impl From<&CleanError> for ErrorReport {
    fn from(err: &CleanError) -> Self {
        Self {
            error: err.to_string(),
            kind: err.kind(),
            columns: err.columns().map(<[String]>::to_vec),
        }
    }
}
