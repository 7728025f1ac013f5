use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error(
        "no phone column found; expected a column name containing \"phone\", \"mobile\", \"number\", or \"contact\" (columns: {})",
        .columns.join(", ")
    )]
    NoPhoneColumn { columns: Vec<String> },
    #[error("column not found: {name}")]
    UnknownColumn { name: String, columns: Vec<String> },
    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),
    #[error("column {column} has {found} rows, expected {expected}")]
    RaggedColumn {
        column: String,
        expected: usize,
        found: usize,
    },
    #[error("row {row} has {found} cells, expected at most {expected}")]
    RowTooLong {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid phone number: {0}")]
    InvalidPhoneNumber(String),
}

impl CoreError {
    pub fn columns(&self) -> Option<&[String]> {
        match self {
            CoreError::NoPhoneColumn { columns } | CoreError::UnknownColumn { columns, .. } => {
                Some(columns)
            }
            _ => None,
        }
    }
}
