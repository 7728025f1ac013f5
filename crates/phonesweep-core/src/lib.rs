pub mod domain;
pub mod dto;
pub mod error;
pub mod pipeline;
pub mod table;

pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use pipeline::{
    dedup_first_seen, normalize_cells, process_table, resolve_phone_column, ProcessOptions,
};
pub use table::{Column, InputTable};
