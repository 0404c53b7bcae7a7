use std::path::PathBuf;

use thiserror::Error;

use crate::types::PageNum;

/// Conditions that abort the running session. Callers are expected to
/// propagate these up to the process boundary instead of retrying.
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Unable to open file '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Db file is not a whole number of pages. Corrupt file. (length: {length} bytes)")]
    CorruptFile { length: u64 },

    #[error("Tried to fetch page number out of bounds. {page_num} >= {max}")]
    PageOutOfBounds { page_num: PageNum, max: PageNum },

    #[error("Tried to flush null page (page_num: {page_num})")]
    FlushNonResident { page_num: PageNum },

    #[error("Invalid flush size: at most {expected} bytes, got {actual} bytes")]
    InvalidFlushSize { expected: usize, actual: usize },

    #[error("Need to implement splitting a leaf node (page_num: {page_num})")]
    LeafFull { page_num: PageNum },

    #[error("Cell {cell_num} out of range (cell count: {cell_count})")]
    CellOutOfRange { cell_num: u32, cell_count: u32 },

    #[error("Invalid node type: {0}")]
    InvalidNodeType(u32),

    #[error("Serialization/deserialization error: {details}")]
    SerializationError { details: String },
}

pub type Result<T> = std::result::Result<T, DatabaseError>;
