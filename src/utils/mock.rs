use std::path::PathBuf;

use tempfile::TempDir;

use crate::{
    storage::table::Table,
    types::{error::Result, row::Row},
};

/// A database file inside its own temporary directory. The directory and
/// everything in it are removed on drop.
pub struct TempDatabase {
    pub path: PathBuf,
    _dir: TempDir,
}

impl TempDatabase {
    pub fn new() -> Self {
        Self::with_prefix("stbstore_test")
    }

    pub fn with_prefix(prefix: &str) -> Self {
        let dir = tempfile::Builder::new()
            .prefix(prefix)
            .tempdir()
            .expect("Failed to create temp dir");
        Self {
            path: dir.path().join(format!("{}.db", prefix)),
            _dir: dir,
        }
    }

    pub fn open_table(&self) -> Result<Table> {
        Table::open(&self.path)
    }
}

impl Default for TempDatabase {
    fn default() -> Self {
        Self::new()
    }
}

/// A valid row whose key sorts by `i` when `i` stays below 10.
pub fn sample_row(i: usize) -> Row {
    Row::new(
        &format!("stb{}", i),
        &format!("title{}", i),
        &format!("provider{}", i),
        &format!("date{}", i),
        i as f32,
        &format!("{}", i % 10_000),
    )
    .expect("sample row fits every column")
}
