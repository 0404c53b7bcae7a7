use log::debug;

use crate::{
    executor::ExecuteResult,
    storage::table::Table,
    types::{error::DatabaseError, row::Row},
};

/// Trait for inserting rows into a table
pub trait Inserter {
    /// Insert a single row
    fn insert(&mut self, row: &Row) -> Result<ExecuteResult, DatabaseError>;

    /// Insert rows in order, stopping at the first one that does not fit
    fn insert_batch(&mut self, rows: &[Row]) -> Result<ExecuteResult, DatabaseError>;

    /// Rows accepted so far by this inserter
    fn inserted(&self) -> usize;
}

pub struct TableInserter<'a> {
    table: &'a mut Table,
    inserted: usize,
}

impl<'a> TableInserter<'a> {
    pub fn new(table: &'a mut Table) -> Self {
        Self { table, inserted: 0 }
    }
}

impl Inserter for TableInserter<'_> {
    fn insert(&mut self, row: &Row) -> Result<ExecuteResult, DatabaseError> {
        let result = self.table.insert(row)?;
        if result == ExecuteResult::Success {
            self.inserted += 1;
        }
        Ok(result)
    }

    fn insert_batch(&mut self, rows: &[Row]) -> Result<ExecuteResult, DatabaseError> {
        for (index, row) in rows.iter().enumerate() {
            if self.insert(row)? == ExecuteResult::TableFull {
                debug!("Batch stopped at row {} of {}", index, rows.len());
                return Ok(ExecuteResult::TableFull);
            }
        }
        Ok(ExecuteResult::Success)
    }

    fn inserted(&self) -> usize {
        self.inserted
    }
}
