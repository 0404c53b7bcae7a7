use crate::{
    storage::{cursor::Cursor, table::Table},
    types::{error::DatabaseError, row::Row},
};

pub trait Scanner {
    fn scan(&mut self) -> Result<Option<Row>, DatabaseError>;
    fn scan_batch(&mut self, batch_size: usize) -> Result<Vec<Row>, DatabaseError>;
    fn reset(&mut self) -> Result<(), DatabaseError>;
}

/// Forward scan over the root leaf of a table, one row per call.
pub struct TableScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> TableScanner<'a> {
    pub fn new(table: &'a mut Table) -> Result<Self, DatabaseError> {
        Ok(Self {
            cursor: Cursor::table_start(table)?,
        })
    }
}

impl Scanner for TableScanner<'_> {
    fn scan(&mut self) -> Result<Option<Row>, DatabaseError> {
        if self.cursor.end_of_table {
            return Ok(None);
        }
        let row = self.cursor.row()?;
        self.cursor.advance()?;
        Ok(Some(row))
    }

    fn scan_batch(&mut self, batch_size: usize) -> Result<Vec<Row>, DatabaseError> {
        let mut rows = Vec::with_capacity(batch_size);
        while rows.len() < batch_size {
            match self.scan()? {
                Some(row) => rows.push(row),
                None => break,
            }
        }
        Ok(rows)
    }

    fn reset(&mut self) -> Result<(), DatabaseError> {
        self.cursor.rewind()
    }
}

/// Adapts a `Scanner` to `Iterator`. The iterator is fused: once the
/// scanner runs dry or reports an error, `next` keeps returning `None`.
pub struct ScanIterator<S: Scanner> {
    scanner: S,
    finished: bool,
}

impl<S: Scanner> ScanIterator<S> {
    pub fn new(scanner: S) -> Self {
        Self {
            scanner,
            finished: false,
        }
    }
}

impl<S: Scanner> Iterator for ScanIterator<S> {
    type Item = Result<Row, DatabaseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let item = self.scanner.scan().transpose();
        self.finished = !matches!(item, Some(Ok(_)));
        item
    }
}

impl<S: Scanner> std::iter::FusedIterator for ScanIterator<S> {}
