use stbstore::{
    executor::scan::{ScanIterator, Scanner, TableScanner},
    types::{error::DatabaseError, row::Row},
    utils::mock::{TempDatabase, sample_row},
};

#[test]
fn test_scan_row_by_row() {
    let temp_db = TempDatabase::with_prefix("scan_rows");
    let mut table = temp_db.open_table().unwrap();
    for i in 0..3 {
        table.insert(&sample_row(i)).unwrap();
    }

    let mut scanner = TableScanner::new(&mut table).unwrap();
    for i in 0..3 {
        assert_eq!(scanner.scan().unwrap(), Some(sample_row(i)));
    }
    assert_eq!(scanner.scan().unwrap(), None);
    assert_eq!(scanner.scan().unwrap(), None);
}

#[test]
fn test_scan_batch_and_reset() {
    let temp_db = TempDatabase::with_prefix("scan_batch");
    let mut table = temp_db.open_table().unwrap();
    for i in 0..4 {
        table.insert(&sample_row(i)).unwrap();
    }

    let mut scanner = TableScanner::new(&mut table).unwrap();
    assert_eq!(scanner.scan_batch(3).unwrap().len(), 3);
    assert_eq!(scanner.scan_batch(3).unwrap(), vec![sample_row(3)]);
    assert!(scanner.scan_batch(3).unwrap().is_empty());

    scanner.reset().unwrap();
    assert_eq!(scanner.scan().unwrap(), Some(sample_row(0)));
}

#[test]
fn test_scan_iterator() {
    let temp_db = TempDatabase::with_prefix("scan_iter");
    let mut table = temp_db.open_table().unwrap();
    table.insert(&sample_row(7)).unwrap();
    table.insert(&sample_row(8)).unwrap();

    let rows: Vec<Row> = ScanIterator::new(TableScanner::new(&mut table).unwrap())
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(rows, vec![sample_row(7), sample_row(8)]);
}

#[test]
fn test_scan_empty_table() {
    let temp_db = TempDatabase::with_prefix("scan_empty");
    let mut table = temp_db.open_table().unwrap();
    let mut scanner = TableScanner::new(&mut table).unwrap();
    assert_eq!(scanner.scan().unwrap(), None);
    scanner.reset().unwrap();
    assert_eq!(scanner.scan().unwrap(), None);
}

struct FailingScanner {
    calls: usize,
}

impl Scanner for FailingScanner {
    fn scan(&mut self) -> Result<Option<Row>, DatabaseError> {
        self.calls += 1;
        match self.calls {
            1 => Ok(Some(sample_row(1))),
            2 => Err(DatabaseError::CellOutOfRange {
                cell_num: 1,
                cell_count: 0,
            }),
            n => Ok(Some(sample_row(n))),
        }
    }

    fn scan_batch(&mut self, _batch_size: usize) -> Result<Vec<Row>, DatabaseError> {
        Ok(Vec::new())
    }

    fn reset(&mut self) -> Result<(), DatabaseError> {
        self.calls = 0;
        Ok(())
    }
}

#[test]
fn test_scan_iterator_stops_after_error() {
    let mut rows = ScanIterator::new(FailingScanner { calls: 0 });
    assert_eq!(rows.next().unwrap().unwrap(), sample_row(1));
    assert!(matches!(
        rows.next(),
        Some(Err(DatabaseError::CellOutOfRange { .. }))
    ));
    assert!(rows.next().is_none());
    assert!(rows.next().is_none());
}
