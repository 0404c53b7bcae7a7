use stbstore::{
    storage::cursor::Cursor,
    types::{LEAF_NODE_MAX_CELLS, error::DatabaseError, row::Row},
    utils::mock::{TempDatabase, sample_row},
};

#[test]
fn test_cursor_on_empty_table() {
    let temp_db = TempDatabase::with_prefix("cursor_empty");
    let mut table = temp_db.open_table().unwrap();

    let mut cursor = Cursor::table_start(&mut table).unwrap();
    assert_eq!(cursor.cell_num, 0);
    assert!(cursor.end_of_table);
    assert!(matches!(
        cursor.value(),
        Err(DatabaseError::CellOutOfRange { cell_num: 0, cell_count: 0 })
    ));
}

#[test]
fn test_cursor_walks_forward() {
    let temp_db = TempDatabase::with_prefix("cursor_walk");
    let mut table = temp_db.open_table().unwrap();
    table.insert(&sample_row(1)).unwrap();
    table.insert(&sample_row(2)).unwrap();

    let mut cursor = Cursor::table_start(&mut table).unwrap();
    assert!(!cursor.end_of_table);
    assert_eq!(cursor.row().unwrap(), sample_row(1));

    cursor.advance().unwrap();
    assert_eq!(cursor.cell_num, 1);
    assert!(!cursor.end_of_table);
    assert_eq!(cursor.key().unwrap().as_bytes(), b"stb2title2date2");

    cursor.advance().unwrap();
    assert_eq!(cursor.cell_num, 2);
    assert!(cursor.end_of_table);
    assert!(cursor.row().is_err());
}

#[test]
fn test_cursor_table_end_and_rewind() {
    let temp_db = TempDatabase::with_prefix("cursor_end");
    let mut table = temp_db.open_table().unwrap();
    for i in 0..3 {
        table.insert(&sample_row(i)).unwrap();
    }

    let mut cursor = Cursor::table_end(&mut table).unwrap();
    assert_eq!(cursor.page_num, 0);
    assert_eq!(cursor.cell_num, 3);
    assert!(cursor.end_of_table);

    cursor.rewind().unwrap();
    assert_eq!(cursor.cell_num, 0);
    assert!(!cursor.end_of_table);
    assert_eq!(cursor.row().unwrap(), sample_row(0));
}

#[test]
fn test_insert_at_sorted_positions_keeps_order() {
    let temp_db = TempDatabase::with_prefix("cursor_sorted");
    let mut table = temp_db.open_table().unwrap();

    // Descending input, each row placed at the front.
    for i in (0..LEAF_NODE_MAX_CELLS).rev() {
        let row = sample_row(i);
        let mut cursor = Cursor::at(&mut table, 0, 0).unwrap();
        cursor.insert(&row.key(), &row).unwrap();
    }

    let rows = table.scan_all().unwrap();
    let keys: Vec<_> = rows.iter().map(Row::key).collect();
    assert!(keys.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(rows[0], sample_row(0));
}

#[test]
fn test_insert_between_existing_cells() {
    let temp_db = TempDatabase::with_prefix("cursor_middle");
    let mut table = temp_db.open_table().unwrap();
    let a = Row::new("A", "x", "p", "2020-01-01", 1.0, "1:00").unwrap();
    let b = Row::new("B", "y", "p", "2020-01-02", 2.0, "2:00").unwrap();
    let c = Row::new("C", "z", "p", "2020-01-03", 3.0, "3:00").unwrap();
    table.insert(&a).unwrap();
    table.insert(&c).unwrap();

    let mut cursor = Cursor::at(&mut table, 0, 1).unwrap();
    assert!(!cursor.end_of_table);
    cursor.insert(&b.key(), &b).unwrap();

    assert_eq!(table.scan_all().unwrap(), vec![a, b, c]);
}

#[test]
fn test_cursor_at_rejects_gap() {
    let temp_db = TempDatabase::with_prefix("cursor_gap");
    let mut table = temp_db.open_table().unwrap();
    table.insert(&sample_row(0)).unwrap();

    assert!(Cursor::at(&mut table, 0, 1).unwrap().end_of_table);
    assert!(matches!(
        Cursor::at(&mut table, 0, 2),
        Err(DatabaseError::CellOutOfRange { cell_num: 2, cell_count: 1 })
    ));
}

#[test]
fn test_cursor_insert_into_full_leaf_is_fatal() {
    let temp_db = TempDatabase::with_prefix("cursor_full");
    let mut table = temp_db.open_table().unwrap();
    for i in 0..LEAF_NODE_MAX_CELLS {
        table.insert(&sample_row(i)).unwrap();
    }

    let row = sample_row(8);
    let mut cursor = Cursor::table_end(&mut table).unwrap();
    let result = cursor.insert(&row.key(), &row);
    assert!(matches!(result, Err(DatabaseError::LeafFull { page_num: 0 })));
    assert_eq!(table.cell_count().unwrap(), LEAF_NODE_MAX_CELLS as u32);
}
