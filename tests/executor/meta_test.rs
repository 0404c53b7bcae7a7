use stbstore::{
    executor::meta::{MetaCommandResult, do_meta_command},
    types::row::Row,
    utils::mock::TempDatabase,
};

fn run(line: &str, temp_db: &TempDatabase, rows: &[Row]) -> (MetaCommandResult, String) {
    let mut table = temp_db.open_table().unwrap();
    for row in rows {
        table.insert(row).unwrap();
    }
    let mut out = Vec::new();
    let result = do_meta_command(line, &mut table, &mut out).unwrap();
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_constants() {
    let temp_db = TempDatabase::with_prefix("meta_constants");
    let (result, output) = run(".constants", &temp_db, &[]);
    assert_eq!(result, MetaCommandResult::Success);
    assert_eq!(
        output,
        "Constants:\n\
         ROW_SIZE: 565\n\
         COMMON_NODE_HEADER_SIZE: 12\n\
         LEAF_NODE_HEADER_SIZE: 16\n\
         LEAF_NODE_CELL_SIZE: 866\n\
         LEAF_NODE_SPACE_FOR_CELLS: 4080\n\
         LEAF_NODE_MAX_CELLS: 4\n"
    );
}

#[test]
fn test_btree() {
    let temp_db = TempDatabase::with_prefix("meta_btree");
    let rows = [
        Row::new("A", "x", "p", "2020-01-01", 1.0, "1:00").unwrap(),
        Row::new("B", "y", "p", "2020-01-02", 2.0, "2:00").unwrap(),
    ];
    let (result, output) = run(".btree", &temp_db, &rows);
    assert_eq!(result, MetaCommandResult::Success);
    assert_eq!(
        output,
        "Tree:\nleaf (size 2)\n - 0 : Ax2020-01-01\n - 1 : By2020-01-02\n"
    );
}

#[test]
fn test_btree_empty() {
    let temp_db = TempDatabase::with_prefix("meta_btree_empty");
    let (_, output) = run(".btree", &temp_db, &[]);
    assert_eq!(output, "Tree:\nleaf (size 0)\n");
}

#[test]
fn test_exit_and_unrecognized() {
    let temp_db = TempDatabase::with_prefix("meta_exit");
    let (result, output) = run(".exit", &temp_db, &[]);
    assert_eq!(result, MetaCommandResult::Exit);
    assert!(output.is_empty());

    let (result, output) = run(".tables", &temp_db, &[]);
    assert_eq!(result, MetaCommandResult::Unrecognized);
    assert!(output.is_empty());
}
