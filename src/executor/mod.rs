pub mod insert;
pub mod meta;
pub mod scan;

use std::io::Write;

use crate::{
    executor::{
        insert::{Inserter, TableInserter},
        scan::{Scanner, TableScanner},
    },
    planner::statement::Statement,
    storage::table::Table,
    types::error::Result,
};

/// Outcome of a statement that ran to completion. A full table is an
/// expected result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteResult {
    Success,
    TableFull,
}

pub fn execute_statement<W: Write>(
    statement: &Statement,
    table: &mut Table,
    out: &mut W,
) -> Result<ExecuteResult> {
    match statement {
        Statement::Insert(row) => TableInserter::new(table).insert(row),
        Statement::Select => execute_select(table, out),
    }
}

fn execute_select<W: Write>(table: &mut Table, out: &mut W) -> Result<ExecuteResult> {
    let mut scanner = TableScanner::new(table)?;
    while let Some(row) = scanner.scan()? {
        writeln!(out, "{}", row)?;
    }
    Ok(ExecuteResult::Success)
}
