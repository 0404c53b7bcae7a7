use std::io::Write;

use crate::{
    storage::table::Table,
    types::{
        COMMON_NODE_HEADER_SIZE, LEAF_NODE_CELL_SIZE, LEAF_NODE_HEADER_SIZE, LEAF_NODE_MAX_CELLS,
        LEAF_NODE_SPACE_FOR_CELLS, ROW_SIZE,
        error::Result,
        page::Page,
        row::Key,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaCommandResult {
    Success,
    Exit,
    Unrecognized,
}

/// Runs a dot-command. `.exit` only reports `Exit`; closing the table is
/// left to whoever owns it.
pub fn do_meta_command<W: Write>(
    line: &str,
    table: &mut Table,
    out: &mut W,
) -> Result<MetaCommandResult> {
    match line {
        ".exit" => Ok(MetaCommandResult::Exit),
        ".btree" => {
            writeln!(out, "Tree:")?;
            let root_page_num = table.root_page_num;
            let root = table.pager_mut().get_page(root_page_num)?;
            print_leaf_node(root, out)?;
            Ok(MetaCommandResult::Success)
        }
        ".constants" => {
            writeln!(out, "Constants:")?;
            print_constants(out)?;
            Ok(MetaCommandResult::Success)
        }
        _ => Ok(MetaCommandResult::Unrecognized),
    }
}

pub fn print_leaf_node<W: Write>(node: &Page, out: &mut W) -> Result<()> {
    let num_cells = node.leaf_cell_count();
    writeln!(out, "leaf (size {})", num_cells)?;
    for i in 0..num_cells {
        let key = Key::from_slot(node.leaf_key(i)?);
        writeln!(out, " - {} : {}", i, key)?;
    }
    Ok(())
}

pub fn print_constants<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "ROW_SIZE: {}", ROW_SIZE)?;
    writeln!(out, "COMMON_NODE_HEADER_SIZE: {}", COMMON_NODE_HEADER_SIZE)?;
    writeln!(out, "LEAF_NODE_HEADER_SIZE: {}", LEAF_NODE_HEADER_SIZE)?;
    writeln!(out, "LEAF_NODE_CELL_SIZE: {}", LEAF_NODE_CELL_SIZE)?;
    writeln!(out, "LEAF_NODE_SPACE_FOR_CELLS: {}", LEAF_NODE_SPACE_FOR_CELLS)?;
    writeln!(out, "LEAF_NODE_MAX_CELLS: {}", LEAF_NODE_MAX_CELLS)?;
    Ok(())
}
