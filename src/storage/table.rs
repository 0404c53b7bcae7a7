use std::path::Path;

use log::{info, warn};

use crate::{
    executor::{
        ExecuteResult,
        scan::{ScanIterator, TableScanner},
    },
    storage::{cursor::Cursor, pager::Pager},
    types::{
        LEAF_NODE_MAX_CELLS, PageNum,
        error::{DatabaseError, Result},
        page::NodeType,
        row::{Key, Row},
    },
};

/// The single table stored in a database file. Page 0 is always the root
/// leaf.
pub struct Table {
    pub(crate) pager: Pager,
    pub root_page_num: PageNum,
}

impl Table {
    /// Opens `path`, creating the file if needed. A file with no pages gets
    /// an empty root leaf in memory; it reaches disk on `close`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut pager = Pager::open(path)?;
        let root_page_num = 0;

        if pager.num_pages() == 0 {
            info!("Initializing empty root leaf at page {}", root_page_num);
            let root = pager.get_page(root_page_num)?;
            root.initialize_leaf();
            root.set_root(true);
        } else {
            let root = pager.get_page(root_page_num)?;
            let node_type = root.node_type()?;
            if node_type != NodeType::Leaf {
                return Err(DatabaseError::InvalidNodeType(node_type.as_u32()));
            }
        }

        Ok(Self {
            pager,
            root_page_num,
        })
    }

    /// Flushes every resident page and closes the file. Rows inserted since
    /// `open` are only durable once this returns.
    pub fn close(self) -> Result<()> {
        self.pager.close()
    }

    /// Appends `row` to the root leaf. A full leaf is reported as
    /// `ExecuteResult::TableFull` and leaves the node untouched.
    pub fn insert(&mut self, row: &Row) -> Result<ExecuteResult> {
        let num_cells = self.cell_count()?;
        if num_cells as usize >= LEAF_NODE_MAX_CELLS {
            warn!("Table full ({} cells)", num_cells);
            return Ok(ExecuteResult::TableFull);
        }

        let key = Self::key_of(row);
        let mut cursor = Cursor::table_end(self)?;
        cursor.insert(&key, row)?;
        Ok(ExecuteResult::Success)
    }

    /// Every row of the table, in cell order. Each call starts a fresh pass.
    pub fn scan_all(&mut self) -> Result<Vec<Row>> {
        ScanIterator::new(TableScanner::new(self)?).collect()
    }

    pub fn key_of(row: &Row) -> Key {
        row.key()
    }

    pub fn cell_count(&mut self) -> Result<u32> {
        Ok(self.pager.get_page(self.root_page_num)?.leaf_cell_count())
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn pager_mut(&mut self) -> &mut Pager {
        &mut self.pager
    }
}
