use crate::{
    storage::table::Table,
    types::{
        PageNum,
        error::{DatabaseError, Result},
        row::{Key, Row},
    },
};

/// A position inside one leaf of a table. Cursors borrow the table for as
/// long as they live and only ever move forward.
pub struct Cursor<'a> {
    table: &'a mut Table,
    pub page_num: PageNum,
    pub cell_num: u32,
    pub end_of_table: bool,
}

impl<'a> Cursor<'a> {
    /// Positions on the first cell of the root leaf.
    pub fn table_start(table: &'a mut Table) -> Result<Self> {
        let page_num = table.root_page_num;
        let num_cells = table.pager.get_page(page_num)?.leaf_cell_count();
        Ok(Self {
            table,
            page_num,
            cell_num: 0,
            end_of_table: num_cells == 0,
        })
    }

    /// Positions one past the last cell of the root leaf.
    pub fn table_end(table: &'a mut Table) -> Result<Self> {
        let page_num = table.root_page_num;
        let num_cells = table.pager.get_page(page_num)?.leaf_cell_count();
        Ok(Self {
            table,
            page_num,
            cell_num: num_cells,
            end_of_table: true,
        })
    }

    /// Positions on an explicit cell. `cell_num` may equal the cell count,
    /// which is the append position.
    pub fn at(table: &'a mut Table, page_num: PageNum, cell_num: u32) -> Result<Self> {
        let num_cells = table.pager.get_page(page_num)?.leaf_cell_count();
        if cell_num > num_cells {
            return Err(DatabaseError::CellOutOfRange {
                cell_num,
                cell_count: num_cells,
            });
        }
        Ok(Self {
            table,
            page_num,
            cell_num,
            end_of_table: cell_num >= num_cells,
        })
    }

    /// Moves back to the first cell of the page the cursor is on.
    pub fn rewind(&mut self) -> Result<()> {
        let num_cells = self.table.pager.get_page(self.page_num)?.leaf_cell_count();
        self.cell_num = 0;
        self.end_of_table = num_cells == 0;
        Ok(())
    }

    /// Serialized row under the cursor.
    pub fn value(&mut self) -> Result<&[u8]> {
        let page = self.table.pager.get_page(self.page_num)?;
        let num_cells = page.leaf_cell_count();
        if self.cell_num >= num_cells {
            return Err(DatabaseError::CellOutOfRange {
                cell_num: self.cell_num,
                cell_count: num_cells,
            });
        }
        page.leaf_value(self.cell_num)
    }

    pub fn row(&mut self) -> Result<Row> {
        Row::deserialize(self.value()?)
    }

    pub fn key(&mut self) -> Result<Key> {
        let page = self.table.pager.get_page(self.page_num)?;
        let num_cells = page.leaf_cell_count();
        if self.cell_num >= num_cells {
            return Err(DatabaseError::CellOutOfRange {
                cell_num: self.cell_num,
                cell_count: num_cells,
            });
        }
        Ok(Key::from_slot(page.leaf_key(self.cell_num)?))
    }

    pub fn advance(&mut self) -> Result<()> {
        let num_cells = self.table.pager.get_page(self.page_num)?.leaf_cell_count();
        self.cell_num += 1;
        if self.cell_num >= num_cells {
            self.end_of_table = true;
        }
        Ok(())
    }

    /// Inserts a cell at the cursor position, shifting later cells right.
    /// Fails with `LeafFull` when the leaf has no free slot.
    pub fn insert(&mut self, key: &Key, row: &Row) -> Result<()> {
        let page = self.table.pager.get_page(self.page_num)?;
        page.leaf_insert(self.cell_num, key, row)
    }
}
