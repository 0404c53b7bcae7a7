use crate::types::{
    IS_ROOT_OFFSET, LEAF_NODE_CELL_SIZE, LEAF_NODE_HEADER_SIZE, LEAF_NODE_KEY_SIZE,
    LEAF_NODE_MAX_CELLS, LEAF_NODE_NUM_CELLS_OFFSET, LEAF_NODE_VALUE_SIZE, NODE_TYPE_OFFSET,
    PAGE_SIZE, PARENT_POINTER_OFFSET, PageNum,
    error::{DatabaseError, Result},
    row::{Key, Row},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    Internal = 0,
    Leaf = 1,
}

impl NodeType {
    pub fn from_u32(value: u32) -> Result<Self> {
        match value {
            0 => Ok(NodeType::Internal),
            1 => Ok(NodeType::Leaf),
            _ => Err(DatabaseError::InvalidNodeType(value)),
        }
    }

    pub fn as_u32(&self) -> u32 {
        match self {
            NodeType::Internal => 0,
            NodeType::Leaf => 1,
        }
    }
}

/*
 * Leaf Page Layout on Disk
 * ┌─────────────────────────────────────────────────────────────────┐
 * │                    NODE HEADER (16 bytes)                       │
 * │  node_type(4) | is_root(4) | parent(4) | num_cells(4)           │
 * ├─────────────────────────────────────────────────────────────────┤
 * │  cell 0: key(301) | value(565)                                  │
 * │  cell 1: key(301) | value(565)                                  │
 * │  ...                                                            │
 * ├─────────────────────────────────────────────────────────────────┤
 * │                    UNUSED TAIL                                  │
 * └─────────────────────────────────────────────────────────────────┘
 */

/// One resident page. The buffer is the exact on-disk image; every accessor
/// reads and writes it in place.
pub struct Page {
    pub page_num: PageNum,
    data: Box<[u8; PAGE_SIZE]>,
}

impl Page {
    pub fn new(page_num: PageNum) -> Self {
        Self {
            page_num,
            data: Box::new([0; PAGE_SIZE]),
        }
    }

    pub fn as_bytes(&self) -> &[u8; PAGE_SIZE] {
        &self.data
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8; PAGE_SIZE] {
        &mut self.data
    }

    fn read_u32(&self, offset: usize) -> u32 {
        u32::from_le_bytes([
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
            self.data[offset + 3],
        ])
    }

    fn write_u32(&mut self, offset: usize, value: u32) {
        self.data[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
    }

    pub fn node_type(&self) -> Result<NodeType> {
        NodeType::from_u32(self.read_u32(NODE_TYPE_OFFSET))
    }

    pub fn set_node_type(&mut self, node_type: NodeType) {
        self.write_u32(NODE_TYPE_OFFSET, node_type.as_u32());
    }

    pub fn is_root(&self) -> bool {
        self.read_u32(IS_ROOT_OFFSET) != 0
    }

    pub fn set_root(&mut self, is_root: bool) {
        self.write_u32(IS_ROOT_OFFSET, is_root as u32);
    }

    pub fn parent_pointer(&self) -> PageNum {
        self.read_u32(PARENT_POINTER_OFFSET)
    }

    pub fn set_parent_pointer(&mut self, parent: PageNum) {
        self.write_u32(PARENT_POINTER_OFFSET, parent);
    }

    /// Resets the page to an empty leaf. Only the header is touched; old cell
    /// bytes stay behind until overwritten.
    pub fn initialize_leaf(&mut self) {
        self.set_node_type(NodeType::Leaf);
        self.set_root(false);
        self.set_parent_pointer(0);
        self.set_leaf_cell_count(0);
    }

    pub fn leaf_cell_count(&self) -> u32 {
        self.read_u32(LEAF_NODE_NUM_CELLS_OFFSET)
    }

    pub fn set_leaf_cell_count(&mut self, count: u32) {
        self.write_u32(LEAF_NODE_NUM_CELLS_OFFSET, count);
    }

    fn leaf_cell_offset(&self, cell_num: u32) -> Result<usize> {
        if cell_num as usize >= LEAF_NODE_MAX_CELLS {
            return Err(DatabaseError::CellOutOfRange {
                cell_num,
                cell_count: LEAF_NODE_MAX_CELLS as u32,
            });
        }
        Ok(LEAF_NODE_HEADER_SIZE + cell_num as usize * LEAF_NODE_CELL_SIZE)
    }

    pub fn leaf_key(&self, cell_num: u32) -> Result<&[u8]> {
        let offset = self.leaf_cell_offset(cell_num)?;
        Ok(&self.data[offset..offset + LEAF_NODE_KEY_SIZE])
    }

    pub fn leaf_value(&self, cell_num: u32) -> Result<&[u8]> {
        let offset = self.leaf_cell_offset(cell_num)? + LEAF_NODE_KEY_SIZE;
        Ok(&self.data[offset..offset + LEAF_NODE_VALUE_SIZE])
    }

    pub fn leaf_value_mut(&mut self, cell_num: u32) -> Result<&mut [u8]> {
        let offset = self.leaf_cell_offset(cell_num)? + LEAF_NODE_KEY_SIZE;
        Ok(&mut self.data[offset..offset + LEAF_NODE_VALUE_SIZE])
    }

    /// Writes `key`/`row` into slot `cell_num`, first shifting every cell from
    /// `cell_num` onward one slot to the right. The caller picks the slot;
    /// no key search happens here.
    pub fn leaf_insert(&mut self, cell_num: u32, key: &Key, row: &Row) -> Result<()> {
        let num_cells = self.leaf_cell_count();
        if num_cells as usize >= LEAF_NODE_MAX_CELLS {
            return Err(DatabaseError::LeafFull {
                page_num: self.page_num,
            });
        }
        if cell_num > num_cells {
            return Err(DatabaseError::CellOutOfRange {
                cell_num,
                cell_count: num_cells,
            });
        }

        if cell_num < num_cells {
            let start = self.leaf_cell_offset(cell_num)?;
            let end = LEAF_NODE_HEADER_SIZE + num_cells as usize * LEAF_NODE_CELL_SIZE;
            self.data
                .copy_within(start..end, start + LEAF_NODE_CELL_SIZE);
        }

        let offset = self.leaf_cell_offset(cell_num)?;
        self.data[offset..offset + LEAF_NODE_KEY_SIZE].copy_from_slice(key.as_slot());
        row.serialize(self.leaf_value_mut(cell_num)?)?;
        self.set_leaf_cell_count(num_cells + 1);
        Ok(())
    }
}
