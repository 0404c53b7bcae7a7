pub mod error;
pub mod page;
pub mod row;

pub type PageNum = u32;

pub const PAGE_SIZE: usize = 4096;
pub const TABLE_MAX_PAGES: usize = 100;

// Column capacities, not counting the terminator
pub const COLUMN_STB_SIZE: usize = 32;
pub const COLUMN_TITLE_SIZE: usize = 255;
pub const COLUMN_PROVIDER_SIZE: usize = 255;
pub const COLUMN_DATE_SIZE: usize = 10;
pub const COLUMN_TIME_SIZE: usize = 4;

/*
 * Row layout (value slot)
 * ┌─────────┬───────────┬──────────────┬──────────┬─────────┬──────────┐
 * │ stb(33) │ title(256)│ provider(256)│ date(11) │ rev(4)  │ time(5)  │
 * └─────────┴───────────┴──────────────┴──────────┴─────────┴──────────┘
 */
pub const STB_SIZE: usize = COLUMN_STB_SIZE + 1;
pub const TITLE_SIZE: usize = COLUMN_TITLE_SIZE + 1;
pub const PROVIDER_SIZE: usize = COLUMN_PROVIDER_SIZE + 1;
pub const DATE_SIZE: usize = COLUMN_DATE_SIZE + 1;
pub const REV_SIZE: usize = std::mem::size_of::<f32>();
pub const TIME_SIZE: usize = COLUMN_TIME_SIZE + 1;

pub const STB_OFFSET: usize = 0;
pub const TITLE_OFFSET: usize = STB_OFFSET + STB_SIZE;
pub const PROVIDER_OFFSET: usize = TITLE_OFFSET + TITLE_SIZE;
pub const DATE_OFFSET: usize = PROVIDER_OFFSET + PROVIDER_SIZE;
pub const REV_OFFSET: usize = DATE_OFFSET + DATE_SIZE;
pub const TIME_OFFSET: usize = REV_OFFSET + REV_SIZE;
pub const ROW_SIZE: usize =
    STB_SIZE + TITLE_SIZE + PROVIDER_SIZE + DATE_SIZE + REV_SIZE + TIME_SIZE;

/*
 * Common node header
 * node_type(4) | is_root(4) | parent_pointer(4)
 */
pub const NODE_TYPE_SIZE: usize = std::mem::size_of::<u32>();
pub const NODE_TYPE_OFFSET: usize = 0;
pub const IS_ROOT_SIZE: usize = std::mem::size_of::<u32>();
pub const IS_ROOT_OFFSET: usize = NODE_TYPE_OFFSET + NODE_TYPE_SIZE;
pub const PARENT_POINTER_SIZE: usize = std::mem::size_of::<u32>();
pub const PARENT_POINTER_OFFSET: usize = IS_ROOT_OFFSET + IS_ROOT_SIZE;
pub const COMMON_NODE_HEADER_SIZE: usize = NODE_TYPE_SIZE + IS_ROOT_SIZE + PARENT_POINTER_SIZE;

/*
 * Leaf node header
 * common header(12) | num_cells(4)
 */
pub const LEAF_NODE_NUM_CELLS_SIZE: usize = std::mem::size_of::<u32>();
pub const LEAF_NODE_NUM_CELLS_OFFSET: usize = COMMON_NODE_HEADER_SIZE;
pub const LEAF_NODE_HEADER_SIZE: usize = COMMON_NODE_HEADER_SIZE + LEAF_NODE_NUM_CELLS_SIZE;

/*
 * Leaf node body: [key | value] cells packed after the header
 */
pub const LEAF_NODE_KEY_SIZE: usize = STB_SIZE + TITLE_SIZE + DATE_SIZE + 1;
pub const LEAF_NODE_KEY_OFFSET: usize = 0;
pub const LEAF_NODE_VALUE_SIZE: usize = ROW_SIZE;
pub const LEAF_NODE_VALUE_OFFSET: usize = LEAF_NODE_KEY_OFFSET + LEAF_NODE_KEY_SIZE;
pub const LEAF_NODE_CELL_SIZE: usize = LEAF_NODE_KEY_SIZE + LEAF_NODE_VALUE_SIZE;
pub const LEAF_NODE_SPACE_FOR_CELLS: usize = PAGE_SIZE - LEAF_NODE_HEADER_SIZE;
pub const LEAF_NODE_MAX_CELLS: usize = LEAF_NODE_SPACE_FOR_CELLS / LEAF_NODE_CELL_SIZE;
