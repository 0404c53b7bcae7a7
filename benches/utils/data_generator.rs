use stbstore::types::{
    COLUMN_PROVIDER_SIZE, COLUMN_STB_SIZE, COLUMN_TITLE_SIZE, LEAF_NODE_MAX_CELLS, row::Row,
};

#[derive(Debug, Clone, Copy)]
pub enum RowType {
    Small,
    Wide,
}

pub struct DataGenerator;

impl DataGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate_row(&self, id: usize, row_type: RowType) -> Row {
        match row_type {
            RowType::Small => self.generate_small_row(id),
            RowType::Wide => self.generate_wide_row(id),
        }
    }

    /// One leaf worth of rows in ascending key order.
    pub fn generate_leaf(&self, row_type: RowType) -> Vec<Row> {
        (0..LEAF_NODE_MAX_CELLS)
            .map(|id| self.generate_row(id, row_type))
            .collect()
    }

    fn generate_small_row(&self, id: usize) -> Row {
        Row::new(
            &format!("stb{}", id),
            "short",
            "studio",
            "2024-01-01",
            id as f32,
            "1:00",
        )
        .expect("small row fits")
    }

    fn generate_wide_row(&self, id: usize) -> Row {
        let stb = format!("{:0>width$}", id, width = COLUMN_STB_SIZE);
        Row::new(
            &stb,
            &"t".repeat(COLUMN_TITLE_SIZE),
            &"p".repeat(COLUMN_PROVIDER_SIZE),
            "2024-12-31",
            id as f32 * 1.5,
            "9:59",
        )
        .expect("wide row fits")
    }
}
