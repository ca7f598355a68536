//! Table cell data.

use serde::{Deserialize, Serialize};

/// Structured cell data for a table item.
///
/// `columns` holds the declared column headers; by convention the first
/// entry labels the row-label column. `rows` holds the body rows beneath
/// those headers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableData {
    /// Declared column headers
    pub columns: Vec<String>,

    /// Body rows (each a list of cell values, aligned with `columns`)
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    /// Create table data with the given column headers.
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a body row.
    pub fn add_row<S: Into<String>>(&mut self, row: impl IntoIterator<Item = S>) {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    /// Build table data from a dense grid, treating the first grid row as
    /// the column headers.
    pub fn from_grid(mut grid: Vec<Vec<String>>) -> Self {
        if grid.is_empty() {
            return Self::default();
        }
        let columns = grid.remove(0);
        Self {
            columns,
            rows: grid,
        }
    }

    /// Build table data from positioned cells with row/column spans.
    ///
    /// Spanned cells repeat their value across every grid position they
    /// cover, so downstream serialization can address each position by a
    /// single (row, column) pair.
    pub fn from_cells(cells: &[TableCell]) -> Self {
        if cells.is_empty() {
            return Self::default();
        }

        let mut max_row = 0;
        let mut max_col = 0;
        for cell in cells {
            max_row = max_row.max(cell.row + cell.rowspan.max(1));
            max_col = max_col.max(cell.col + cell.colspan.max(1));
        }

        let mut grid = vec![vec![String::new(); max_col]; max_row];
        for cell in cells {
            let text = cell.text.trim();
            for r in cell.row..(cell.row + cell.rowspan.max(1)).min(max_row) {
                for c in cell.col..(cell.col + cell.colspan.max(1)).min(max_col) {
                    grid[r][c] = text.to_string();
                }
            }
        }

        Self::from_grid(grid)
    }

    /// Number of columns (from the declared headers).
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of body rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no body rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell value at a body-row position, if present.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col)).map(|s| s.as_str())
    }
}

/// A single positioned table cell, as emitted by layout pipelines that
/// report spans instead of a dense grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableCell {
    /// 0-indexed grid row
    pub row: usize,
    /// 0-indexed grid column
    pub col: usize,
    /// Rows covered (>= 1)
    #[serde(default = "one")]
    pub rowspan: usize,
    /// Columns covered (>= 1)
    #[serde(default = "one")]
    pub colspan: usize,
    /// Cell text
    pub text: String,
}

fn one() -> usize {
    1
}

impl TableCell {
    /// Create a 1x1 cell.
    pub fn new(row: usize, col: usize, text: impl Into<String>) -> Self {
        Self {
            row,
            col,
            rowspan: 1,
            colspan: 1,
            text: text.into(),
        }
    }
}
