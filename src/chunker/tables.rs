//! Triplet table serialization.
//!
//! Tables are flattened into descriptive sentences of the form
//! `"<row_label>, <col_label> = <value>"` so that each cell remains
//! retrievable as standalone text.

use crate::model::TableData;

/// Serialize a table body to triplet sentences.
///
/// The declared column headers are inserted as a synthetic first row, so
/// every body cell can be addressed by the value in its row's first column
/// and the header of its own column. Tables with no body rows or fewer than
/// two columns produce no body text.
pub fn serialize_table(data: &TableData) -> String {
    if data.row_count() < 1 || data.column_count() < 2 {
        return String::new();
    }

    // Header as synthetic row 0, body rows shifted down by one.
    let mut grid: Vec<Vec<&str>> = Vec::with_capacity(data.row_count() + 1);
    grid.push(data.columns.iter().map(|c| c.trim()).collect());
    for row in &data.rows {
        grid.push(row.iter().map(|c| c.trim()).collect());
    }

    let ncols = data.column_count();
    let row_labels: Vec<&str> = grid
        .iter()
        .map(|row| row.first().copied().unwrap_or(""))
        .collect();
    let col_labels = &grid[0];

    let mut parts = Vec::new();
    for (i, row) in grid.iter().enumerate().skip(1) {
        for j in 1..ncols {
            let value = row.get(j).copied().unwrap_or("");
            parts.push(format!("{}, {} = {}", row_labels[i], col_labels[j], value));
        }
    }

    parts.join(". ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triplet_serialization() {
        let mut data = TableData::new(["Id", "A", "B"]);
        data.add_row(["r1", "x", "y"]);

        let text = serialize_table(&data);
        assert!(text.contains("r1, A = x"));
        assert!(text.contains("r1, B = y"));
    }

    #[test]
    fn test_rows_joined_in_row_major_order() {
        let mut data = TableData::new(["Metric", "2023", "2024"]);
        data.add_row(["revenue", "10", "12"]);
        data.add_row(["costs", "7", "8"]);

        let text = serialize_table(&data);
        assert_eq!(
            text,
            "revenue, 2023 = 10. revenue, 2024 = 12. \
             costs, 2023 = 7. costs, 2024 = 8"
        );
    }

    #[test]
    fn test_values_are_trimmed() {
        let mut data = TableData::new(["Id ", " A"]);
        data.add_row([" r1 ", "  x  "]);

        assert_eq!(serialize_table(&data), "r1, A = x");
    }

    #[test]
    fn test_no_body_rows_yields_empty() {
        let data = TableData::new(["Id", "A"]);
        assert_eq!(serialize_table(&data), "");
    }

    #[test]
    fn test_single_column_yields_empty() {
        let mut data = TableData::new(["Only"]);
        data.add_row(["value"]);
        assert_eq!(serialize_table(&data), "");
    }

    #[test]
    fn test_ragged_rows_pad_with_empty_values() {
        let mut data = TableData::new(["Id", "A", "B"]);
        data.add_row(["r1", "x"]);

        let text = serialize_table(&data);
        assert!(text.contains("r1, A = x"));
        assert!(text.contains("r1, B = "));
    }
}
