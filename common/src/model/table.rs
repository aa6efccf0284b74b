use serde::{Deserialize, Serialize};

/// Ordered, normalized column names taken from the first line of an import.
pub type HeaderList = Vec<String>;

/// Raw cell values of one data line, one per header position (ideally).
pub type Row = Vec<String>;

/// A header list plus the data rows imported from a delimited file.
///
/// Rows are kept exactly as read: nothing guarantees that a row has as many
/// cells as there are headers. Use [`Table::cell`] or [`Table::display_row`]
/// when rendering so ragged rows never index out of bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub headers: HeaderList,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(headers: HeaderList, rows: Vec<Row>) -> Self {
        Self { headers, rows }
    }

    /// Number of data rows (the header line is not counted).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True for the shape produced by an empty file: no data rows and no
    /// header with any text in it.
    pub fn is_blank(&self) -> bool {
        self.rows.is_empty() && self.headers.iter().all(|h| h.is_empty())
    }

    /// Position of the first header equal to `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Bounds-checked cell access.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
    }

    /// Cells of `row` aligned to the header list: missing cells come back as
    /// empty strings and cells beyond the last header are dropped.
    pub fn display_row(&self, row: usize) -> Vec<&str> {
        (0..self.headers.len())
            .map(|column| self.cell(row, column).unwrap_or(""))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ragged() -> Table {
        Table::new(
            vec!["name".into(), "phone".into(), "city".into()],
            vec![
                vec!["Ada".into()],
                vec!["Grace".into(), "456".into(), "NYC".into(), "extra".into()],
            ],
        )
    }

    #[test]
    fn short_rows_render_missing_cells_as_empty() {
        let table = ragged();
        assert_eq!(table.display_row(0), vec!["Ada", "", ""]);
    }

    #[test]
    fn long_rows_are_cut_to_header_width() {
        let table = ragged();
        assert_eq!(table.display_row(1), vec!["Grace", "456", "NYC"]);
    }

    #[test]
    fn out_of_range_access_is_none() {
        let table = ragged();
        assert_eq!(table.cell(0, 2), None);
        assert_eq!(table.cell(9, 0), None);
        assert_eq!(table.display_row(9), vec!["", "", ""]);
    }

    #[test]
    fn blank_table_detection() {
        assert!(Table::new(vec![String::new()], vec![]).is_blank());
        assert!(Table::default().is_blank());
        assert!(!ragged().is_blank());
    }

    #[test]
    fn column_index_uses_first_duplicate() {
        let table = Table::new(vec!["a".into(), "b".into(), "a".into()], vec![]);
        assert_eq!(table.column_index("a"), Some(0));
        assert_eq!(table.column_index("z"), None);
    }
}
