use serde::{Deserialize, Serialize};

/// Grid of text rows, the shape shared by PDF-derived and
/// spreadsheet-derived input.
pub type RowGrid = Vec<Vec<String>>;

/// Fixed output header pair, emitted regardless of what the input called
/// its columns.
pub const OUTPUT_HEADER: [&str; 2] = ["adaCode", "price"];

/// One extracted fee schedule entry: a procedure code and its
/// normalized price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeRecord {
    pub code: String,
    pub price: String,
}

/// Ordered set of extracted records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeeTable {
    pub records: Vec<FeeRecord>,
}

impl FeeTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Render as rows of cells, fixed header row first.
    pub fn to_rows(&self) -> RowGrid {
        let mut rows = Vec::with_capacity(self.records.len() + 1);
        rows.push(OUTPUT_HEADER.iter().map(|s| s.to_string()).collect());
        for record in &self.records {
            rows.push(vec![record.code.clone(), record.price.clone()]);
        }
        rows
    }

    /// CSV text. Codes and normalized prices never contain commas, so
    /// fields are joined without quoting.
    pub fn to_csv(&self) -> String {
        self.to_rows()
            .iter()
            .map(|row| row.join(","))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Header row plus at most `limit` records, for display.
    pub fn preview(&self, limit: usize) -> RowGrid {
        let mut rows = self.to_rows();
        rows.truncate(limit + 1);
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> FeeTable {
        FeeTable {
            records: vec![
                FeeRecord {
                    code: "D1110".into(),
                    price: "120.00".into(),
                },
                FeeRecord {
                    code: "D2140".into(),
                    price: "85".into(),
                },
            ],
        }
    }

    #[test]
    fn csv_has_fixed_header_and_one_line_per_record() {
        assert_eq!(table().to_csv(), "adaCode,price\nD1110,120.00\nD2140,85");
    }

    #[test]
    fn empty_table_renders_header_only() {
        let empty = FeeTable::default();
        assert_eq!(empty.to_csv(), "adaCode,price");
        assert_eq!(empty.to_rows().len(), 1);
    }

    #[test]
    fn preview_is_bounded_but_keeps_header() {
        let preview = table().preview(1);
        assert_eq!(preview.len(), 2);
        assert_eq!(preview[0], vec!["adaCode", "price"]);
        assert_eq!(preview[1], vec!["D1110", "120.00"]);
    }
}
