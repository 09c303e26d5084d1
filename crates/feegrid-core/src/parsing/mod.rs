pub mod columns;
pub mod header;
pub mod price;

use serde::{Deserialize, Serialize};

use crate::model::{FeeRecord, FeeTable};
use columns::{contains_procedure_code, score_columns};
use header::{assign_columns, find_header_row};
use price::normalize_price;

/// How the code and price columns were decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnSource {
    /// Named by header keywords.
    Header,
    /// Chosen by content-pattern scoring.
    ContentScore,
}

/// Result of interpreting a row grid as a fee schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interpretation {
    pub table: FeeTable,
    /// Index of the detected header row, if any.
    pub header_row: Option<usize>,
    pub code_column: Option<usize>,
    pub price_column: Option<usize>,
    pub column_source: Option<ColumnSource>,
}

impl Interpretation {
    fn empty(header_row: Option<usize>) -> Self {
        Interpretation {
            table: FeeTable::default(),
            header_row,
            code_column: None,
            price_column: None,
            column_source: None,
        }
    }
}

/// Interpret a row grid as a fee schedule.
///
/// Scans for a header row (a row naming both a code and a price column
/// by keyword), assigns the two columns from it, falling back to
/// content-pattern scoring when the header pins down fewer than both.
/// Every row after the header (or from the top, without one) whose code
/// cell contains a procedure code becomes a record, with its price
/// normalized. Zero matches is a valid empty result, not an error.
pub fn interpret_table(grid: &[Vec<String>]) -> Interpretation {
    if grid.is_empty() {
        return Interpretation::empty(None);
    }

    let header_row = find_header_row(grid);
    log::debug!("header row: {:?}", header_row);

    let (mut code_column, mut price_column) = match header_row {
        Some(i) => assign_columns(&grid[i]),
        None => (None, None),
    };
    let mut column_source = ColumnSource::Header;

    // When the header pins down only one column (or there is no header),
    // scoring recomputes both.
    if code_column.is_none() || price_column.is_none() {
        let (code, price) = score_columns(grid);
        code_column = code;
        price_column = price;
        column_source = ColumnSource::ContentScore;
    }
    log::debug!(
        "code column: {:?}, price column: {:?} ({:?})",
        code_column,
        price_column,
        column_source
    );

    let (code_col, price_col) = match (code_column, price_column) {
        (Some(c), Some(p)) => (c, p),
        _ => return Interpretation::empty(header_row),
    };

    let start = header_row.map(|i| i + 1).unwrap_or(0);
    let mut records = Vec::new();
    for row in &grid[start..] {
        // Rows too short to hold both columns carry no usable pair.
        if row.len() <= code_col || row.len() <= price_col {
            continue;
        }
        let code = row[code_col].trim();
        if !contains_procedure_code(code) {
            continue;
        }
        records.push(FeeRecord {
            code: code.to_string(),
            price: normalize_price(&row[price_col]),
        });
    }
    log::debug!("{} record(s) extracted", records.len());

    Interpretation {
        table: FeeTable { records },
        header_row,
        code_column: Some(code_col),
        price_column: Some(price_col),
        column_source: Some(column_source),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    fn record(code: &str, price: &str) -> FeeRecord {
        FeeRecord {
            code: code.to_string(),
            price: price.to_string(),
        }
    }

    #[test]
    fn test_header_scenario() {
        let g = grid(&[
            &["Procedure", "Fee"],
            &["D1110", "$120.00"],
            &["Notes", "N/A"],
            &["D2140", "85"],
        ]);
        let result = interpret_table(&g);
        assert_eq!(result.header_row, Some(0));
        assert_eq!(result.code_column, Some(0));
        assert_eq!(result.price_column, Some(1));
        assert_eq!(result.column_source, Some(ColumnSource::Header));
        assert_eq!(
            result.table.records,
            vec![record("D1110", "120.00"), record("D2140", "85")]
        );
        assert_eq!(
            result.table.to_csv(),
            "adaCode,price\nD1110,120.00\nD2140,85"
        );
    }

    #[test]
    fn test_headerless_scenario_uses_scoring() {
        let g = grid(&[&["D4341", "200"], &["D4342", "150"]]);
        let result = interpret_table(&g);
        assert_eq!(result.header_row, None);
        assert_eq!(result.code_column, Some(0));
        assert_eq!(result.price_column, Some(1));
        assert_eq!(result.column_source, Some(ColumnSource::ContentScore));
        assert_eq!(
            result.table.records,
            vec![record("D4341", "200"), record("D4342", "150")]
        );
    }

    #[test]
    fn test_price_like_code_cell_is_rejected() {
        let g = grid(&[
            &["Procedure", "Fee"],
            &["12345", "99"],
            &["D1110", "120"],
        ]);
        let result = interpret_table(&g);
        assert_eq!(result.table.records, vec![record("D1110", "120")]);
    }

    #[test]
    fn test_rows_shorter_than_columns_are_skipped() {
        let g = grid(&[&["Procedure", "Fee"], &["D1110"], &["D2140", "85"]]);
        let result = interpret_table(&g);
        assert_eq!(result.table.records, vec![record("D2140", "85")]);
    }

    #[test]
    fn test_code_is_kept_as_whole_trimmed_cell() {
        let g = grid(&[&["Procedure", "Fee"], &[" D1110 prophylaxis ", "120"]]);
        let result = interpret_table(&g);
        assert_eq!(
            result.table.records,
            vec![record("D1110 prophylaxis", "120")]
        );
    }

    #[test]
    fn test_discount_price_normalizes_to_zero() {
        let g = grid(&[&["Code", "Amount"], &["D0120", "10% discount"]]);
        let result = interpret_table(&g);
        assert_eq!(result.table.records, vec![record("D0120", "0")]);
    }

    #[test]
    fn test_zero_matches_yields_header_only_table() {
        let g = grid(&[&["Procedure", "Fee"], &["Notes", "N/A"]]);
        let result = interpret_table(&g);
        assert!(result.table.is_empty());
        assert_eq!(result.table.to_csv(), "adaCode,price");
    }

    #[test]
    fn test_empty_grid_yields_header_only_table() {
        let result = interpret_table(&[]);
        assert!(result.table.is_empty());
        assert_eq!(result.header_row, None);
        assert_eq!(result.column_source, None);
    }

    #[test]
    fn test_data_scan_starts_at_row_zero_without_header() {
        // The very first row is data when nothing qualifies as a header.
        let g = grid(&[&["D0120", "45"], &["D0140", "72"]]);
        let result = interpret_table(&g);
        assert_eq!(result.table.len(), 2);
    }
}
