use std::io::Cursor;

use calamine::Reader;

use crate::error::FeegridError;
use crate::model::RowGrid;

/// Spreadsheet input formats. These decode straight to a row grid,
/// bypassing text-layer extraction and row reconstruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadsheetFormat {
    Xls,
    Xlsx,
    Csv,
}

impl SpreadsheetFormat {
    /// Map a file extension (any case, no dot) to a format.
    pub fn from_extension(ext: &str) -> Option<SpreadsheetFormat> {
        match ext.to_lowercase().as_str() {
            "xls" => Some(SpreadsheetFormat::Xls),
            "xlsx" => Some(SpreadsheetFormat::Xlsx),
            "csv" => Some(SpreadsheetFormat::Csv),
            _ => None,
        }
    }
}

/// Decode spreadsheet bytes into a row grid.
pub fn read_grid(bytes: &[u8], format: SpreadsheetFormat) -> Result<RowGrid, FeegridError> {
    match format {
        SpreadsheetFormat::Xls | SpreadsheetFormat::Xlsx => read_workbook_grid(bytes),
        SpreadsheetFormat::Csv => read_csv_grid(bytes),
    }
}

/// Read the first worksheet of an Excel workbook as rows of cell text.
/// Workbooks with several sheets are not disambiguated; only the first
/// is read.
fn read_workbook_grid(bytes: &[u8]) -> Result<RowGrid, FeegridError> {
    let cursor = Cursor::new(bytes);
    let mut workbook = calamine::open_workbook_auto_from_rs(cursor)
        .map_err(|e| FeegridError::Spreadsheet(format!("failed to open workbook: {e}")))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| FeegridError::Spreadsheet("workbook has no sheets".into()))?
        .map_err(|e| FeegridError::Spreadsheet(format!("failed to read sheet: {e}")))?;

    Ok(range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect())
}

/// Render a cell as text. Empty cells become empty strings so that
/// column positions stay aligned across rows.
fn cell_text(cell: &calamine::Data) -> String {
    match cell {
        calamine::Data::String(s) => s.trim().to_string(),
        calamine::Data::Float(f) => f.to_string(),
        calamine::Data::Int(i) => i.to_string(),
        calamine::Data::Bool(b) => b.to_string(),
        calamine::Data::DateTime(dt) => dt.to_string(),
        calamine::Data::Empty => String::new(),
        other => format!("{other}"),
    }
}

fn read_csv_grid(bytes: &[u8]) -> Result<RowGrid, FeegridError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut grid = RowGrid::new();
    for record in reader.records() {
        let record = record.map_err(|e| FeegridError::Spreadsheet(format!("invalid CSV: {e}")))?;
        grid.push(record.iter().map(|cell| cell.to_string()).collect());
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            SpreadsheetFormat::from_extension("xlsx"),
            Some(SpreadsheetFormat::Xlsx)
        );
        assert_eq!(
            SpreadsheetFormat::from_extension("XLS"),
            Some(SpreadsheetFormat::Xls)
        );
        assert_eq!(
            SpreadsheetFormat::from_extension("csv"),
            Some(SpreadsheetFormat::Csv)
        );
        assert_eq!(SpreadsheetFormat::from_extension("pdf"), None);
        assert_eq!(SpreadsheetFormat::from_extension("txt"), None);
    }

    #[test]
    fn test_read_csv_grid() {
        let bytes = b"Procedure,Fee\nD1110,$120.00\nD2140,85";
        let grid = read_grid(bytes, SpreadsheetFormat::Csv).unwrap();
        assert_eq!(grid.len(), 3);
        assert_eq!(grid[0], vec!["Procedure", "Fee"]);
        assert_eq!(grid[1], vec!["D1110", "$120.00"]);
        assert_eq!(grid[2], vec!["D2140", "85"]);
    }

    #[test]
    fn test_read_csv_grid_keeps_ragged_rows() {
        let bytes = b"D1110,120,extra\nD2140";
        let grid = read_grid(bytes, SpreadsheetFormat::Csv).unwrap();
        assert_eq!(grid[0].len(), 3);
        assert_eq!(grid[1].len(), 1);
    }

    #[test]
    fn test_invalid_workbook_is_reported() {
        let err = read_grid(b"not a workbook", SpreadsheetFormat::Xlsx).unwrap_err();
        assert!(matches!(err, FeegridError::Spreadsheet(_)));
    }
}
