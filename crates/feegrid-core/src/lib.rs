//! Fee schedule extraction from PDF and spreadsheet files.
//!
//! Pipeline: positioned text fragments from a PDF text layer are grouped
//! into visual rows, the resulting grid is searched for a procedure-code
//! column and a price column, and the matched records are emitted as
//! `adaCode,price` CSV. Spreadsheets decode to the same grid shape and
//! skip the first stage.

pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;

use serde::{Deserialize, Serialize};

use error::FeegridError;
use extraction::spreadsheet::{self, SpreadsheetFormat};
use extraction::{rows, PdfExtractor};
use model::RowGrid;
use parsing::Interpretation;

/// Records shown in a conversion preview, not counting the header row.
pub const PREVIEW_ROWS: usize = 6;

/// Finished conversion: CSV text plus a bounded preview grid and the
/// interpretation metadata behind them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversion {
    pub csv_data: String,
    pub preview: RowGrid,
    pub interpretation: Interpretation,
}

/// Convert a PDF fee schedule to CSV.
///
/// The extractor produces per-page positioned fragments; rows are
/// reconstructed according to the extractor's vertical axis convention,
/// then interpreted.
pub fn convert_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
) -> Result<Conversion, FeegridError> {
    let pages = extractor.extract_fragments(pdf_bytes)?;
    let grid = rows::reconstruct_rows(&pages, extractor.vertical_axis())?;
    Ok(convert_grid(&grid))
}

/// Convert a spreadsheet fee schedule to CSV.
pub fn convert_spreadsheet(
    bytes: &[u8],
    format: SpreadsheetFormat,
) -> Result<Conversion, FeegridError> {
    let grid = spreadsheet::read_grid(bytes, format)?;
    if grid.is_empty() {
        return Err(FeegridError::NoTextContent);
    }
    Ok(convert_grid(&grid))
}

/// Interpret an already-built row grid and package the result.
pub fn convert_grid(grid: &[Vec<String>]) -> Conversion {
    let interpretation = parsing::interpret_table(grid);
    Conversion {
        csv_data: interpretation.table.to_csv(),
        preview: interpretation.table.preview(PREVIEW_ROWS),
        interpretation,
    }
}
