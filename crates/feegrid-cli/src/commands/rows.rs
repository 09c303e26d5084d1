use std::path::PathBuf;

use feegrid_core::error::FeegridError;
use feegrid_core::extraction::pdftotext::PdftotextExtractor;
use feegrid_core::extraction::spreadsheet::{self, SpreadsheetFormat};
use feegrid_core::extraction::{rows, PdfExtractor};

use crate::commands::extension;
use crate::output;

/// Dump the row grid as reconstructed/decoded, before any table
/// interpretation. Useful to see what the interpreter is working with.
pub fn run(input_file: PathBuf, output_format: &str) -> Result<(), FeegridError> {
    let bytes = std::fs::read(&input_file)?;
    let ext = extension(&input_file)?;

    let grid = if ext == "pdf" {
        let extractor = PdftotextExtractor::new();
        let pages = extractor.extract_fragments(&bytes)?;
        rows::reconstruct_rows(&pages, extractor.vertical_axis())?
    } else {
        let format = SpreadsheetFormat::from_extension(&ext)
            .ok_or(FeegridError::UnsupportedExtension(ext))?;
        let grid = spreadsheet::read_grid(&bytes, format)?;
        if grid.is_empty() {
            return Err(FeegridError::NoTextContent);
        }
        grid
    };

    match output_format {
        "json" => output::json::print(&grid)?,
        _ => output::table::print_grid(&grid),
    }

    Ok(())
}
