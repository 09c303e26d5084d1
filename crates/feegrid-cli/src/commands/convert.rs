use std::path::PathBuf;

use feegrid_core::error::FeegridError;
use feegrid_core::extraction::pdftotext::PdftotextExtractor;
use feegrid_core::extraction::spreadsheet::SpreadsheetFormat;
use feegrid_core::{convert_pdf, convert_spreadsheet, Conversion};

use crate::commands::extension;
use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), FeegridError> {
    let bytes = std::fs::read(&input_file)?;
    let ext = extension(&input_file)?;

    let conversion: Conversion = if ext == "pdf" {
        let extractor = PdftotextExtractor::new();
        convert_pdf(&bytes, &extractor)?
    } else {
        let format = SpreadsheetFormat::from_extension(&ext)
            .ok_or(FeegridError::UnsupportedExtension(ext))?;
        convert_spreadsheet(&bytes, format)?
    };

    match output_file {
        Some(path) => {
            std::fs::write(&path, &conversion.csv_data)?;
            eprintln!(
                "Extracted {} record(s), written to {}",
                conversion.interpretation.table.len(),
                path.display()
            );
        }
        None => match output_format {
            "csv" => println!("{}", conversion.csv_data),
            "json" => output::json::print(&conversion)?,
            _ => output::table::print_conversion(&conversion),
        },
    }

    Ok(())
}
