use feegrid_core::parsing::ColumnSource;
use feegrid_core::Conversion;

/// Print a conversion summary followed by the bounded preview table.
pub fn print_conversion(conversion: &Conversion) {
    let interp = &conversion.interpretation;

    match interp.header_row {
        Some(i) => println!("Header row:  {}", i + 1),
        None => println!("Header row:  none"),
    }
    match (interp.code_column, interp.price_column) {
        (Some(code), Some(price)) => {
            let source = match interp.column_source {
                Some(ColumnSource::Header) => "header keywords",
                Some(ColumnSource::ContentScore) => "content scoring",
                None => "unknown",
            };
            println!("Columns:     code {} / price {} (via {})", code + 1, price + 1, source);
        }
        _ => println!("Columns:     not identified"),
    }
    println!("Records:     {}\n", interp.table.len());

    if interp.table.is_empty() {
        println!("No procedure codes found.");
        return;
    }

    print_grid(&conversion.preview);

    let shown = conversion.preview.len().saturating_sub(1);
    let remaining = interp.table.len() - shown;
    if remaining > 0 {
        println!("  ... {} more record(s) in the CSV output", remaining);
    }
}

/// Print rows with width-aligned columns.
pub fn print_grid(grid: &[Vec<String>]) {
    let width = grid.iter().map(|row| row.len()).max().unwrap_or(0);
    let mut col_widths = vec![0usize; width];
    for row in grid {
        for (i, cell) in row.iter().enumerate() {
            col_widths[i] = col_widths[i].max(cell.len());
        }
    }

    for row in grid {
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate() {
            line.push_str(&format!("{:<w$}  ", cell, w = col_widths[i]));
        }
        println!("  {}", line.trim_end());
    }
}
