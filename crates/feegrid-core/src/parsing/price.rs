/// Check if a cell looks like a price: an optional leading `$`, then
/// (commas removed) a finite number.
pub fn is_price_cell(cell: &str) -> bool {
    let trimmed = cell.trim();
    if let Some(rest) = trimmed.strip_prefix('$') {
        parses_finite(&rest.replace(',', ""))
    } else {
        parses_finite(&trimmed.replace(',', ""))
    }
}

/// Normalize raw price text to a plain decimal string.
///
/// Percentage, discount and "no ..." entries are non-monetary and map to
/// "0", as does anything that fails to parse once `$` and thousands
/// separators are stripped. Parseable values keep their digits exactly
/// as written.
pub fn normalize_price(raw: &str) -> String {
    let trimmed = raw.trim().to_lowercase();

    if trimmed.contains('%') || trimmed.contains("discount") || trimmed.contains("no") {
        return "0".to_string();
    }

    let cleaned: String = trimmed
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();

    if cleaned.is_empty() || !parses_finite(&cleaned) {
        "0".to_string()
    } else {
        cleaned
    }
}

fn parses_finite(s: &str) -> bool {
    s.parse::<f64>().map(f64::is_finite).unwrap_or(false)
}
