use once_cell::sync::Lazy;
use regex::Regex;

use crate::parsing::price::is_price_cell;

/// One uppercase letter followed by exactly four digits, anywhere in the
/// text (e.g. "D1234", but also "D1234 prophylaxis").
pub fn contains_procedure_code(text: &str) -> bool {
    static CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z][0-9]{4}").unwrap());
    CODE_RE.is_match(text)
}

/// Pick the code and price columns by counting matching cells per column
/// across the whole grid.
///
/// Returns, for each role, the first column index attaining the maximum
/// count. `None` only when the grid has no columns at all.
pub fn score_columns(grid: &[Vec<String>]) -> (Option<usize>, Option<usize>) {
    let width = grid.iter().map(|row| row.len()).max().unwrap_or(0);
    if width == 0 {
        return (None, None);
    }

    let mut code_counts = vec![0usize; width];
    let mut price_counts = vec![0usize; width];

    for row in grid {
        for (col, cell) in row.iter().enumerate() {
            let cell = cell.trim();
            if contains_procedure_code(cell) {
                code_counts[col] += 1;
            }
            if is_price_cell(cell) {
                price_counts[col] += 1;
            }
        }
    }

    (first_max(&code_counts), first_max(&price_counts))
}

/// Index of the first occurrence of the maximum value.
fn first_max(counts: &[usize]) -> Option<usize> {
    let max = *counts.iter().max()?;
    counts.iter().position(|&c| c == max)
}
