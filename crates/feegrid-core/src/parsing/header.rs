/// Header keywords naming the procedure-code column.
const CODE_KEYWORDS: [&str; 4] = ["ada", "code", "procedure", "cdt"];

/// Header keywords naming the price column.
const PRICE_KEYWORDS: [&str; 5] = ["fee", "price", "allowance", "rate", "amount"];

/// Find the first row that names both a code column and a price column
/// (case-insensitive substring match on trimmed cells).
pub fn find_header_row(grid: &[Vec<String>]) -> Option<usize> {
    grid.iter().position(|row| {
        contains_keyword(row, &CODE_KEYWORDS) && contains_keyword(row, &PRICE_KEYWORDS)
    })
}

fn contains_keyword(row: &[String], keywords: &[&str]) -> bool {
    row.iter().any(|cell| {
        let cell = cell.trim().to_lowercase();
        keywords.iter().any(|kw| cell.contains(kw))
    })
}

/// Column indices named by a header row: (code column, price column).
///
/// Cells are checked in order, code keywords before price keywords, and
/// a later match overwrites an earlier one. A single cell can name both
/// roles.
pub fn assign_columns(header: &[String]) -> (Option<usize>, Option<usize>) {
    let mut code_col = None;
    let mut price_col = None;

    for (i, cell) in header.iter().enumerate() {
        let cell = cell.trim().to_lowercase();
        if CODE_KEYWORDS.iter().any(|kw| cell.contains(kw)) {
            code_col = Some(i);
        }
        if PRICE_KEYWORDS.iter().any(|kw| cell.contains(kw)) {
            price_col = Some(i);
        }
    }

    (code_col, price_col)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_first_qualifying_row_wins() {
        let grid = vec![
            row(&["Smile Dental Group", "2024"]),
            row(&["Procedure", "Fee"]),
            row(&["CDT Code", "Allowance"]),
        ];
        assert_eq!(find_header_row(&grid), Some(1));
    }

    #[test]
    fn test_both_keyword_kinds_are_required() {
        let grid = vec![row(&["Procedure", "Description"]), row(&["D1110", "120"])];
        assert_eq!(find_header_row(&grid), None);
    }

    #[test]
    fn test_match_is_case_insensitive_substring() {
        let grid = vec![row(&["ADA CODE", "Fee Schedule Amount"])];
        assert_eq!(find_header_row(&grid), Some(0));
    }

    #[test]
    fn test_assign_columns_basic() {
        let header = row(&["Procedure", "Description", "Fee"]);
        assert_eq!(assign_columns(&header), (Some(0), Some(2)));
    }

    #[test]
    fn test_assign_columns_last_match_wins() {
        let header = row(&["Code", "Fee", "Amount"]);
        assert_eq!(assign_columns(&header), (Some(0), Some(2)));
    }

    #[test]
    fn test_one_cell_can_name_both_roles() {
        let header = row(&["Code / Fee", "Notes"]);
        assert_eq!(assign_columns(&header), (Some(0), Some(0)));
    }

    #[test]
    fn test_no_keywords_no_assignment() {
        let header = row(&["D1110", "120"]);
        assert_eq!(assign_columns(&header), (None, None));
    }
}
