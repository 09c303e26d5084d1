use crate::error::FeegridError;
use crate::extraction::{PageFragments, TextFragment, VerticalAxis};
use crate::model::RowGrid;

/// Fragments whose `y` lies within this distance of a row's representative
/// `y` are merged into that row.
const ROW_PROXIMITY: f32 = 5.0;

/// Group positioned text fragments into visual rows.
///
/// Per page: each fragment joins the first open row bucket whose
/// representative `y` is within [`ROW_PROXIMITY`] of its own, or opens a
/// new bucket keyed by its `y`. Buckets are then ordered top of page
/// first (direction given by `axis`) and fragments within a bucket left
/// to right. Rows of all pages are concatenated in page order.
///
/// The linear bucket scan is O(rows²) per page, fine at document-page
/// scale. A bucket's key stays at the `y` of the fragment that opened it,
/// so rows can drift on pages with gradual vertical skew; that
/// approximation is intentional.
pub fn reconstruct_rows(
    pages: &[PageFragments],
    axis: VerticalAxis,
) -> Result<RowGrid, FeegridError> {
    let mut grid: RowGrid = Vec::new();

    for page in pages {
        let rows = reconstruct_page(page, axis);
        log::debug!(
            "page {}: {} fragments grouped into {} rows",
            page.page_number,
            page.fragments.len(),
            rows.len()
        );
        grid.extend(rows);
    }

    if grid.is_empty() {
        return Err(FeegridError::NoTextContent);
    }

    Ok(grid)
}

fn reconstruct_page(page: &PageFragments, axis: VerticalAxis) -> RowGrid {
    let mut buckets: Vec<(f32, Vec<&TextFragment>)> = Vec::new();

    for fragment in &page.fragments {
        match buckets
            .iter()
            .position(|(key, _)| (key - fragment.y).abs() < ROW_PROXIMITY)
        {
            Some(i) => buckets[i].1.push(fragment),
            None => buckets.push((fragment.y, vec![fragment])),
        }
    }

    // Top of page first. Stable sorts, so equal keys keep emission order.
    match axis {
        VerticalAxis::BottomUp => buckets.sort_by(|a, b| b.0.total_cmp(&a.0)),
        VerticalAxis::TopDown => buckets.sort_by(|a, b| a.0.total_cmp(&b.0)),
    }

    buckets
        .into_iter()
        .map(|(_, mut members)| {
            members.sort_by(|a, b| a.x.total_cmp(&b.x));
            members
                .into_iter()
                .map(|f| f.text.trim().to_string())
                .collect()
        })
        .collect()
}
