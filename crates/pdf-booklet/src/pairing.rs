//! Outside-in page pairing for saddle-stitch booklets

use crate::types::{BookletError, PagePair, Result};

/// Round a page count up to the next even number.
///
/// The delta (0 or 1) is the synthetic blank page a booklet needs when the
/// source has an odd number of pages. Padding is computed here and nowhere
/// else; consumers treat any index at or past the source count as blank.
pub fn effective_page_count(page_count: usize) -> usize {
    page_count + (page_count % 2)
}

/// Compute the (front, back) page pairs in booklet order.
///
/// The outermost pair comes first: sheet 1 carries the first and last
/// pages, sheet 2 the second and second-to-last, working inward. Yields
/// `effective_page_count(n) / 2` pairs, so an odd count produces a final
/// index that refers to the padded blank page.
pub fn compute_pairs(page_count: i64) -> Result<Vec<PagePair>> {
    if page_count < 0 {
        return Err(BookletError::InvalidPageCount(page_count));
    }

    let effective = effective_page_count(page_count as usize);
    Ok((0..effective / 2)
        .map(|i| PagePair::new(i, effective - 1 - i))
        .collect())
}
