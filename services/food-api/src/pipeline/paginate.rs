//! Page slicing

use crate::catalog::CatalogItem;

/// One page of an ordered result
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub items: Vec<CatalogItem>,
    /// Requested page, echoed even when past the end
    pub page: u64,
    pub limit: u32,
    /// Length of the full ordered result
    pub total: usize,
    pub total_pages: usize,
}

/// Slice page `page` of size `limit` out of `items`
///
/// `page` and `limit` are expected to be at least 1. A page past the end
/// is empty rather than an error.
pub fn paginate(items: Vec<CatalogItem>, page: u64, limit: u32) -> Page {
    let total = items.len();
    let per_page = limit.max(1) as usize;
    let offset = usize::try_from(page.max(1) - 1)
        .unwrap_or(usize::MAX)
        .saturating_mul(per_page);

    let items = items.into_iter().skip(offset).take(per_page).collect();

    Page {
        items,
        page,
        limit,
        total,
        total_pages: total_pages(total, per_page),
    }
}

/// Number of pages needed for `total` items, never less than 1
pub fn total_pages(total: usize, limit: usize) -> usize {
    if limit == 0 {
        return 1;
    }
    total.div_ceil(limit).max(1)
}
