//! Fixed-size page windowing and pager data for the directory views.

use serde::Serialize;

/// Server-enforced page size. Query parameters may ask for a different size
/// but are never honored.
pub const PAGE_SIZE: usize = 10;

/// `(limit, offset)` window for a one-based page number.
pub fn page_window(page: usize) -> (i64, i64) {
    let page = if page == 0 { 1 } else { page } as i64;
    let per_page = PAGE_SIZE as i64;

    (per_page, (page - 1) * per_page)
}

fn page_links(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// A page of items plus the pager rendered under the results table.
/// `None` entries mark the gaps shown as ellipses.
#[derive(Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };

        let pages = page_links(total_pages, current_page, 2, 2, 4, 2);

        Self {
            items,
            pages,
            page: current_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_math_follows_page_size() {
        assert_eq!(page_window(1), (10, 0));
        assert_eq!(page_window(3), (10, 20));
        assert_eq!(page_window(0), (10, 0));
    }

    #[test]
    fn no_pages_for_empty_result() {
        let paginated: Paginated<i32> = Paginated::new(vec![], 1, 0);
        assert!(paginated.pages.is_empty());
        assert_eq!(paginated.page, 1);
    }

    #[test]
    fn short_pager_lists_every_page() {
        let paginated: Paginated<i32> = Paginated::new(vec![], 2, 3);
        assert_eq!(paginated.pages, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn long_pager_elides_middle_pages() {
        let paginated: Paginated<i32> = Paginated::new(vec![], 10, 20);
        assert!(paginated.pages.contains(&None));
        assert!(paginated.pages.contains(&Some(1)));
        assert!(paginated.pages.contains(&Some(10)));
        assert!(paginated.pages.contains(&Some(20)));
    }
}
