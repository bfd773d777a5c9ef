//! Pagination of listing results

use serde::Serialize;

use super::filter::FilterParams;

/// One page of results, carrying the filters that produced it so the
/// neighbouring pages can be requested with the same parameters
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub params: FilterParams,
}

impl<T> Page<T> {
    /// Cut a fully ordered result set down to one page
    ///
    /// Page numbers below 1 are treated as 1. A page past the end is empty,
    /// including one whose offset does not fit in a `usize`.
    pub fn paginate(all: Vec<T>, page: usize, per_page: usize, params: FilterParams) -> Self {
        let per_page = per_page.max(1);
        let page = page.max(1);
        let total_items = all.len();
        let offset = (page - 1).checked_mul(per_page).unwrap_or(usize::MAX);

        let items = all
            .into_iter()
            .skip(offset)
            .take(per_page)
            .collect();

        Self {
            items,
            page,
            per_page,
            total_items,
            params,
        }
    }

    /// Number of pages (at least 1, even when empty)
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.per_page).max(1)
    }

    pub fn next_page(&self) -> Option<usize> {
        (self.page < self.total_pages()).then_some(self.page + 1)
    }

    pub fn prev_page(&self) -> Option<usize> {
        (self.page > 1).then(|| (self.page - 1).min(self.total_pages()))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate_first_page() {
        let page = Page::paginate((1..=25).collect(), 1, 10, FilterParams::default());
        assert_eq!(page.items, (1..=10).collect::<Vec<_>>());
        assert_eq!(page.total_pages(), 3);
        assert_eq!(page.next_page(), Some(2));
        assert_eq!(page.prev_page(), None);
    }

    #[test]
    fn test_paginate_last_partial_page() {
        let page = Page::paginate((1..=25).collect(), 3, 10, FilterParams::default());
        assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
        assert_eq!(page.next_page(), None);
        assert_eq!(page.prev_page(), Some(2));
    }

    #[test]
    fn test_paginate_past_end_is_empty() {
        let page = Page::paginate((1..=5).collect::<Vec<i32>>(), 4, 10, FilterParams::default());
        assert!(page.is_empty());
        assert_eq!(page.total_pages(), 1);
        assert_eq!(page.prev_page(), Some(1));
    }

    #[test]
    fn test_paginate_huge_page_number() {
        let page = Page::paginate(vec![1, 2, 3], usize::MAX, 10, FilterParams::default());
        assert!(page.is_empty());
        assert_eq!(page.total_items, 3);
        assert_eq!(page.next_page(), None);
        assert_eq!(page.prev_page(), Some(1));

        let page = Page::paginate(vec![1, 2, 3], 2, usize::MAX, FilterParams::default());
        assert!(page.is_empty());
        assert_eq!(page.total_pages(), 1);
    }

    #[test]
    fn test_page_keeps_params() {
        let params = FilterParams {
            nome: Some("Rent".into()),
            ..Default::default()
        };
        let page = Page::paginate(vec![1, 2, 3], 0, 10, params.clone());
        assert_eq!(page.page, 1);
        assert_eq!(page.params, params);
    }
}
