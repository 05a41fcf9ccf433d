//! Offset/limit pagination

use crate::planner::DEFAULT_LIMIT;

/// Position and size metadata of one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Items before pagination
    pub total: usize,
    pub offset: usize,
    pub limit: usize,
    /// 1-based
    pub page_index: usize,
    /// 0 when there are no items
    pub page_count: usize,
}

impl PageWindow {
    /// Computes page metadata. A zero limit is replaced by the default.
    pub fn new(total: usize, limit: usize, offset: usize) -> Self {
        let limit = if limit == 0 { DEFAULT_LIMIT } else { limit };
        let page_count = if total == 0 { 0 } else { total.div_ceil(limit) };
        Self {
            total,
            offset,
            limit,
            page_index: offset / limit + 1,
            page_count,
        }
    }

    /// Index range of the page inside the full sequence, clamped to it
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = self.offset.min(self.total);
        let end = self.offset.saturating_add(self.limit).min(self.total);
        start..end
    }
}

pub struct Paginator;

impl Paginator {
    /// Slices `items` to one page. An offset past the end is an empty page.
    pub fn paginate<T>(items: &[T], limit: usize, offset: usize) -> (&[T], PageWindow) {
        let window = PageWindow::new(items.len(), limit, offset);
        (&items[window.range()], window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page() {
        let items: Vec<u32> = (0..25).collect();
        let (page, window) = Paginator::paginate(&items, 10, 0);
        assert_eq!(page, &items[0..10]);
        assert_eq!(window.total, 25);
        assert_eq!(window.page_index, 1);
        assert_eq!(window.page_count, 3);
    }

    #[test]
    fn test_last_partial_page() {
        let items: Vec<u32> = (0..25).collect();
        let (page, window) = Paginator::paginate(&items, 10, 20);
        assert_eq!(page, &[20, 21, 22, 23, 24]);
        assert_eq!(window.page_index, 3);
    }

    #[test]
    fn test_offset_past_end() {
        let items: Vec<u32> = (0..5).collect();
        let (page, window) = Paginator::paginate(&items, 10, 50);
        assert!(page.is_empty());
        assert_eq!(window.total, 5);
        assert_eq!(window.page_index, 6);
        assert_eq!(window.page_count, 1);
    }

    #[test]
    fn test_empty_has_zero_pages() {
        let items: Vec<u32> = Vec::new();
        let (page, window) = Paginator::paginate(&items, 3, 0);
        assert!(page.is_empty());
        assert_eq!(window.page_count, 0);
        assert_eq!(window.page_index, 1);
    }

    #[test]
    fn test_unaligned_offset() {
        let items: Vec<u32> = (0..10).collect();
        let (page, window) = Paginator::paginate(&items, 4, 5);
        assert_eq!(page, &[5, 6, 7, 8]);
        assert_eq!(window.page_index, 2);
    }

    #[test]
    fn test_zero_limit_uses_default() {
        let window = PageWindow::new(30, 0, 0);
        assert_eq!(window.limit, DEFAULT_LIMIT);
        assert_eq!(window.page_count, 3);
    }

    #[test]
    fn test_huge_offset_does_not_overflow() {
        let window = PageWindow::new(3, 10, usize::MAX);
        assert_eq!(window.range(), 3..3);
    }
}
