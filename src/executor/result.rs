//! Result types for query execution

use crate::catalog::Record;

use super::paginator::PageWindow;

/// One filtered, sorted page of the catalog plus count metadata
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPage {
    /// At most `limit` records, in result order
    pub records: Vec<Record>,
    /// Matches after filtering, before pagination
    pub total: usize,
    pub offset: usize,
    pub limit: usize,
    /// 1-based
    pub page_index: usize,
    pub page_count: usize,
}

impl ResultPage {
    pub fn new(records: Vec<Record>, window: PageWindow) -> Self {
        Self {
            records,
            total: window.total,
            offset: window.offset,
            limit: window.limit,
            page_index: window.page_index,
            page_count: window.page_count,
        }
    }

    /// Returns true if this page holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of records on this page
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_page() {
        let page = ResultPage::new(Vec::new(), PageWindow::new(0, 10, 0));
        assert!(page.is_empty());
        assert_eq!(page.len(), 0);
        assert_eq!(page.page_count, 0);
        assert_eq!(page.page_index, 1);
    }
}
