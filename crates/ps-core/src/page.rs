//! Page request and page result types.

use serde::{Deserialize, Serialize};

use crate::record::Record;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageRequestError {
    #[error("page index must be at least 1")]
    ZeroPage,

    #[error("page size must be at least 1")]
    ZeroPageSize,
}

/// A request for one window of the remote collection.
///
/// `page` is 1-based. Both values are guaranteed positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl PageRequest {
    pub fn new(page: u32, page_size: u32) -> Result<Self, PageRequestError> {
        if page == 0 {
            return Err(PageRequestError::ZeroPage);
        }
        if page_size == 0 {
            return Err(PageRequestError::ZeroPageSize);
        }
        Ok(Self { page, page_size })
    }

    /// First page at the given size.
    pub fn first(page_size: u32) -> Result<Self, PageRequestError> {
        Self::new(1, page_size)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Zero-based offset of the first record this request covers.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }

    /// The request for the following page at the same size.
    pub fn next(&self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            page_size: self.page_size,
        }
    }
}

/// One fetched window of records.
///
/// `total_count` is what the source reported at fetch time; it is not
/// guaranteed stable across fetches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub index: u32,
    pub records: Vec<Record>,
    pub total_count: u64,
}

impl Page {
    pub fn new(index: u32, records: Vec<Record>, total_count: u64) -> Self {
        Self {
            index,
            records,
            total_count,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether this page holds fewer records than were asked for, meaning the
    /// collection has nothing beyond it.
    pub fn is_short(&self, page_size: u32) -> bool {
        self.records.len() < page_size as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_rejects_zero_values() {
        assert_eq!(PageRequest::new(0, 10), Err(PageRequestError::ZeroPage));
        assert_eq!(PageRequest::new(1, 0), Err(PageRequestError::ZeroPageSize));
    }

    #[test]
    fn test_request_offset_and_next() {
        let request = PageRequest::new(3, 10).unwrap();
        assert_eq!(request.offset(), 20);
        assert_eq!(request.next().page(), 4);
        assert_eq!(request.next().page_size(), 10);
    }

    #[test]
    fn test_short_page_detection() {
        let page = Page::new(3, vec![Record::new("1"), Record::new("2")], 22);
        assert!(page.is_short(10));
        assert!(!page.is_short(2));
        assert!(Page::new(4, vec![], 22).is_short(10));
    }
}
