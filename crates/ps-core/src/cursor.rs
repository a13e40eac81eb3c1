//! Page cursor state.

use serde::{Deserialize, Serialize};

use crate::page::{PageRequest, PageRequestError};

/// The `(offset, page_size)` window currently displayed, plus the total record
/// count cached from the most recent successful fetch.
///
/// Lives only for one session. Mutated only through [`CursorState::commit`],
/// which the session calls after a page fetch succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorState {
    offset: u64,
    page_size: u32,
    total_records: u64,
}

impl CursorState {
    pub fn new(default_page_size: u32) -> Self {
        Self {
            offset: 0,
            page_size: default_page_size,
            total_records: 0,
        }
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    /// 1-based number of the displayed page.
    pub fn page_number(&self) -> u32 {
        page_number_for_offset(self.offset, self.page_size)
    }

    /// Number of pages implied by the cached total, at least 1.
    pub fn page_count(&self) -> u64 {
        if self.page_size == 0 {
            return 1;
        }
        self.total_records
            .div_ceil(u64::from(self.page_size))
            .max(1)
    }

    /// Request for the displayed window.
    pub fn request(&self) -> Result<PageRequest, PageRequestError> {
        PageRequest::new(self.page_number(), self.page_size)
    }

    pub fn commit(&mut self, request: PageRequest, total_records: u64) {
        self.offset = request.offset();
        self.page_size = request.page_size();
        self.total_records = total_records;
    }
}

/// Map a paginator offset to the 1-based page holding it.
pub fn page_number_for_offset(offset: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 1;
    }
    let page = offset / u64::from(page_size) + 1;
    u32::try_from(page).unwrap_or(u32::MAX)
}
