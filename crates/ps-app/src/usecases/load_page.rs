use std::sync::Arc;

use ps_core::page::{Page, PageRequest};
use ps_core::ports::RecordSourcePort;
use tracing::{debug, warn};

use crate::error::{SessionError, ValidationError};

/// Use case for fetching one page of the remote collection
pub struct LoadPage {
    source: Arc<dyn RecordSourcePort>,
    max_page_size: u32,
}

impl LoadPage {
    pub fn new(source: Arc<dyn RecordSourcePort>, max_page_size: u32) -> Self {
        Self {
            source,
            max_page_size,
        }
    }

    pub fn max_page_size(&self) -> u32 {
        self.max_page_size
    }

    /// Build a request for `page` at `page_size`, rejecting sizes outside
    /// `1..=max_page_size` without touching the source.
    pub fn request(&self, page: u32, page_size: u32) -> Result<PageRequest, ValidationError> {
        if page_size == 0 || page_size > self.max_page_size {
            return Err(ValidationError::InvalidPageSize {
                size: page_size,
                max: self.max_page_size,
            });
        }
        PageRequest::new(page, page_size).map_err(|_| ValidationError::InvalidPageNumber(page))
    }

    /// Fetch one page. Errors are returned as-is; no retry.
    #[tracing::instrument(
        name = "usecase.load_page.execute",
        skip(self),
        fields(page = request.page(), page_size = request.page_size())
    )]
    pub async fn execute(&self, request: PageRequest) -> Result<Page, SessionError> {
        let mut page = self.source.fetch_page(request).await.map_err(|err| {
            warn!(error = %err, "Page fetch failed");
            SessionError::Fetch {
                page: request.page(),
                source: err,
            }
        })?;

        let limit = request.page_size() as usize;
        if page.records.len() > limit {
            warn!(
                returned = page.records.len(),
                limit, "Source returned more records than requested, truncating"
            );
            page.records.truncate(limit);
        }

        debug!(
            records = page.records.len(),
            total = page.total_count,
            "Page fetched"
        );
        Ok(page)
    }
}
