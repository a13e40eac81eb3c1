use async_trait::async_trait;

use crate::page::{Page, PageRequest};
use crate::ports::errors::RecordSourceError;

/// Remote collection paged by index and size.
///
/// Implementations return at most `request.page_size()` records tagged with
/// `request.page()` and the total count the collection reported for this
/// fetch. An empty or short page means there is nothing beyond it.
#[async_trait]
pub trait RecordSourcePort: Send + Sync {
    async fn fetch_page(&self, request: PageRequest) -> Result<Page, RecordSourceError>;
}
