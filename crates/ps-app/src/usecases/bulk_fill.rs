use std::sync::Arc;

use ps_core::page::PageRequest;
use ps_core::ports::RecordSourcePort;
use ps_core::{FillCompletion, Record};
use tracing::{debug, info, info_span, warn, Instrument};

/// Upper bound on the accumulator's initial allocation.
const PREALLOC_LIMIT: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BulkFillError {
    #[error("Invalid target count: {0}. Must be at least 1")]
    InvalidCount(usize),

    #[error("Invalid page size: {0}. Must be at least 1")]
    InvalidPageSize(u32),
}

/// Result of a bulk fill: the first `requested` records of the collection, or
/// fewer when the source ran out or failed part way.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkFillOutcome {
    pub requested: usize,
    pub records: Vec<Record>,
    pub completion: FillCompletion,
    pub pages_fetched: u32,
}

impl BulkFillOutcome {
    /// Whether fewer records than requested were gathered.
    pub fn is_short(&self) -> bool {
        self.records.len() < self.requested
    }
}

/// Use case that gathers the first N records of the collection by walking
/// pages sequentially from page 1.
pub struct BulkFill {
    source: Arc<dyn RecordSourcePort>,
}

impl BulkFill {
    pub fn new(source: Arc<dyn RecordSourcePort>) -> Self {
        Self { source }
    }

    /// Accumulate records page by page until `target_count` is reached or the
    /// source returns an empty or short page, then truncate to `target_count`.
    ///
    /// Pages are fetched one at a time; each result decides whether another
    /// fetch is needed. A failing fetch ends the walk and keeps what was
    /// gathered, reported as [`FillCompletion::Interrupted`].
    ///
    /// # Errors
    ///
    /// Returns an error, before any fetch, if `target_count` or `page_size`
    /// is zero.
    pub async fn execute(
        &self,
        target_count: usize,
        page_size: u32,
    ) -> Result<BulkFillOutcome, BulkFillError> {
        if target_count == 0 {
            return Err(BulkFillError::InvalidCount(target_count));
        }
        let mut request =
            PageRequest::first(page_size).map_err(|_| BulkFillError::InvalidPageSize(page_size))?;

        let span = info_span!("usecase.bulk_fill.execute", target_count, page_size);

        async {
            info!("Starting bulk fill");

            let mut accumulated: Vec<Record> =
                Vec::with_capacity(target_count.min(PREALLOC_LIMIT));
            let mut pages_fetched = 0u32;

            let completion = loop {
                match self.source.fetch_page(request).await {
                    Ok(page) => {
                        pages_fetched += 1;
                        let short = page.is_short(page_size);
                        debug!(
                            page = request.page(),
                            records = page.records.len(),
                            "Accumulated page"
                        );
                        accumulated.extend(page.records);

                        if accumulated.len() >= target_count {
                            break FillCompletion::Satisfied;
                        }
                        if short {
                            break FillCompletion::Exhausted;
                        }
                        request = request.next();
                    }
                    Err(err) => {
                        warn!(
                            page = request.page(),
                            error = %err,
                            accumulated = accumulated.len(),
                            "Bulk fill interrupted, keeping partial result"
                        );
                        break FillCompletion::Interrupted {
                            page: request.page(),
                            reason: err.to_string(),
                        };
                    }
                }
            };

            accumulated.truncate(target_count);
            info!(
                selected = accumulated.len(),
                pages_fetched,
                ?completion,
                "Bulk fill finished"
            );

            Ok(BulkFillOutcome {
                requested: target_count,
                records: accumulated,
                completion,
                pages_fetched,
            })
        }
        .instrument(span)
        .await
    }
}
