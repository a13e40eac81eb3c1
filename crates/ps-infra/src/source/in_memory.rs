//! In-memory record source for demos and tests.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use ps_core::page::{Page, PageRequest};
use ps_core::ports::{RecordSourceError, RecordSourcePort};
use ps_core::Record;
use tracing::debug;

/// Serves pages from a dataset held in memory.
///
/// Failures can be injected per page, and the dataset can be swapped between
/// fetches to simulate an upstream collection that changes.
#[derive(Default)]
pub struct InMemoryRecordSource {
    records: Mutex<Vec<Record>>,
    failing_pages: Mutex<HashSet<u32>>,
    requests: Mutex<Vec<PageRequest>>,
    fetches: AtomicUsize,
    latency: Option<Duration>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl InMemoryRecordSource {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Self::default()
        }
    }

    /// Delay every fetch, to make the loading state observable.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Make every fetch of `page` fail with a transport error.
    pub fn fail_on_page(&self, page: u32) {
        lock(&self.failing_pages).insert(page);
    }

    pub fn clear_failures(&self) {
        lock(&self.failing_pages).clear();
    }

    pub fn replace_records(&self, records: Vec<Record>) {
        *lock(&self.records) = records;
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    /// Page numbers requested so far, in order.
    pub fn requested_pages(&self) -> Vec<u32> {
        lock(&self.requests).iter().map(|r| r.page()).collect()
    }
}

#[async_trait]
impl RecordSourcePort for InMemoryRecordSource {
    async fn fetch_page(&self, request: PageRequest) -> Result<Page, RecordSourceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        lock(&self.requests).push(request);

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        if lock(&self.failing_pages).contains(&request.page()) {
            return Err(RecordSourceError::Transport(format!(
                "injected failure on page {}",
                request.page()
            )));
        }

        let records = lock(&self.records);
        let page_records: Vec<Record> = records
            .iter()
            .skip(usize::try_from(request.offset()).unwrap_or(usize::MAX))
            .take(request.page_size() as usize)
            .cloned()
            .collect();
        debug!(
            page = request.page(),
            records = page_records.len(),
            "Serving in-memory page"
        );

        Ok(Page::new(request.page(), page_records, records.len() as u64))
    }
}

const DEMO_ARTISTS: &[(&str, &str)] = &[
    ("Georges Seurat", "France"),
    ("Edward Hopper", "United States"),
    ("Katsushika Hokusai", "Japan"),
    ("Frida Kahlo", "Mexico"),
    ("Rembrandt van Rijn", "Netherlands"),
    ("Hilma af Klint", "Sweden"),
];

/// Deterministic artwork-like records with ids `1..=count`.
pub fn demo_artworks(count: usize) -> Vec<Record> {
    (1..=count)
        .map(|n| {
            let (artist, origin) = DEMO_ARTISTS[(n - 1) % DEMO_ARTISTS.len()];
            let year = 1800 + (n as u64 * 7) % 200;
            Record::new(n as u64)
                .with_field("title", format!("Study No. {n}"))
                .with_field("place_of_origin", origin)
                .with_field("artist_display", artist)
                .with_field("inscriptions", serde_json::Value::Null)
                .with_field("date_start", year)
                .with_field("date_end", year + (n as u64 % 3))
        })
        .collect()
}
