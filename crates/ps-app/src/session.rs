//! Browse session: one user's view of a paged remote collection.
//!
//! The session owns the cursor, the displayed page, the selection set and the
//! page-select-all flag, and is the single entry point for UI events. Every
//! action takes `&mut self`, so a page change cannot start while a bulk fill is
//! in flight and two bulk fills can never overlap.

use std::sync::Arc;

use ps_core::config::PagingConfig;
use ps_core::page::{Page, PageRequest};
use ps_core::ports::{RecordSourcePort, SessionEventPort};
use ps_core::{
    CursorState, Record, RecordId, SelectAllToggle, SelectionStore, SessionEvent, SessionId,
};
use tracing::{debug, info, warn};

use crate::error::{SessionError, ValidationError};
use crate::usecases::bulk_fill::BulkFillError;
use crate::usecases::{parse_bulk_count, BulkFill, BulkFillOutcome, LoadPage};

/// One displayed row and whether it is selected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowView<'a> {
    pub record: &'a Record,
    pub selected: bool,
}

pub struct BrowseSession {
    id: SessionId,
    load_page: LoadPage,
    bulk_fill: BulkFill,
    events: Arc<dyn SessionEventPort>,
    cursor: CursorState,
    current_page: Option<Page>,
    selection: SelectionStore,
    select_all: SelectAllToggle,
    loading: bool,
}

impl BrowseSession {
    /// Create a session at `(0, default_page_size)` with an empty selection.
    /// Nothing is fetched until [`start`](Self::start) or a page change.
    pub fn new(
        source: Arc<dyn RecordSourcePort>,
        events: Arc<dyn SessionEventPort>,
        paging: &PagingConfig,
    ) -> Self {
        Self {
            id: SessionId::new(),
            load_page: LoadPage::new(source.clone(), paging.max_page_size),
            bulk_fill: BulkFill::new(source),
            events,
            cursor: CursorState::new(paging.default_page_size),
            current_page: None,
            selection: SelectionStore::new(),
            select_all: SelectAllToggle::default(),
            loading: false,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    // ---------------------------------------------------------------------
    // Display contract
    // ---------------------------------------------------------------------

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn total_records(&self) -> u64 {
        self.cursor.total_records()
    }

    pub fn cursor(&self) -> &CursorState {
        &self.cursor
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.current_page.as_ref()
    }

    pub fn current_records(&self) -> &[Record] {
        self.current_page
            .as_ref()
            .map(|page| page.records.as_slice())
            .unwrap_or(&[])
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.selection.is_selected(id)
    }

    pub fn select_all_active(&self) -> bool {
        self.select_all.is_active()
    }

    /// Rows of the displayed page with their selection state.
    pub fn rows(&self) -> Vec<RowView<'_>> {
        self.current_records()
            .iter()
            .map(|record| RowView {
                record,
                selected: self.selection.is_selected(&record.id),
            })
            .collect()
    }

    // ---------------------------------------------------------------------
    // Page cursor
    // ---------------------------------------------------------------------

    /// Load the first page at the default size.
    pub async fn start(&mut self) -> Result<&Page, SessionError> {
        info!(session_id = %self.id, "Starting browse session");
        self.go_to_page(1).await
    }

    /// Load `page_number` at the current page size.
    pub async fn go_to_page(&mut self, page_number: u32) -> Result<&Page, SessionError> {
        let request = self
            .load_page
            .request(page_number, self.cursor.page_size())?;
        self.load(request).await
    }

    /// Paginator event: show the page holding `new_offset` at `new_page_size`.
    pub async fn on_page_change(
        &mut self,
        new_offset: u64,
        new_page_size: u32,
    ) -> Result<&Page, SessionError> {
        // Validate the size first so a zero size never reaches the division.
        let request = self.load_page.request(1, new_page_size)?;
        let page_number = ps_core::cursor::page_number_for_offset(new_offset, new_page_size);
        let request = self.load_page.request(page_number, request.page_size())?;
        self.load(request).await
    }

    pub async fn next_page(&mut self) -> Result<&Page, SessionError> {
        let next = u64::from(self.cursor.page_number()) + 1;
        if self.current_page.is_some() && next > self.cursor.page_count() {
            return Err(ValidationError::NoNextPage.into());
        }
        let page_number = u32::try_from(next).map_err(|_| ValidationError::NoNextPage)?;
        self.go_to_page(page_number).await
    }

    pub async fn previous_page(&mut self) -> Result<&Page, SessionError> {
        let current = self.cursor.page_number();
        if current <= 1 {
            return Err(ValidationError::NoPreviousPage.into());
        }
        self.go_to_page(current - 1).await
    }

    /// Fetch `request` and make it the displayed page.
    ///
    /// On failure the displayed page and cursor are left untouched and the
    /// error is returned; the loading flag is cleared either way.
    async fn load(&mut self, request: PageRequest) -> Result<&Page, SessionError> {
        self.set_loading(true).await;
        let result = self.load_page.execute(request).await;
        self.set_loading(false).await;

        let page = match result {
            Ok(page) => page,
            Err(err) => {
                warn!(
                    session_id = %self.id,
                    page = request.page(),
                    error = %err,
                    "Keeping previous page after failed fetch"
                );
                return Err(err);
            }
        };

        self.cursor.commit(request, page.total_count);
        debug!(
            session_id = %self.id,
            page = page.index,
            records = page.len(),
            total = page.total_count,
            "Displayed page replaced"
        );
        self.emit(SessionEvent::PageLoaded {
            page: page.index,
            record_count: page.len(),
            total_records: page.total_count,
        })
        .await;

        Ok(&*self.current_page.insert(page))
    }

    // ---------------------------------------------------------------------
    // Selection
    // ---------------------------------------------------------------------

    /// Row checkbox event. Returns whether the record is selected afterwards.
    pub async fn on_row_checkbox_toggle(&mut self, record: &Record) -> bool {
        let selected = self.selection.toggle(record);
        debug!(session_id = %self.id, record_id = %record.id, selected, "Row toggled");
        self.emit_selection_changed().await;
        selected
    }

    /// Toggle a row of the displayed page by id.
    pub async fn toggle_row(&mut self, id: &RecordId) -> Result<bool, SessionError> {
        let record = self
            .current_records()
            .iter()
            .find(|record| &record.id == id)
            .cloned()
            .ok_or_else(|| ValidationError::RecordNotOnPage(id.to_string()))?;
        Ok(self.on_row_checkbox_toggle(&record).await)
    }

    /// Page-select-all event. Returns the new flag value.
    pub async fn on_select_all_on_page(&mut self) -> bool {
        let records = self
            .current_page
            .as_ref()
            .map(|page| page.records.as_slice())
            .unwrap_or(&[]);
        let active = self.select_all.apply(&mut self.selection, records);
        debug!(
            session_id = %self.id,
            active,
            page_records = records.len(),
            "Select all on page toggled"
        );
        self.emit_selection_changed().await;
        active
    }

    /// Bulk-select submit event: parse `count_text` and run a bulk fill.
    ///
    /// Invalid input is rejected with a validation error before any fetch.
    pub async fn on_bulk_select_submit(
        &mut self,
        count_text: &str,
    ) -> Result<BulkFillOutcome, SessionError> {
        let target_count = parse_bulk_count(count_text)?;
        self.bulk_select(target_count).await
    }

    /// Replace the selection with the first `target_count` records of the
    /// collection, fetched from page 1 at the current page size.
    ///
    /// A fetch failure part way is not an error: the records gathered so far
    /// still replace the selection and the outcome reports
    /// [`ps_core::FillCompletion::Interrupted`].
    pub async fn bulk_select(
        &mut self,
        target_count: usize,
    ) -> Result<BulkFillOutcome, SessionError> {
        if target_count == 0 {
            return Err(ValidationError::InvalidBulkCount {
                input: target_count.to_string(),
            }
            .into());
        }

        self.set_loading(true).await;
        let result = self
            .bulk_fill
            .execute(target_count, self.cursor.page_size())
            .await;
        self.set_loading(false).await;

        let outcome = result.map_err(|err| match err {
            BulkFillError::InvalidCount(count) => ValidationError::InvalidBulkCount {
                input: count.to_string(),
            },
            BulkFillError::InvalidPageSize(size) => ValidationError::InvalidPageSize {
                size,
                max: self.load_page.max_page_size(),
            },
        })?;

        self.selection.merge_many(outcome.records.iter().cloned());
        info!(
            session_id = %self.id,
            requested = target_count,
            selected = self.selection.len(),
            "Selection replaced by bulk fill"
        );
        self.emit_selection_changed().await;
        self.emit(SessionEvent::BulkFillCompleted {
            requested: outcome.requested,
            selected: outcome.records.len(),
            completion: outcome.completion.clone(),
        })
        .await;

        Ok(outcome)
    }

    // ---------------------------------------------------------------------
    // Events
    // ---------------------------------------------------------------------

    async fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        self.emit(SessionEvent::LoadingChanged { loading }).await;
    }

    async fn emit_selection_changed(&self) {
        self.emit(SessionEvent::SelectionChanged {
            selected_count: self.selection.len(),
        })
        .await;
    }

    async fn emit(&self, event: SessionEvent) {
        if let Err(err) = self.events.emit(event).await {
            warn!(session_id = %self.id, error = %err, "Failed to emit session event");
        }
    }
}
