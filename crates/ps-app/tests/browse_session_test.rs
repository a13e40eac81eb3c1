use std::sync::Arc;

use ps_app::{BrowseSession, SessionError, ValidationError};
use ps_core::config::PagingConfig;
use ps_core::ports::NoopSessionEvents;
use ps_core::{FillCompletion, Record, RecordId};
use ps_infra::source::{demo_artworks, InMemoryRecordSource};

// ---------------------------------------------------------------------------
// Fixture: 25 records, pages of 10 (10, 10, 5)
// ---------------------------------------------------------------------------

fn paging() -> PagingConfig {
    PagingConfig {
        default_page_size: 10,
        max_page_size: 100,
    }
}

fn fixture(count: usize) -> (BrowseSession, Arc<InMemoryRecordSource>) {
    let source = Arc::new(InMemoryRecordSource::new(demo_artworks(count)));
    let session = BrowseSession::new(source.clone(), Arc::new(NoopSessionEvents), &paging());
    (session, source)
}

fn id(value: &str) -> RecordId {
    RecordId::from(value)
}

fn selected_ids(session: &BrowseSession) -> Vec<String> {
    let mut ids: Vec<String> = session
        .selection()
        .ids()
        .into_iter()
        .map(RecordId::into_inner)
        .collect();
    ids.sort_by_key(|id| id.parse::<u64>().unwrap_or(u64::MAX));
    ids
}

fn expected_ids(range: std::ops::RangeInclusive<u64>) -> Vec<String> {
    range.map(|n| n.to_string()).collect()
}

#[tokio::test]
async fn test_row_toggle_is_idempotent_pair() {
    let (mut session, _) = fixture(25);
    session.start().await.unwrap();
    let record = session.current_records()[3].clone();

    let before = session.is_selected(&record.id);
    session.on_row_checkbox_toggle(&record).await;
    session.on_row_checkbox_toggle(&record).await;

    assert_eq!(session.is_selected(&record.id), before);
}

#[tokio::test]
async fn test_selection_survives_navigation() {
    let (mut session, _) = fixture(25);
    session.start().await.unwrap();
    session.toggle_row(&id("4")).await.unwrap();

    session.go_to_page(2).await.unwrap();
    assert!(session.is_selected(&id("4")));
    assert!(session.rows().iter().all(|row| !row.selected));

    session.go_to_page(3).await.unwrap();
    session.go_to_page(1).await.unwrap();

    assert!(session.is_selected(&id("4")));
    let selected_rows: Vec<&str> = session
        .rows()
        .iter()
        .filter(|row| row.selected)
        .map(|row| row.record.id.as_str())
        .collect();
    assert_eq!(selected_rows, vec!["4"]);
}

#[tokio::test]
async fn test_bulk_fill_twelve_fetches_two_pages() {
    let (mut session, source) = fixture(25);

    let outcome = session.on_bulk_select_submit("12").await.unwrap();

    assert_eq!(source.requested_pages(), vec![1, 2]);
    assert_eq!(outcome.records.len(), 12);
    assert_eq!(outcome.completion, FillCompletion::Satisfied);
    assert_eq!(selected_ids(&session), expected_ids(1..=12));
}

#[tokio::test]
async fn test_bulk_submit_uses_leading_integer_of_input() {
    let (mut session, source) = fixture(25);

    let outcome = session.on_bulk_select_submit("12abc").await.unwrap();
    assert_eq!(outcome.requested, 12);
    assert_eq!(selected_ids(&session), expected_ids(1..=12));

    let outcome = session.on_bulk_select_submit("1.5").await.unwrap();
    assert_eq!(outcome.requested, 1);
    assert_eq!(selected_ids(&session), vec!["1".to_string()]);
    assert_eq!(source.requested_pages(), vec![1, 2, 1]);
}

#[tokio::test]
async fn test_bulk_fill_beyond_dataset_returns_everything() {
    let (mut session, source) = fixture(25);

    let outcome = session.on_bulk_select_submit("100").await.unwrap();

    assert_eq!(source.requested_pages(), vec![1, 2, 3]);
    assert_eq!(outcome.records.len(), 25);
    assert_eq!(outcome.completion, FillCompletion::Exhausted);
    assert_eq!(selected_ids(&session), expected_ids(1..=25));
}

#[tokio::test]
async fn test_bulk_fill_length_is_min_of_target_and_dataset() {
    for (target, dataset, expected) in [(1, 25, 1), (10, 25, 10), (25, 25, 25), (30, 7, 7), (3, 0, 0)] {
        let (mut session, _) = fixture(dataset);

        let outcome = session.bulk_select(target).await.unwrap();

        assert_eq!(
            outcome.records.len(),
            expected,
            "fill({target}) over {dataset} records"
        );
    }
}

#[tokio::test]
async fn test_bulk_fill_starts_at_page_one_regardless_of_cursor() {
    let (mut session, source) = fixture(25);
    session.go_to_page(3).await.unwrap();

    session.bulk_select(5).await.unwrap();

    assert_eq!(source.requested_pages(), vec![3, 1]);
    assert_eq!(selected_ids(&session), expected_ids(1..=5));
    // The displayed page is untouched by the fill.
    assert_eq!(session.cursor().page_number(), 3);
    assert_eq!(session.current_page().map(|p| p.index), Some(3));
}

#[tokio::test]
async fn test_bulk_fill_replaces_manual_selection() {
    let (mut session, _) = fixture(25);
    session.go_to_page(2).await.unwrap();
    session.toggle_row(&id("11")).await.unwrap();
    session.toggle_row(&id("12")).await.unwrap();

    session.bulk_select(1).await.unwrap();

    assert_eq!(selected_ids(&session), vec!["1".to_string()]);
    assert!(!session.is_selected(&id("11")));
    assert!(!session.is_selected(&id("12")));
}

#[tokio::test]
async fn test_invalid_bulk_input_performs_no_fetch() {
    let (mut session, source) = fixture(25);
    let manual = Record::new("99");
    session.on_row_checkbox_toggle(&manual).await;

    for input in ["0", "-5", "NaN", "", "ten"] {
        let err = session.on_bulk_select_submit(input).await.unwrap_err();
        assert!(
            matches!(
                err,
                SessionError::Validation(ValidationError::InvalidBulkCount { .. })
            ),
            "input {input:?}"
        );
    }
    let err = session.bulk_select(0).await.unwrap_err();
    assert!(err.is_validation());

    assert_eq!(source.fetch_count(), 0);
    assert_eq!(selected_ids(&session), vec!["99".to_string()]);
}

#[tokio::test]
async fn test_bulk_fill_keeps_partial_result_when_a_page_fails() {
    let (mut session, source) = fixture(25);
    source.fail_on_page(2);

    let outcome = session.bulk_select(15).await.unwrap();

    assert_eq!(outcome.records.len(), 10);
    assert!(outcome.is_short());
    assert!(matches!(
        outcome.completion,
        FillCompletion::Interrupted { page: 2, .. }
    ));
    assert_eq!(selected_ids(&session), expected_ids(1..=10));
    assert!(!session.is_loading());
}

#[tokio::test]
async fn test_failed_page_fetch_keeps_previous_page() {
    let (mut session, source) = fixture(25);
    session.start().await.unwrap();
    source.fail_on_page(2);

    let err = session.go_to_page(2).await.unwrap_err();

    assert!(matches!(err, SessionError::Fetch { page: 2, .. }));
    assert_eq!(session.current_page().map(|p| p.index), Some(1));
    assert_eq!(session.cursor().page_number(), 1);
    assert_eq!(session.total_records(), 25);
    assert!(!session.is_loading());

    // No automatic retry; the next explicit attempt succeeds once the source recovers.
    assert_eq!(source.requested_pages(), vec![1, 2]);
    source.clear_failures();
    session.go_to_page(2).await.unwrap();
    assert_eq!(session.cursor().page_number(), 2);
}

#[tokio::test]
async fn test_select_all_twice_restores_selection() {
    let (mut session, _) = fixture(25);
    session.start().await.unwrap();
    session.toggle_row(&id("2")).await.unwrap();
    session.go_to_page(2).await.unwrap();
    let before = selected_ids(&session);

    assert!(session.on_select_all_on_page().await);
    assert_eq!(session.selection().len(), 11);
    assert!(!session.on_select_all_on_page().await);

    assert_eq!(selected_ids(&session), before);
}

#[tokio::test]
async fn test_select_all_flag_is_session_wide() {
    let (mut session, _) = fixture(25);
    session.start().await.unwrap();
    assert!(session.on_select_all_on_page().await);

    // Moving on does not reset the flag: the next press removes page 2's rows,
    // none of which are selected.
    session.go_to_page(2).await.unwrap();
    assert!(session.select_all_active());
    assert!(!session.on_select_all_on_page().await);

    assert_eq!(selected_ids(&session), expected_ids(1..=10));
}

#[tokio::test]
async fn test_total_records_follows_upstream_changes() {
    let (mut session, source) = fixture(25);
    session.start().await.unwrap();
    assert_eq!(session.total_records(), 25);

    source.replace_records(demo_artworks(31));
    session.go_to_page(4).await.unwrap();

    assert_eq!(session.total_records(), 31);
    assert_eq!(session.cursor().page_count(), 4);
    assert_eq!(session.current_records().len(), 1);
}
