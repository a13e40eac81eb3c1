use mockito::Matcher;
use ps_core::config::SourceConfig;
use ps_core::page::PageRequest;
use ps_core::ports::{RecordSourceError, RecordSourcePort};
use ps_infra::HttpRecordSource;

fn source_for(server: &mockito::ServerGuard, fields: Vec<&str>) -> HttpRecordSource {
    HttpRecordSource::new(&SourceConfig {
        base_url: format!("{}/api/v1/artworks", server.url()),
        timeout_secs: 5,
        user_agent: "pagesel-test".to_string(),
        fields: fields.into_iter().map(String::from).collect(),
    })
    .unwrap()
}

#[tokio::test]
async fn test_fetch_page_sends_paging_query_and_decodes_records() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/artworks")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "2".into()),
            Matcher::UrlEncoded("limit".into(), "10".into()),
            Matcher::UrlEncoded("fields".into(), "id,title,artist_display".into()),
        ]))
        .match_header("user-agent", "pagesel-test")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "pagination": { "total": 25, "limit": 10, "current_page": 2 },
                "data": [
                    { "id": 11, "title": "Nighthawks", "artist_display": "Edward Hopper" },
                    { "id": 12, "title": "The Bedroom", "artist_display": "Vincent van Gogh" }
                ]
            }"#,
        )
        .create_async()
        .await;

    let source = source_for(&server, vec!["title", "artist_display"]);
    let page = source
        .fetch_page(PageRequest::new(2, 10).unwrap())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(page.index, 2);
    assert_eq!(page.total_count, 25);
    assert_eq!(page.len(), 2);
    assert_eq!(page.records[0].id.as_str(), "11");
    assert_eq!(
        page.records[1].field_text("artist_display").as_deref(),
        Some("Vincent van Gogh")
    );
}

#[tokio::test]
async fn test_fetch_page_reports_http_status() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v1/artworks")
        .match_query(Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let source = source_for(&server, vec![]);
    let err = source
        .fetch_page(PageRequest::new(1, 10).unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, RecordSourceError::Status { status: 503, .. }));
}

#[tokio::test]
async fn test_fetch_page_reports_malformed_payload() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v1/artworks")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let source = source_for(&server, vec![]);
    let err = source
        .fetch_page(PageRequest::new(1, 10).unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, RecordSourceError::Decode(_)));
}

#[tokio::test]
async fn test_fetch_page_reports_transport_errors() {
    let source = HttpRecordSource::new(&SourceConfig {
        // Reserved port on loopback; nothing listens there.
        base_url: "http://127.0.0.1:1/records".to_string(),
        timeout_secs: 2,
        user_agent: String::new(),
        fields: vec![],
    })
    .unwrap();

    let err = source
        .fetch_page(PageRequest::new(1, 10).unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, RecordSourceError::Transport(_)));
}
