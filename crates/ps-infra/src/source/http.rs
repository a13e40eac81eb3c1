//! Record source over a paged JSON collection endpoint.
//!
//! Wire shape: `GET {base_url}?page={page}&limit={size}[&fields=a,b]` answering
//! `{ "data": [ {...} ], "pagination": { "total": n } }`.

use async_trait::async_trait;
use ps_core::config::SourceConfig;
use ps_core::page::{Page, PageRequest};
use ps_core::ports::{RecordSourceError, RecordSourcePort};
use ps_core::{Record, RecordId};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct CollectionResponse {
    data: Vec<Map<String, Value>>,
    pagination: PaginationInfo,
}

#[derive(Debug, Deserialize)]
struct PaginationInfo {
    total: u64,
}

pub struct HttpRecordSource {
    client: reqwest::Client,
    base_url: String,
    fields: Vec<String>,
}

impl HttpRecordSource {
    /// Build a source from configuration. The timeout and user agent apply to
    /// every request; an empty `fields` list keeps every field of a record.
    pub fn new(config: &SourceConfig) -> Result<Self, RecordSourceError> {
        let mut builder = reqwest::Client::builder().timeout(config.timeout());
        if !config.user_agent.is_empty() {
            builder = builder.user_agent(config.user_agent.clone());
        }
        let client = builder
            .build()
            .map_err(|e| RecordSourceError::Transport(format!("failed to build client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            fields: config.fields.clone(),
        })
    }

    fn query(&self, request: PageRequest) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("page", request.page().to_string()),
            ("limit", request.page_size().to_string()),
        ];
        if !self.fields.is_empty() {
            // `id` is always needed for identity, whatever the projection.
            let mut fields = vec!["id".to_string()];
            fields.extend(self.fields.iter().filter(|f| *f != "id").cloned());
            query.push(("fields", fields.join(",")));
        }
        query
    }
}

#[async_trait]
impl RecordSourcePort for HttpRecordSource {
    async fn fetch_page(&self, request: PageRequest) -> Result<Page, RecordSourceError> {
        debug!(
            url = %self.base_url,
            page = request.page(),
            limit = request.page_size(),
            "Requesting page"
        );

        let response = self
            .client
            .get(&self.base_url)
            .query(&self.query(request))
            .send()
            .await
            .map_err(|e| RecordSourceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), url = %response.url(), "Page request rejected");
            return Err(RecordSourceError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| RecordSourceError::Transport(e.to_string()))?;

        decode_page(request, &body, &self.fields)
    }
}

/// Decode one collection response into a [`Page`] tagged with `request`.
///
/// `id` may be a JSON number or string. With a non-empty `fields` projection
/// only those keys are kept as display fields.
pub fn decode_page(
    request: PageRequest,
    body: &str,
    fields: &[String],
) -> Result<Page, RecordSourceError> {
    let response: CollectionResponse =
        serde_json::from_str(body).map_err(|e| RecordSourceError::Decode(e.to_string()))?;

    let records = response
        .data
        .into_iter()
        .map(|item| decode_record(item, fields))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Page::new(request.page(), records, response.pagination.total))
}

fn decode_record(mut item: Map<String, Value>, fields: &[String]) -> Result<Record, RecordSourceError> {
    let id = match item.remove("id") {
        Some(Value::Number(n)) => RecordId::from_string(n.to_string()),
        Some(Value::String(s)) if !s.is_empty() => RecordId::from_string(s),
        Some(other) => {
            return Err(RecordSourceError::Decode(format!(
                "record id must be a number or non-empty string, got {other}"
            )))
        }
        None => return Err(RecordSourceError::Decode("record without id".to_string())),
    };

    let fields = if fields.is_empty() {
        item
    } else {
        fields
            .iter()
            .filter_map(|name| item.remove(name).map(|value| (name.clone(), value)))
            .collect()
    };

    Ok(Record { id, fields })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn projection() -> Vec<String> {
        vec!["title".to_string(), "date_start".to_string()]
    }

    #[test]
    fn test_decode_page_keeps_projected_fields() {
        let body = json!({
            "pagination": { "total": 128194, "limit": 2, "current_page": 1 },
            "data": [
                { "id": 27992, "title": "A Sunday on La Grande Jatte", "date_start": 1884, "image_id": "x" },
                { "id": "abc", "title": "Untitled" }
            ]
        })
        .to_string();

        let page = decode_page(PageRequest::new(1, 2).unwrap(), &body, &projection()).unwrap();

        assert_eq!(page.index, 1);
        assert_eq!(page.total_count, 128194);
        assert_eq!(page.records[0].id, RecordId::from("27992"));
        assert_eq!(page.records[0].fields.len(), 2);
        assert!(page.records[0].field("image_id").is_none());
        assert_eq!(page.records[1].id, RecordId::from("abc"));
        assert_eq!(page.records[1].field_text("title").as_deref(), Some("Untitled"));
        assert!(page.records[1].field("date_start").is_none());
    }

    #[test]
    fn test_decode_page_without_projection_keeps_everything() {
        let body = json!({
            "pagination": { "total": 1 },
            "data": [{ "id": 1, "title": "T", "extra": true }]
        })
        .to_string();

        let page = decode_page(PageRequest::new(1, 10).unwrap(), &body, &[]).unwrap();

        assert_eq!(page.records[0].fields.len(), 2);
        assert!(page.records[0].field("id").is_none());
    }

    #[test]
    fn test_decode_page_rejects_missing_id() {
        let body = json!({
            "pagination": { "total": 1 },
            "data": [{ "title": "no id" }]
        })
        .to_string();

        let err = decode_page(PageRequest::new(1, 10).unwrap(), &body, &[]).unwrap_err();

        assert_eq!(err, RecordSourceError::Decode("record without id".to_string()));
    }

    #[test]
    fn test_decode_page_rejects_malformed_body() {
        let err = decode_page(PageRequest::new(1, 10).unwrap(), "{\"data\": []}", &[]).unwrap_err();
        assert!(matches!(err, RecordSourceError::Decode(_)));
    }

    #[test]
    fn test_query_always_requests_id() {
        let source = HttpRecordSource::new(&SourceConfig {
            base_url: "http://localhost/items".to_string(),
            timeout_secs: 1,
            user_agent: String::new(),
            fields: vec!["title".to_string(), "id".to_string()],
        })
        .unwrap();

        let query = source.query(PageRequest::new(3, 10).unwrap());

        assert_eq!(
            query,
            vec![
                ("page", "3".to_string()),
                ("limit", "10".to_string()),
                ("fields", "id,title".to_string()),
            ]
        );
    }
}
