//! Builds the record source and event sinks and hands back a ready session.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use ps_app::BrowseSession;
use ps_core::ports::{RecordSourcePort, SessionEventPort};
use ps_core::{BrowseConfig, SessionEvent};
use ps_infra::source::demo_artworks;
use ps_infra::{
    ChannelSessionEvents, FanOutSessionEvents, HttpRecordSource, InMemoryRecordSource,
    TracingSessionEvents,
};
use tokio::sync::mpsc;
use tracing::info;

const DEMO_LATENCY: Duration = Duration::from_millis(150);

pub struct WiredSession {
    pub session: BrowseSession,
    /// Events for the interactive shell. Tracing receives the same events.
    pub events: mpsc::UnboundedReceiver<SessionEvent>,
}

/// `demo_records` selects an in-memory collection of that size instead of
/// the configured HTTP endpoint.
pub fn wire_session(config: &BrowseConfig, demo_records: Option<usize>) -> anyhow::Result<WiredSession> {
    let source: Arc<dyn RecordSourcePort> = match demo_records {
        Some(count) => {
            info!(records = count, "Using in-memory demo collection");
            Arc::new(InMemoryRecordSource::new(demo_artworks(count)).with_latency(DEMO_LATENCY))
        }
        None => {
            info!(url = %config.source.base_url, "Using HTTP collection");
            Arc::new(
                HttpRecordSource::new(&config.source)
                    .context("Failed to create HTTP record source")?,
            )
        }
    };

    let (channel, rx) = ChannelSessionEvents::channel();
    let sinks: Vec<Arc<dyn SessionEventPort>> = vec![Arc::new(TracingSessionEvents), Arc::new(channel)];
    let events = Arc::new(FanOutSessionEvents::new(sinks));

    Ok(WiredSession {
        session: BrowseSession::new(source, events, &config.paging),
        events: rx,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_session_forwards_events_to_channel() {
        let config = BrowseConfig::with_defaults();
        let WiredSession { mut session, mut events } = wire_session(&config, Some(3)).unwrap();

        session.start().await.unwrap();

        assert_eq!(
            events.recv().await,
            Some(SessionEvent::LoadingChanged { loading: true })
        );
        assert_eq!(
            events.recv().await,
            Some(SessionEvent::LoadingChanged { loading: false })
        );
        assert_eq!(
            events.recv().await,
            Some(SessionEvent::PageLoaded {
                page: 1,
                record_count: 3,
                total_records: 3
            })
        );
    }

    #[test]
    fn test_http_session_uses_configured_page_size() {
        let mut config = BrowseConfig::with_defaults();
        config.paging.default_page_size = 25;

        let wired = wire_session(&config, None).unwrap();

        assert_eq!(wired.session.cursor().page_size(), 25);
        assert!(wired.session.current_page().is_none());
    }
}
