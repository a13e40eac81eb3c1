//! Session event sinks.

use anyhow::Result;
use async_trait::async_trait;
use ps_core::ports::SessionEventPort;
use ps_core::SessionEvent;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Writes session events to the tracing pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSessionEvents;

#[async_trait]
impl SessionEventPort for TracingSessionEvents {
    async fn emit(&self, event: SessionEvent) -> Result<()> {
        match &event {
            SessionEvent::LoadingChanged { loading } => debug!(loading, "session.loading"),
            SessionEvent::PageLoaded {
                page,
                record_count,
                total_records,
            } => info!(page, record_count, total_records, "session.page_loaded"),
            SessionEvent::SelectionChanged { selected_count } => {
                debug!(selected_count, "session.selection_changed")
            }
            SessionEvent::BulkFillCompleted {
                requested,
                selected,
                completion,
            } => {
                if completion.is_complete() {
                    info!(requested, selected, ?completion, "session.bulk_fill_completed")
                } else {
                    warn!(requested, selected, ?completion, "session.bulk_fill_completed")
                }
            }
        }
        Ok(())
    }
}

/// Forwards session events to a rendering task over an unbounded channel.
#[derive(Debug, Clone)]
pub struct ChannelSessionEvents {
    tx: mpsc::UnboundedSender<SessionEvent>,
}

impl ChannelSessionEvents {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<SessionEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

#[async_trait]
impl SessionEventPort for ChannelSessionEvents {
    async fn emit(&self, event: SessionEvent) -> Result<()> {
        self.tx
            .send(event)
            .map_err(|e| anyhow::anyhow!("session event receiver dropped: {:?}", e.0))
    }
}

/// Delivers every event to each sink in order.
///
/// A failing sink is logged and skipped; the remaining sinks still see the event.
#[derive(Clone, Default)]
pub struct FanOutSessionEvents {
    sinks: Vec<Arc<dyn SessionEventPort>>,
}

impl FanOutSessionEvents {
    pub fn new(sinks: Vec<Arc<dyn SessionEventPort>>) -> Self {
        Self { sinks }
    }
}

#[async_trait]
impl SessionEventPort for FanOutSessionEvents {
    async fn emit(&self, event: SessionEvent) -> Result<()> {
        for sink in &self.sinks {
            if let Err(err) = sink.emit(event.clone()).await {
                warn!(error = %err, "Session event sink failed");
            }
        }
        Ok(())
    }
}
