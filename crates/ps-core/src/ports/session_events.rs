use anyhow::Result;
use async_trait::async_trait;

use crate::events::SessionEvent;

/// Receiver of session facts (loading flag, page loads, selection changes).
///
/// Emission failures are logged by the session and never abort the action
/// that produced the event.
#[async_trait]
pub trait SessionEventPort: Send + Sync {
    async fn emit(&self, event: SessionEvent) -> Result<()>;
}

/// Event port for sessions nobody observes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSessionEvents;

#[async_trait]
impl SessionEventPort for NoopSessionEvents {
    async fn emit(&self, _event: SessionEvent) -> Result<()> {
        Ok(())
    }
}
