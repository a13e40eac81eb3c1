//! Port interfaces for the application layer
//!
//! Ports define the contract between the session orchestration (use cases)
//! and infrastructure implementations: where records come from and who is
//! told about state changes.

pub mod errors;
pub mod record_source;
pub mod session_events;

pub use errors::RecordSourceError;
pub use record_source::RecordSourcePort;
pub use session_events::{NoopSessionEvents, SessionEventPort};
