use thiserror::Error;

/// Failure reported by a record source. The caller decides the policy; sources
/// never retry on their own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordSourceError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("malformed page payload: {0}")]
    Decode(String),
}
