use serde::{Deserialize, Serialize};

/// How a bulk fill ended.
///
/// Distinguishes a source that ran out of records from one that failed part
/// way, which the accumulated records alone cannot tell apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FillCompletion {
    /// The requested number of records was reached.
    Satisfied,
    /// The source returned an empty or short page before the target.
    Exhausted,
    /// Fetching `page` failed; records from earlier pages were kept.
    Interrupted { page: u32, reason: String },
}

impl FillCompletion {
    pub fn is_complete(&self) -> bool {
        !matches!(self, FillCompletion::Interrupted { .. })
    }
}
