//! Facts published by a browse session to its rendering layer.

use serde::{Deserialize, Serialize};

use crate::selection::FillCompletion;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A fetch started (`true`) or finished (`false`). Interaction should be
    /// suspended while loading.
    LoadingChanged { loading: bool },

    /// A page replaced the displayed one.
    PageLoaded {
        page: u32,
        record_count: usize,
        total_records: u64,
    },

    /// The selection set changed. Emitted once per user or bulk action.
    SelectionChanged { selected_count: usize },

    /// A bulk fill finished and its result replaced the selection.
    BulkFillCompleted {
        requested: usize,
        selected: usize,
        completion: FillCompletion,
    },
}
