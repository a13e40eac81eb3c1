use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Stable identity of a remote record.
///
/// Upstream collections hand out numeric ids, others use strings; both are
/// normalized to their textual form so `42` and `"42"` name the same record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(String);

impl_id!(RecordId);

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}
