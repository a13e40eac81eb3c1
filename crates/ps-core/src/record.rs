//! Remote record snapshot.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ids::RecordId;

/// One item of the remote collection.
///
/// Identity is defined solely by [`Record::id`]. Display fields are whatever the
/// source returned for this fetch; two fetches of the same record may differ in
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl Record {
    pub fn new(id: impl Into<RecordId>) -> Self {
        Self {
            id: id.into(),
            fields: Map::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Render a display field as plain text.
    ///
    /// Strings are returned unquoted, `null` and missing fields yield `None`.
    pub fn field_text(&self, name: &str) -> Option<String> {
        match self.fields.get(name)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}
