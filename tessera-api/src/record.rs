//! Table records and their field maps.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A record's field map, keyed by field name.
///
/// Backed by an [`IndexMap`] so field order survives a round-trip.
pub type Fields = IndexMap<String, serde_json::Value>;

/// One table record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Service-assigned record identifier. Absent on records being created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
    /// The field values.
    #[serde(default)]
    pub fields: Fields,
    /// Creation time, milliseconds since epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_time: Option<i64>,
    /// Last modification time, milliseconds since epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_time: Option<i64>,
}

impl Record {
    /// A record carrying only `fields`, ready for a create call.
    pub fn new(fields: Fields) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    /// Look up a field value by name.
    pub fn field(&self, name: &str) -> Option<&serde_json::Value> {
        self.fields.get(name)
    }
}
