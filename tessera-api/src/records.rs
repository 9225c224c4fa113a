//! Single-record create/update/delete bodies.

use serde::{Deserialize, Serialize};

use crate::record::{Fields, Record};

/// Body of a single-record create or update call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordBody {
    /// The field values to write.
    pub fields: Fields,
}

/// Payload of responses that return one record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordData {
    /// The affected record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<Record>,
}

/// Payload of a delete response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteRecordData {
    /// Whether the record was deleted.
    #[serde(default)]
    pub deleted: bool,
    /// Id of the deleted record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
}
