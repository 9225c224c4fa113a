//! Batch read/write bodies and their per-call ceilings.

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Largest number of record ids one batch-get call accepts.
pub const BATCH_GET_MAX: usize = 100;

/// Body of a batch-get call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchGetRecordsBody {
    /// Ids of the records to fetch, at most [`BATCH_GET_MAX`].
    pub record_ids: Vec<String>,
    /// Identity namespace for user-typed fields.
    pub user_id_type: String,
    /// Whether service-computed fields are included in the response.
    pub automatic_fields: bool,
    /// Restrict returned fields to these names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_names: Option<Vec<String>>,
    /// View to read from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_id: Option<String>,
}

/// Payload of a batch-get response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchGetRecordsData {
    /// The fetched records.
    #[serde(default)]
    pub records: Vec<Record>,
}

/// Body of a batch-create call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchCreateRecordsBody {
    /// The records to insert; only their field maps are sent.
    pub records: Vec<Record>,
}

/// Payload of responses that return a record list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordsData {
    /// The affected records.
    #[serde(default)]
    pub records: Vec<Record>,
}
