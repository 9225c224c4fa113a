//! Search request/response bodies for paginated record reads.

use serde::{Deserialize, Serialize};

use crate::filter::{FilterInfo, Sort};
use crate::record::Record;

/// Largest page size the search endpoint accepts.
pub const PAGE_SIZE_MAX: u32 = 500;

/// Body of one search-records call.
///
/// Optional members are omitted from the wire entirely when unset; the
/// filter in particular must be absent (not `null`, not empty) when no
/// condition has been accumulated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchRecordsBody {
    /// View to read from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_id: Option<String>,
    /// Restrict returned fields to these names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_names: Option<Vec<String>>,
    /// Sort list, applied in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sort: Vec<Sort>,
    /// Filter over the records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterInfo>,
    /// Whether service-computed fields are included in the response.
    pub automatic_fields: bool,
}

/// Payload of one search-records page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchRecordsData {
    /// Records of this page, in service order.
    #[serde(default)]
    pub items: Vec<Record>,
    /// Whether another page follows.
    #[serde(default)]
    pub has_more: bool,
    /// Continuation token for the next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
    /// Total number of matching records, when the service reports it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}
