//! Endpoint path templates.
//!
//! `:name` segments are substituted from [`ApiRequest`](crate::ApiRequest)
//! path params at render time.

/// Search records in a table (paginated POST).
pub const SEARCH_RECORDS: &str =
    "/open-apis/bitable/v1/apps/:app_token/tables/:table_id/records/search";

/// Fetch up to [`BATCH_GET_MAX`](crate::BATCH_GET_MAX) records by id.
pub const BATCH_GET_RECORDS: &str =
    "/open-apis/bitable/v1/apps/:app_token/tables/:table_id/records/batch_get";

/// Create one record.
pub const CREATE_RECORD: &str = "/open-apis/bitable/v1/apps/:app_token/tables/:table_id/records";

/// Create several records in one call.
pub const BATCH_CREATE_RECORDS: &str =
    "/open-apis/bitable/v1/apps/:app_token/tables/:table_id/records/batch_create";

/// Update one record by id.
pub const UPDATE_RECORD: &str =
    "/open-apis/bitable/v1/apps/:app_token/tables/:table_id/records/:record_id";

/// Delete one record by id.
pub const DELETE_RECORD: &str =
    "/open-apis/bitable/v1/apps/:app_token/tables/:table_id/records/:record_id";

/// Fetch app metadata.
pub const GET_APP: &str = "/open-apis/bitable/v1/apps/:app_token";

/// Resolve a wiki node to the object it wraps.
pub const GET_WIKI_NODE: &str = "/open-apis/wiki/v2/spaces/get_node";
