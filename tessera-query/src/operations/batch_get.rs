//! Batch reads by record id.

use tessera_api::{
    ApiRequest, BATCH_GET_MAX, BatchGetRecordsBody, BatchGetRecordsData, Record, endpoints,
};

use crate::db::Db;
use crate::error::{QueryResult, ValidationError};
use crate::operations;

impl Db {
    /// Fetch records by id, at most [`BATCH_GET_MAX`] per call.
    ///
    /// An empty id list is a validation error. A list longer than the
    /// service's per-call ceiling is truncated to the ceiling, which is
    /// documented service behavior and not an error.
    pub fn batch_get(
        &self,
        record_ids: impl IntoIterator<Item = impl Into<String>>,
    ) -> QueryResult<Vec<Record>> {
        let stmt = self.state()?;
        stmt.require_table()?;

        let mut record_ids: Vec<String> = record_ids.into_iter().map(Into::into).collect();
        if record_ids.is_empty() {
            return Err(ValidationError::EmptyRecordIds.into());
        }
        if record_ids.len() > BATCH_GET_MAX {
            tracing::warn!(
                supplied = record_ids.len(),
                ceiling = BATCH_GET_MAX,
                "truncating batch get to the per-call ceiling"
            );
            record_ids.truncate(BATCH_GET_MAX);
        }

        let body = BatchGetRecordsBody {
            record_ids,
            user_id_type: stmt.user_id_type.as_str().to_string(),
            automatic_fields: stmt.automatic_fields,
            field_names: stmt.selects.to_wire(),
            view_id: (!stmt.table.view_id.is_empty()).then(|| stmt.table.view_id.clone()),
        };
        let req = ApiRequest::post(endpoints::BATCH_GET_RECORDS)
            .path_param("app_token", stmt.table.app_token.clone())
            .path_param("table_id", stmt.table.table_id.clone())
            .json(&body);
        let resp = self.transport().execute(req)?;
        let data: BatchGetRecordsData = operations::decode(&resp)?;

        Ok(data.records)
    }
}
