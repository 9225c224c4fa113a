//! Keyed record updates.

use tessera_api::{ApiRequest, Fields, Record, RecordBody, RecordData, endpoints};

use crate::db::Db;
use crate::error::{QueryResult, ResponseError, ValidationError};
use crate::operations;

impl Db {
    /// Overwrite fields of the record with the given id.
    pub fn update(&self, record_id: &str, fields: Fields) -> QueryResult<Record> {
        let stmt = self.state()?;
        stmt.require_table()?;
        if record_id.is_empty() {
            return Err(ValidationError::RecordIdRequired.into());
        }

        let req = ApiRequest::put(endpoints::UPDATE_RECORD)
            .path_param("app_token", stmt.table.app_token.clone())
            .path_param("table_id", stmt.table.table_id.clone())
            .path_param("record_id", record_id)
            .query("user_id_type", stmt.user_id_type.as_str())
            .json(&RecordBody { fields });
        let resp = self.transport().execute(req)?;
        let data: RecordData = operations::decode(&resp)?;

        data.record
            .ok_or_else(|| ResponseError::MissingData.into())
    }
}
