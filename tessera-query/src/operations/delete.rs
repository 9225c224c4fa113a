//! Keyed record deletion.

use tessera_api::{ApiRequest, DeleteRecordData, endpoints};

use crate::db::Db;
use crate::error::{QueryResult, ValidationError};
use crate::operations;

impl Db {
    /// Delete the record with the given id.
    pub fn delete(&self, record_id: &str) -> QueryResult<DeleteRecordData> {
        let stmt = self.state()?;
        stmt.require_table()?;
        if record_id.is_empty() {
            return Err(ValidationError::RecordIdRequired.into());
        }

        let req = ApiRequest::delete(endpoints::DELETE_RECORD)
            .path_param("app_token", stmt.table.app_token.clone())
            .path_param("table_id", stmt.table.table_id.clone())
            .path_param("record_id", record_id);
        let resp = self.transport().execute(req)?;

        operations::decode(&resp)
    }
}
