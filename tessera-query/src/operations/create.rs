//! Record creation and the single/batch splitter.

use tessera_api::{
    ApiRequest, BatchCreateRecordsBody, Fields, Record, RecordBody, RecordData, RecordsData,
    endpoints,
};

use crate::db::Db;
use crate::error::{QueryResult, ResponseError};
use crate::operations;
use crate::statement::Statement;

impl Db {
    /// Insert records, splitting on count.
    ///
    /// Zero records is a no-op that never touches the network. Exactly one
    /// record takes the single-create endpoint; two or more take the batch
    /// endpoint, which forwards the idempotency token when one was set via
    /// [`idempotent`](Db::idempotent).
    pub fn create(&self, records: impl IntoIterator<Item = Fields>) -> QueryResult<Vec<Record>> {
        let stmt = self.state()?;
        stmt.require_table()?;

        let mut records: Vec<Fields> = records.into_iter().collect();
        match records.len() {
            0 => Ok(Vec::new()),
            1 => {
                let record = self.create_single(stmt, records.swap_remove(0))?;
                Ok(vec![record])
            }
            _ => self.create_batch(stmt, records),
        }
    }

    fn create_single(&self, stmt: &Statement, fields: Fields) -> QueryResult<Record> {
        let req = ApiRequest::post(endpoints::CREATE_RECORD)
            .path_param("app_token", stmt.table.app_token.clone())
            .path_param("table_id", stmt.table.table_id.clone())
            .query("user_id_type", stmt.user_id_type.as_str())
            .json(&RecordBody { fields });
        let resp = self.transport().execute(req)?;
        let data: RecordData = operations::decode(&resp)?;

        data.record
            .ok_or_else(|| ResponseError::MissingData.into())
    }

    fn create_batch(&self, stmt: &Statement, records: Vec<Fields>) -> QueryResult<Vec<Record>> {
        let body = BatchCreateRecordsBody {
            records: records.into_iter().map(Record::new).collect(),
        };
        let mut req = ApiRequest::post(endpoints::BATCH_CREATE_RECORDS)
            .path_param("app_token", stmt.table.app_token.clone())
            .path_param("table_id", stmt.table.table_id.clone())
            .query("user_id_type", stmt.user_id_type.as_str());
        if let Some(token) = &stmt.client_token {
            req = req.query("client_token", token.clone());
        }
        let resp = self.transport().execute(req.json(&body))?;
        let data: RecordsData = operations::decode(&resp)?;

        Ok(data.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::test_db;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn fields(pairs: &[(&str, serde_json::Value)]) -> Fields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_zero_records_is_a_network_free_noop() {
        let (mock, db) = test_db();
        let created = db.base_table("app123.tbl456").create([]).unwrap();
        assert!(created.is_empty());
        assert_eq!(mock.request_count(), 0);
    }

    #[test]
    fn test_one_record_takes_single_path() {
        let (mock, db) = test_db();
        mock.push_data(json!({"record": {"record_id": "rec1", "fields": {"name": "Alice"}}}));

        let created = db
            .base_table("app123.tbl456")
            .create([fields(&[("name", json!("Alice"))])])
            .unwrap();

        assert_eq!(created.len(), 1);
        assert_eq!(created[0].record_id.as_deref(), Some("rec1"));

        let req = mock.request(0);
        assert_eq!(
            req.rendered_path(),
            "/open-apis/bitable/v1/apps/app123/tables/tbl456/records"
        );
        assert_eq!(req.body.unwrap(), json!({"fields": {"name": "Alice"}}));
    }

    #[test]
    fn test_two_records_take_batch_path() {
        let (mock, db) = test_db();
        mock.push_data(json!({"records": [
            {"record_id": "rec1", "fields": {}},
            {"record_id": "rec2", "fields": {}},
        ]}));

        let created = db
            .base_table("app123.tbl456")
            .create([
                fields(&[("name", json!("Alice"))]),
                fields(&[("name", json!("Bob"))]),
            ])
            .unwrap();

        assert_eq!(created.len(), 2);
        let req = mock.request(0);
        assert_eq!(
            req.rendered_path(),
            "/open-apis/bitable/v1/apps/app123/tables/tbl456/records/batch_create"
        );
        assert_eq!(req.query_value("client_token"), None);
        let body = req.body.unwrap();
        assert_eq!(body["records"].as_array().unwrap().len(), 2);
        assert_eq!(body["records"][0], json!({"fields": {"name": "Alice"}}));
    }

    #[test]
    fn test_batch_path_forwards_idempotency_token() {
        let (mock, db) = test_db();
        mock.push_data(json!({"records": []}));

        db.base_table("app123.tbl456")
            .idempotent("fe599b60-450f-46ff-b2ef-9f6675625b97")
            .create([fields(&[]), fields(&[])])
            .unwrap();

        assert_eq!(
            mock.request(0).query_value("client_token"),
            Some("fe599b60-450f-46ff-b2ef-9f6675625b97")
        );
    }

    #[test]
    fn test_single_path_has_no_idempotency_token() {
        let (mock, db) = test_db();
        mock.push_data(json!({"record": {"record_id": "rec1", "fields": {}}}));

        db.base_table("app123.tbl456")
            .idempotent("fe599b60-450f-46ff-b2ef-9f6675625b97")
            .create([fields(&[])])
            .unwrap();

        assert_eq!(mock.request(0).query_value("client_token"), None);
    }
}
