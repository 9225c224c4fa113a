//! Paginated record reads.

use std::thread;

use tessera_api::{
    ApiRequest, PAGE_SIZE_MAX, Record, SearchRecordsBody, SearchRecordsData, endpoints,
};

use crate::db::Db;
use crate::error::{QueryResult, ResponseError};
use crate::operations;
use crate::statement::Statement;

impl Db {
    /// Fetch every record matching the accumulated statement.
    ///
    /// Issues search calls at the service's maximum page size and follows
    /// the continuation token until the service reports no further pages,
    /// pausing for the configured interval before every page after the
    /// first. The result is all-or-error: a mid-pagination failure discards
    /// the records accumulated so far.
    pub fn records(&self) -> QueryResult<Vec<Record>> {
        let stmt = self.state()?;
        stmt.require_table()?;

        let body = search_body(stmt);
        let mut records = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            if page_token.is_some() {
                let interval = self.config().request_interval;
                if !interval.is_zero() {
                    thread::sleep(interval);
                }
            }

            let req = ApiRequest::post(endpoints::SEARCH_RECORDS)
                .path_param("app_token", stmt.table.app_token.clone())
                .path_param("table_id", stmt.table.table_id.clone())
                .query("user_id_type", stmt.user_id_type.as_str())
                .query("page_token", page_token.clone().unwrap_or_default())
                .query("page_size", PAGE_SIZE_MAX.to_string())
                .json(&body);
            let resp = self.transport().execute(req)?;
            let page: SearchRecordsData = operations::decode(&resp)?;

            tracing::debug!(
                fetched = page.items.len(),
                has_more = page.has_more,
                "fetched record page"
            );
            records.extend(page.items);

            if !page.has_more {
                break;
            }
            match page.page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                // has_more without a continuation token is a malformed page
                _ => return Err(ResponseError::MissingData.into()),
            }
        }

        Ok(records)
    }
}

/// Build the search body from the statement. Optional members stay off the
/// wire when unset; in particular the filter is omitted entirely unless a
/// conjunction is set and at least one condition was accumulated.
fn search_body(stmt: &Statement) -> SearchRecordsBody {
    SearchRecordsBody {
        view_id: (!stmt.table.view_id.is_empty()).then(|| stmt.table.view_id.clone()),
        field_names: stmt.selects.to_wire(),
        sort: stmt.sort.clone(),
        filter: stmt.filter.to_wire(),
        automatic_fields: stmt.automatic_fields,
    }
}
