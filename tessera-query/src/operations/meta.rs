//! App metadata lookup.

use tessera_api::{ApiRequest, App, AppData, endpoints};

use crate::db::Db;
use crate::error::{QueryResult, ResponseError};
use crate::operations;

impl Db {
    /// Fetch the metadata of the selected app.
    ///
    /// Only the app token needs to be set; no table is involved.
    pub fn meta(&self) -> QueryResult<App> {
        let stmt = self.state()?;
        stmt.require_app()?;

        let req = ApiRequest::get(endpoints::GET_APP)
            .path_param("app_token", stmt.table.app_token.clone());
        let resp = self.transport().execute(req)?;
        let data: AppData = operations::decode(&resp)?;

        data.app.ok_or_else(|| ResponseError::MissingData.into())
    }
}
