//! Wiki document-reference resolution.

use tessera_api::{ApiRequest, NodeData, OBJ_TYPE_BITABLE, OBJ_TYPE_WIKI, endpoints};

use crate::db::Db;
use crate::error::{Error, ResponseError, ValidationError};
use crate::operations;

/// Resolve a wiki token to the bitable app it wraps and select that app.
///
/// This is the one chain step that performs a network call. Resolution
/// failures (transport, malformed node, or a node wrapping a non-bitable
/// object) land in the returned handle's error state, so later chain
/// steps and finishers short-circuit as usual.
pub(crate) fn resolve(db: &Db, token: &str) -> Db {
    if db.error().is_some() {
        return db.clone();
    }
    if token.is_empty() {
        return db.fail(ValidationError::AppTokenRequired.into());
    }

    let req = ApiRequest::get(endpoints::GET_WIKI_NODE)
        .query("token", token)
        .query("obj_type", OBJ_TYPE_WIKI);
    let data: NodeData = match db
        .transport()
        .execute(req)
        .map_err(Error::from)
        .and_then(|resp| operations::decode(&resp))
    {
        Ok(data) => data,
        Err(err) => return db.fail(err),
    };

    let Some(node) = data.node else {
        return db.fail(ResponseError::MissingData.into());
    };
    let obj_type = node.obj_type.unwrap_or_default();
    if obj_type != OBJ_TYPE_BITABLE {
        return db.fail(Error::ObjectTypeMismatch {
            token: token.to_string(),
            actual: obj_type,
        });
    }

    let app_token = node.obj_token.unwrap_or_default();
    tracing::debug!(token, app_token, "resolved wiki node to bitable app");
    db.base(app_token)
}
