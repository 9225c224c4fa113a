//! Finisher operations.
//!
//! One module per chain-terminal operation. Every finisher follows the same
//! shape: guard on the handle's carried error, validate the locator, build
//! an [`ApiRequest`](tessera_api::ApiRequest), execute it through the shared
//! transport, and decode the `{code, msg, data}` envelope.

pub(crate) mod batch_get;
pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod meta;
pub(crate) mod search;
pub(crate) mod update;
pub(crate) mod wiki;

use serde::de::DeserializeOwned;

use tessera_api::{ApiEnvelope, ApiResponse};

use crate::error::{Error, ResponseError};

/// Decode a response envelope and extract its data payload.
pub(crate) fn decode<T: DeserializeOwned>(resp: &ApiResponse) -> Result<T, Error> {
    if resp.body.is_empty() {
        return Err(ResponseError::Empty.into());
    }
    let envelope: ApiEnvelope<T> = serde_json::from_slice(&resp.body)
        .map_err(|err| ResponseError::Decode(err.to_string()))?;
    if envelope.code != 0 {
        return Err(ResponseError::Service {
            code: envelope.code,
            msg: envelope.msg,
        }
        .into());
    }
    envelope.data.ok_or_else(|| ResponseError::MissingData.into())
}
