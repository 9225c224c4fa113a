//! The transport boundary: requests, responses, and the [`Transport`] trait.
//!
//! The core never opens a socket. It hands an [`ApiRequest`] to whatever
//! [`Transport`] implementation the caller supplied (that implementation
//! owns the HTTP stack, token acquisition, and transport-level retries)
//! and gets back the raw response body to decode.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// HTTP method of an [`ApiRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
}

impl Method {
    /// The method name as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One request against the table service.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Path template with `:name` segments, from [`endpoints`](crate::endpoints).
    pub path: &'static str,
    /// Values for the template's `:name` segments.
    pub path_params: Vec<(&'static str, String)>,
    /// Query string parameters.
    pub query: Vec<(&'static str, String)>,
    /// JSON body, when the endpoint takes one.
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// Start a request with the given method and path template.
    pub fn new(method: Method, path: &'static str) -> Self {
        Self {
            method,
            path,
            path_params: Vec::new(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Start a GET request.
    pub fn get(path: &'static str) -> Self {
        Self::new(Method::Get, path)
    }

    /// Start a POST request.
    pub fn post(path: &'static str) -> Self {
        Self::new(Method::Post, path)
    }

    /// Start a PUT request.
    pub fn put(path: &'static str) -> Self {
        Self::new(Method::Put, path)
    }

    /// Start a DELETE request.
    pub fn delete(path: &'static str) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Bind a value to a `:name` segment of the path template.
    pub fn path_param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.path_params.push((name, value.into()));
        self
    }

    /// Append a query string parameter.
    pub fn query(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.query.push((name, value.into()));
        self
    }

    /// Attach a JSON body.
    ///
    /// The body types in this crate serialize infallibly; a failure would
    /// leave the body `null` rather than panic.
    pub fn json<T: Serialize>(mut self, body: &T) -> Self {
        self.body = Some(serde_json::to_value(body).unwrap_or_default());
        self
    }

    /// The path with every `:name` segment substituted.
    ///
    /// Unbound segments render as empty, which a transport will reject with
    /// a 404 rather than silently hitting a different resource.
    pub fn rendered_path(&self) -> String {
        let mut out = String::with_capacity(self.path.len() + 24);
        for segment in self.path.split('/') {
            if let Some(name) = segment.strip_prefix(':') {
                let value = self
                    .path_params
                    .iter()
                    .find(|(key, _)| *key == name)
                    .map(|(_, value)| value.as_str())
                    .unwrap_or("");
                out.push_str(value);
            } else {
                out.push_str(segment);
            }
            out.push('/');
        }
        out.pop();
        out
    }

    /// Look up a query parameter by name, for assertions and logging.
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response handed back by a [`Transport`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Undecoded response body.
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// A 200 response with the given body.
    pub fn ok(body: Vec<u8>) -> Self {
        Self { status: 200, body }
    }

    /// Lossy, truncated body rendering for diagnostics.
    pub fn body_preview(&self) -> String {
        const PREVIEW_MAX: usize = 512;
        let text = String::from_utf8_lossy(&self.body);
        if text.len() > PREVIEW_MAX {
            let cut = text
                .char_indices()
                .take_while(|(i, _)| *i < PREVIEW_MAX)
                .last()
                .map(|(i, c)| i + c.len_utf8())
                .unwrap_or(0);
            format!("{}...", &text[..cut])
        } else {
            text.into_owned()
        }
    }
}

/// The service's uniform `{code, msg, data}` response envelope.
///
/// `code == 0` is success; any other code is a service-reported failure and
/// `msg` carries its description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Service result code, zero on success.
    #[serde(default)]
    pub code: i64,
    /// Human-readable result description.
    #[serde(default)]
    pub msg: String,
    /// The payload, present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Failure raised by a [`Transport`] implementation.
///
/// Carries whatever diagnostic payload the transport managed to capture
/// before failing, so callers can render it alongside the base error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transport request failed: {message}")]
pub struct TransportError {
    /// What went wrong.
    pub message: String,
    /// HTTP status, when a response line was received.
    pub status: Option<u16>,
    /// Raw response payload, when one was captured.
    pub raw: Option<String>,
}

impl TransportError {
    /// A transport error with only a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            raw: None,
        }
    }

    /// Attach the HTTP status.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Attach the captured raw payload.
    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = Some(raw.into());
        self
    }
}

/// One blocking round-trip against the table service.
///
/// Implementations own authentication and transport-level concerns and
/// must be shareable across chained handles.
pub trait Transport: Send + Sync {
    /// Execute the request and return the raw response.
    fn execute(&self, req: ApiRequest) -> Result<ApiResponse, TransportError>;
}
