//! Scripted transport for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tessera_api::{ApiRequest, ApiResponse, Transport, TransportError};

use crate::config::Config;
use crate::db::Db;

/// A handle over a fresh [`MockTransport`] with the inter-page pause
/// disabled, so pagination tests run instantly.
pub(crate) fn test_db() -> (Arc<MockTransport>, Db) {
    let mock = Arc::new(MockTransport::new());
    let db = Db::with_config(
        mock.clone(),
        Config::new().request_interval(Duration::ZERO),
    );
    (mock, db)
}

/// A transport that replays scripted responses and records every request.
pub(crate) struct MockTransport {
    responses: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Script a 200 response whose body is a success envelope around `data`.
    pub fn push_data(&self, data: serde_json::Value) {
        self.push_body(serde_json::json!({
            "code": 0,
            "msg": "success",
            "data": data,
        }));
    }

    /// Script a 200 response with an arbitrary body.
    pub fn push_body(&self, body: serde_json::Value) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse::ok(body.to_string().into_bytes())));
    }

    /// Script a transport failure.
    pub fn push_err(&self, err: TransportError) {
        self.responses.lock().unwrap().push_back(Err(err));
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn request(&self, index: usize) -> ApiRequest {
        self.requests.lock().unwrap()[index].clone()
    }
}

impl Transport for MockTransport {
    fn execute(&self, req: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().unwrap().push(req);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::new("no scripted response left")))
    }
}
