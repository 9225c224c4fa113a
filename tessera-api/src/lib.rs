//! # tessera-api
//!
//! Wire types and the transport boundary for the tessera bitable client.
//!
//! This crate owns everything that crosses the HTTP boundary to the remote
//! table service: request and response bodies, the `{code, msg, data}`
//! envelope, endpoint path templates, and the [`Transport`] trait the core
//! talks through. It performs no I/O itself: callers plug in a transport
//! that carries authentication, retries, and the actual HTTP stack.
//!
//! ## Conditions
//!
//! Filter conditions use the service's fixed operator vocabulary:
//!
//! ```rust
//! use tessera_api::{Condition, Operator};
//!
//! let cond = Condition::new("age", Operator::IsGreater, ["18".to_string()]);
//! assert_eq!(cond.operator.as_str(), "isGreater");
//! assert!(!Operator::IsEmpty.requires_value());
//! ```
//!
//! ## Requests
//!
//! Requests are built against path templates with `:name` segments:
//!
//! ```rust
//! use tessera_api::{endpoints, ApiRequest};
//!
//! let req = ApiRequest::post(endpoints::SEARCH_RECORDS)
//!     .path_param("app_token", "app123")
//!     .path_param("table_id", "tbl456")
//!     .query("page_size", "500");
//! assert_eq!(
//!     req.rendered_path(),
//!     "/open-apis/bitable/v1/apps/app123/tables/tbl456/records/search"
//! );
//! ```

#![deny(rustdoc::broken_intra_doc_links)]

pub mod app;
pub mod batch;
pub mod endpoints;
pub mod filter;
pub mod record;
pub mod records;
pub mod search;
pub mod transport;
pub mod wiki;

pub use app::{App, AppData};
pub use batch::{
    BATCH_GET_MAX, BatchCreateRecordsBody, BatchGetRecordsBody, BatchGetRecordsData, RecordsData,
};
pub use filter::{Condition, ConditionValue, Conjunction, FilterInfo, Operator, Sort};
pub use record::{Fields, Record};
pub use records::{DeleteRecordData, RecordBody, RecordData};
pub use search::{PAGE_SIZE_MAX, SearchRecordsBody, SearchRecordsData};
pub use transport::{ApiEnvelope, ApiRequest, ApiResponse, Method, Transport, TransportError};
pub use wiki::{Node, NodeData, OBJ_TYPE_BITABLE, OBJ_TYPE_WIKI};
