//! # Tessera
//!
//! An ORM-style client for remote bitable tables with a GORM-flavored
//! chainable API.
//!
//! Tessera provides:
//! - A fluent, chain-safe query builder: every step clones the statement,
//!   so handles can be forked and reused freely
//! - SQL-ish predicate strings (`"age > ?"`, `"name is empty"`) translated
//!   into the table service's filter conditions
//! - Paginated reads, size-capped batch reads, and a single/batch write
//!   splitter with idempotency-token passthrough
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tessera_orm::prelude::*;
//!
//! // `transport` is any `Arc<dyn Transport>` carrying your HTTP stack
//! // and credentials.
//! let db = Db::new(transport);
//!
//! let records = db
//!     .base_table("app123.tbl456")
//!     .select(["uuid", "name", "age"])
//!     .r#where("age > ?", 18)
//!     .order("created_at", true)
//!     .records()?;
//!
//! for record in records {
//!     println!("{:?}", record.field("name"));
//! }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Wire types and the transport boundary.
pub mod api {
    pub use tessera_api::*;
}

pub use tessera_query::{
    Args, Config, Db, Error, Filter, IntoArgs, ParseError, ParseErrorKind, QueryResult, Select,
    Statement, TableRef, UserIdType, Value, logging, predicate,
};

// Wire types callers touch directly, at the crate root for convenience.
pub use tessera_query::{
    App, Condition, Conjunction, DeleteRecordData, Fields, Operator, Record, Sort, Transport,
    TransportError,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use tessera_query::prelude::*;
}
