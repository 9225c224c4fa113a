//! # tessera-query
//!
//! Predicate parser and chainable statement builder for the tessera
//! bitable client.
//!
//! This crate provides the core query-building functionality:
//! - A fluent, chainable [`Db`] handle (`base`, `table`, `select`, `order`,
//!   `r#where`, `or`, ...) where every step clones the statement, so forks
//!   from one ancestor never observe each other
//! - A SQL-ish predicate mini-grammar (`"age > ?"`, `"name is empty"`)
//!   translated into the service's filter conditions
//! - Finisher operations: paginated [`records`](Db::records), size-capped
//!   [`batch_get`](Db::batch_get), the single/batch
//!   [`create`](Db::create) splitter, keyed [`update`](Db::update) and
//!   [`delete`](Db::delete), and [`meta`](Db::meta)
//!
//! ## Predicates
//!
//! ```rust
//! use tessera_query::predicate::parse;
//! use tessera_api::Operator;
//!
//! let cond = parse("age > ?", &[18.into()]).unwrap().unwrap();
//! assert_eq!(cond.operator, Operator::IsGreater);
//! assert_eq!(cond.value.as_slice(), ["18".to_string()]);
//!
//! let cond = parse("name is empty", &[]).unwrap().unwrap();
//! assert_eq!(cond.operator, Operator::IsEmpty);
//! assert!(cond.value.is_empty());
//! ```
//!
//! ## Chaining
//!
//! ```rust,ignore
//! let db = Db::new(transport);
//! let records = db
//!     .base_table("app123.tbl456")
//!     .select(["uuid", "name"])
//!     .r#where("age > ?", 18)
//!     .or("role = ?", "admin")
//!     .order("created_at", true)
//!     .records()?;
//! ```
//!
//! Errors travel in the handle: a failed step poisons the chain, later
//! steps short-circuit, and the finisher returns the original error
//! without touching the network.

#![deny(rustdoc::broken_intra_doc_links)]

pub mod args;
pub mod config;
pub mod db;
pub mod error;
pub mod filter;
pub mod logging;
pub mod operations;
pub mod predicate;
pub mod statement;
pub mod value;

#[cfg(test)]
mod test_util;

pub use args::{Args, IntoArgs};
pub use config::Config;
pub use db::Db;
pub use error::{
    Error, ParseError, ParseErrorKind, QueryResult, ResponseError, ValidationError,
};
pub use filter::Filter;
pub use statement::{Select, Statement, TableRef, UserIdType};
pub use value::Value;

// Re-export the wire types callers touch directly.
pub use tessera_api::{
    App, Condition, Conjunction, DeleteRecordData, Fields, Operator, Record, Sort, Transport,
    TransportError,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::args::IntoArgs;
    pub use crate::config::Config;
    pub use crate::db::Db;
    pub use crate::error::{Error, ParseErrorKind, QueryResult};
    pub use crate::statement::{Select, UserIdType};
    pub use crate::value::Value;

    pub use tessera_api::{Condition, Conjunction, Fields, Operator, Record, Sort, Transport};
}
