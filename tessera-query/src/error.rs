//! Error taxonomy for chain and finisher operations.
//!
//! Every chain step and finisher returns (or carries) one [`Error`]. A
//! handle whose state already holds an error short-circuits all further
//! work: chain calls clone the error forward, finishers return it without
//! touching the network.
//!
//! ```rust
//! use tessera_query::{Error, ValidationError};
//!
//! let err = Error::from(ValidationError::AppTokenRequired);
//! assert!(err.is_validation());
//! assert_eq!(err.to_string(), "appToken required");
//! ```

use thiserror::Error;

use tessera_api::{Operator, TransportError};

/// Result alias used by every finisher.
pub type QueryResult<T> = Result<T, Error>;

/// Any failure a chain or finisher operation can produce.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A required identifier or input was missing.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A `Where`/`Or` predicate expression failed to parse.
    #[error("where condition parse failed: {0}")]
    Parse(#[from] ParseError),

    /// A combined locator was not of the form `<appToken>.<tableId>`.
    #[error("cannot split {0:?} into `<appToken>.<tableId>`")]
    LocatorFormat(String),

    /// A wiki reference resolved to something other than a bitable.
    #[error("document {token:?} resolves to object type {actual:?}, not a bitable")]
    ObjectTypeMismatch {
        /// The wiki token that was resolved.
        token: String,
        /// The object type the service reported.
        actual: String,
    },

    /// The transport failed to complete a round-trip.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The service answered, but the response was unusable.
    #[error(transparent)]
    Response(#[from] ResponseError),
}

impl Error {
    /// Whether this is a missing-identifier/input failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Whether this is a predicate parse failure.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Whether this failure came from the transport or the service side.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Response(_))
    }

    /// Full diagnostic rendering: the base error, then any captured raw
    /// transport payload and service-reported code on their own lines.
    pub fn diagnostic(&self) -> String {
        let mut out = self.to_string();
        match self {
            Self::Transport(t) => {
                if let Some(status) = t.status {
                    out.push_str(&format!("\n[status] {status}"));
                }
                if let Some(raw) = &t.raw {
                    out.push_str(&format!("\n[raw] {raw}"));
                }
            }
            Self::Response(ResponseError::Service { code, msg }) => {
                out.push_str(&format!("\n[code] {code}: {msg}"));
            }
            _ => {}
        }
        out
    }
}

/// A required identifier or input was missing before any network access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    /// No app token on the statement.
    #[error("appToken required")]
    AppTokenRequired,
    /// No table id on the statement.
    #[error("tableId required")]
    TableIdRequired,
    /// No record id given to a keyed write.
    #[error("recordId required")]
    RecordIdRequired,
    /// Batch get called with an empty id list.
    #[error("recordIds cannot be empty")]
    EmptyRecordIds,
}

/// A predicate expression failed to parse.
///
/// No condition is appended on any parse failure; the statement under
/// construction is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Placeholder count and argument count disagree, or the expression
    /// holds more than one placeholder.
    #[error("{placeholders} placeholder(s) but {args} argument(s) in {expr:?}")]
    ArgCountMismatch {
        /// The offending expression.
        expr: String,
        /// Number of `?` found in the expression.
        placeholders: usize,
        /// Number of arguments supplied.
        args: usize,
    },

    /// The expression matches neither grammar form.
    #[error("expression {expr:?} matches neither `<field> <op>` nor `<field> <op> ?`")]
    NoMatch {
        /// The offending expression.
        expr: String,
    },

    /// The operator token is not in the alias table.
    #[error("unknown operator {token:?} in {expr:?}")]
    UnknownOperator {
        /// The offending expression.
        expr: String,
        /// The unrecognized operator token.
        token: String,
    },

    /// The argument type cannot be paired with this operator.
    #[error("operator {operator} does not accept a date value")]
    UnsupportedOperatorForType {
        /// The operator the date value was paired with.
        operator: Operator,
    },
}

impl ParseError {
    /// The failure kind, for programmatic matching.
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            Self::ArgCountMismatch { .. } => ParseErrorKind::ArgCountMismatch,
            Self::NoMatch { .. } => ParseErrorKind::NoMatch,
            Self::UnknownOperator { .. } => ParseErrorKind::UnknownOperator,
            Self::UnsupportedOperatorForType { .. } => ParseErrorKind::UnsupportedOperatorForType,
        }
    }
}

/// Discriminant of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// Placeholder/argument arity disagreement.
    ArgCountMismatch,
    /// Grammar mismatch.
    NoMatch,
    /// Operator token outside the vocabulary.
    UnknownOperator,
    /// Operator/argument-type pairing the service rejects.
    UnsupportedOperatorForType,
}

/// The service answered, but the response body was unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseError {
    /// The body was empty.
    #[error("response body is empty")]
    Empty,
    /// The body failed to decode as the expected JSON shape.
    #[error("response body failed to decode: {0}")]
    Decode(String),
    /// The envelope decoded but carried no data payload.
    #[error("response data is missing")]
    MissingData,
    /// The service reported a non-zero result code.
    #[error("service error code {code}: {msg}")]
    Service {
        /// The service result code.
        code: i64,
        /// The service's description of the failure.
        msg: String,
    },
}
