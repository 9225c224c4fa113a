//! The chainable handle.
//!
//! A [`Db`] is a root handle over a shared transport and configuration plus
//! the statement accumulated so far. Every chain method takes `&self`,
//! clones the statement, applies exactly one change, and returns a new
//! handle. Two chains forked from the same ancestor never observe each
//! other's writes, so a root handle can be chained from concurrently.
//!
//! Failures travel in the handle: once a step fails, the handle carries the
//! error instead of a statement, every later chain step clones it forward
//! untouched, and finishers return it without touching the network.
//!
//! ```rust,ignore
//! let db = Db::new(transport);
//! let records = db
//!     .base_table("app123.tbl456")
//!     .select(["uuid", "name"])
//!     .r#where("age > ?", 18)
//!     .order("created_at", true)
//!     .records()?;
//! ```

use std::fmt;
use std::sync::Arc;

use tessera_api::{Conjunction, Sort, Transport};

use crate::args::IntoArgs;
use crate::config::Config;
use crate::error::Error;
use crate::predicate;
use crate::statement::{Select, Statement, UserIdType};

/// Root handle: shared transport + configuration + one statement.
#[derive(Clone)]
pub struct Db {
    transport: Arc<dyn Transport>,
    config: Arc<Config>,
    state: Result<Statement, Error>,
}

impl fmt::Debug for Db {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Db").field("state", &self.state).finish()
    }
}

impl Db {
    /// A fresh handle over `transport` with the default configuration.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_config(transport, Config::default())
    }

    /// A fresh handle over `transport` with an explicit configuration.
    pub fn with_config(transport: Arc<dyn Transport>, config: Config) -> Self {
        Self {
            transport,
            config: Arc::new(config),
            state: Ok(Statement::default()),
        }
    }

    /// The accumulated statement, unless the handle carries an error.
    pub fn statement(&self) -> Option<&Statement> {
        self.state.as_ref().ok()
    }

    /// The error this handle carries, if any.
    pub fn error(&self) -> Option<&Error> {
        self.state.as_ref().err()
    }

    pub(crate) fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    pub(crate) fn config(&self) -> &Config {
        &self.config
    }

    /// The statement, or the carried error: the guard at the top of every
    /// finisher.
    pub(crate) fn state(&self) -> Result<&Statement, Error> {
        self.state.as_ref().map_err(Clone::clone)
    }

    /// A derived handle carrying `err`.
    pub(crate) fn fail(&self, err: Error) -> Db {
        Db {
            transport: Arc::clone(&self.transport),
            config: Arc::clone(&self.config),
            state: Err(err),
        }
    }

    /// Clone-then-mutate: the one place chain isolation is implemented.
    fn chain(&self, apply: impl FnOnce(&mut Statement) -> Result<(), Error>) -> Db {
        let state = match &self.state {
            Err(err) => Err(err.clone()),
            Ok(stmt) => {
                let mut next = stmt.clone();
                apply(&mut next).map(|()| next)
            }
        };
        Db {
            transport: Arc::clone(&self.transport),
            config: Arc::clone(&self.config),
            state,
        }
    }

    /// Choose the bitable app by its token.
    pub fn base(&self, app_token: impl Into<String>) -> Db {
        let app_token = app_token.into();
        self.chain(|stmt| {
            stmt.table.app_token = app_token;
            Ok(())
        })
    }

    /// Choose the table inside the app.
    pub fn table(&self, table_id: impl Into<String>) -> Db {
        let table_id = table_id.into();
        self.chain(|stmt| {
            stmt.table.table_id = table_id;
            Ok(())
        })
    }

    /// Choose app and table from a combined `"<appToken>.<tableId>"` locator.
    pub fn base_table(&self, combined: &str) -> Db {
        match split_locator(combined) {
            Ok((app_token, table_id)) => self.base(app_token).table(table_id),
            Err(err) => self.fail(err),
        }
    }

    /// Choose the app behind a wiki document reference.
    ///
    /// Resolves the node through the transport and fails with
    /// [`Error::ObjectTypeMismatch`] unless it wraps a bitable.
    pub fn wiki(&self, token: &str) -> Db {
        crate::operations::wiki::resolve(self, token)
    }

    /// [`wiki`](Self::wiki) and [`table`](Self::table) from a combined
    /// `"<wikiToken>.<tableId>"` locator.
    pub fn wiki_table(&self, combined: &str) -> Db {
        match split_locator(combined) {
            Ok((token, table_id)) => self.wiki(token).table(table_id),
            Err(err) => self.fail(err),
        }
    }

    /// Read through the given view.
    pub fn view(&self, view_id: impl Into<String>) -> Db {
        let view_id = view_id.into();
        self.chain(|stmt| {
            stmt.table.view_id = view_id;
            Ok(())
        })
    }

    /// Restrict returned fields to the named ones, replacing any earlier
    /// selection. An empty list selects all fields again.
    pub fn select(&self, fields: impl IntoIterator<Item = impl Into<String>>) -> Db {
        let selects = Select::fields(fields);
        self.chain(|stmt| {
            stmt.selects = selects;
            Ok(())
        })
    }

    /// Append a sort on `field`, descending when `desc` is true.
    pub fn order(&self, field: impl Into<String>, desc: bool) -> Db {
        let field = field.into();
        self.chain(|stmt| {
            stmt.sort.push(Sort {
                field_name: field,
                desc,
            });
            Ok(())
        })
    }

    /// Add a condition joined with `and`.
    ///
    /// The expression is one predicate: `"<field> <op> ?"` with a single
    /// argument, or a bare `"<field> isEmpty"` style emptiness test.
    ///
    /// ```rust,ignore
    /// db.r#where("职位 = ?", "初级销售员")
    ///   .r#where("age <> ?", 20)
    ///   .r#where("name is not null", ());
    /// ```
    pub fn r#where(&self, expr: &str, args: impl IntoArgs) -> Db {
        self.filtered(Conjunction::And, expr, args)
    }

    /// Add a condition joined with `or`.
    ///
    /// The conjunction is global to the filter: calling this after
    /// [`r#where`](Self::r#where) re-joins every previously accumulated
    /// condition with `or` as well.
    pub fn or(&self, expr: &str, args: impl IntoArgs) -> Db {
        self.filtered(Conjunction::Or, expr, args)
    }

    fn filtered(&self, conjunction: Conjunction, expr: &str, args: impl IntoArgs) -> Db {
        let args = args.into_args();
        self.chain(move |stmt| {
            // The conjunction flips before parsing, so it governs the whole
            // flat condition list even if the parse then fails the handle.
            stmt.filter.conjunction = Some(conjunction);
            tracing::debug!(expr, %conjunction, "building filter condition");
            if let Some(cond) = predicate::parse(expr, &args)? {
                stmt.filter.conditions.push(cond);
            }
            Ok(())
        })
    }

    /// Include service-computed fields in responses.
    pub fn automatic_fields(&self, enabled: bool) -> Db {
        self.chain(move |stmt| {
            stmt.automatic_fields = enabled;
            Ok(())
        })
    }

    /// Choose the identity namespace for user-typed fields.
    pub fn user_id_type(&self, id_type: UserIdType) -> Db {
        self.chain(move |stmt| {
            stmt.user_id_type = id_type;
            Ok(())
        })
    }

    /// Set the idempotency token forwarded by batch writes.
    ///
    /// An empty token leaves the statement unchanged: the next batch write
    /// is a fresh, non-idempotent request.
    pub fn idempotent(&self, client_token: impl Into<String>) -> Db {
        let token = client_token.into();
        self.chain(move |stmt| {
            if !token.is_empty() {
                stmt.client_token = Some(token);
            }
            Ok(())
        })
    }

    /// Apply reusable chain fragments in order.
    ///
    /// ```rust,ignore
    /// let adults = |db: &Db| db.r#where("age >= ?", 18);
    /// db.scope([adults]).records()?;
    /// ```
    pub fn scope<F>(&self, scopes: impl IntoIterator<Item = F>) -> Db
    where
        F: Fn(&Db) -> Db,
    {
        let mut tx = self.clone();
        for scope in scopes {
            tx = scope(&tx);
        }
        tx
    }
}

/// Split a combined locator on `.` into exactly two non-empty parts.
fn split_locator(combined: &str) -> Result<(&str, &str), Error> {
    let mut parts = combined.split('.');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(left), Some(right), None) if !left.is_empty() && !right.is_empty() => {
            Ok((left, right))
        }
        _ => Err(Error::LocatorFormat(combined.to_string())),
    }
}
