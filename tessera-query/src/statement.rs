//! The accumulated, clone-per-step state of one query.

use tessera_api::Sort;

use crate::error::ValidationError;
use crate::filter::Filter;

/// Where a statement points: app, table, and optionally a view.
///
/// Empty strings mean "not set"; finishers validate before any network
/// access.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableRef {
    /// Token of the bitable app.
    pub app_token: String,
    /// Id of the table inside the app.
    pub table_id: String,
    /// Id of the view to read through, when one was chosen.
    pub view_id: String,
}

/// Field selection: everything, or an explicit name list.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Select {
    /// All fields (the default).
    #[default]
    All,
    /// Only the named fields.
    Fields(Vec<String>),
}

impl Select {
    /// Build a selection from field names; an empty list selects all.
    pub fn fields(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            Self::All
        } else {
            Self::Fields(names)
        }
    }

    /// The wire form: `None` selects all fields.
    pub fn to_wire(&self) -> Option<Vec<String>> {
        match self {
            Self::All => None,
            Self::Fields(names) => Some(names.clone()),
        }
    }
}

/// Identity namespace used for user-typed fields in responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UserIdType {
    /// App-scoped open id (the default).
    #[default]
    OpenId,
    /// Tenant-scoped union id.
    UnionId,
    /// Raw user id.
    UserId,
}

impl UserIdType {
    /// The wire tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenId => "open_id",
            Self::UnionId => "union_id",
            Self::UserId => "user_id",
        }
    }
}

/// Everything one query or write operation has accumulated.
///
/// `Clone` is the isolation mechanism: every chain step copies the
/// statement, and because every collection here is owned, the copy shares
/// no backing storage with its ancestor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statement {
    /// Destination table.
    pub table: TableRef,
    /// Field selection for reads.
    pub selects: Select,
    /// Accumulated filter.
    pub filter: Filter,
    /// Sort list, applied in insertion order.
    pub sort: Vec<Sort>,
    /// Identity namespace for user-typed fields.
    pub user_id_type: UserIdType,
    /// Whether service-computed fields are returned.
    pub automatic_fields: bool,
    /// Idempotency token for batch writes; `Some` means enabled.
    pub client_token: Option<String>,
}

impl Statement {
    /// Whether an idempotency token is set.
    pub fn idempotent(&self) -> bool {
        self.client_token.is_some()
    }

    /// Fail unless both app token and table id are set.
    pub(crate) fn require_table(&self) -> Result<(), ValidationError> {
        self.require_app()?;
        if self.table.table_id.is_empty() {
            return Err(ValidationError::TableIdRequired);
        }
        Ok(())
    }

    /// Fail unless the app token is set.
    pub(crate) fn require_app(&self) -> Result<(), ValidationError> {
        if self.table.app_token.is_empty() {
            return Err(ValidationError::AppTokenRequired);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_api::{Condition, Conjunction, Operator};

    #[test]
    fn test_empty_select_means_all() {
        assert_eq!(Select::fields(Vec::<String>::new()), Select::All);
        assert_eq!(Select::All.to_wire(), None);
        assert_eq!(
            Select::fields(["uuid"]).to_wire(),
            Some(vec!["uuid".to_string()])
        );
    }

    #[test]
    fn test_require_table() {
        let mut stmt = Statement::default();
        assert_eq!(
            stmt.require_table(),
            Err(ValidationError::AppTokenRequired)
        );

        stmt.table.app_token = "app123".into();
        assert_eq!(stmt.require_table(), Err(ValidationError::TableIdRequired));

        stmt.table.table_id = "tbl456".into();
        assert_eq!(stmt.require_table(), Ok(()));
    }

    #[test]
    fn test_clone_is_structurally_independent() {
        let mut stmt = Statement::default();
        stmt.filter.conjunction = Some(Conjunction::And);
        stmt.filter
            .conditions
            .push(Condition::new("age", Operator::IsGreater, ["18".to_string()]));
        stmt.sort.push(Sort::asc("name"));
        stmt.selects = Select::fields(["uuid"]);

        let mut copy = stmt.clone();
        copy.filter.conjunction = Some(Conjunction::Or);
        copy.filter
            .conditions
            .push(Condition::new("name", Operator::IsEmpty, []));
        copy.sort.push(Sort::desc("created_at"));
        copy.selects = Select::All;

        assert_eq!(stmt.filter.conjunction, Some(Conjunction::And));
        assert_eq!(stmt.filter.conditions.len(), 1);
        assert_eq!(stmt.sort.len(), 1);
        assert_eq!(stmt.selects, Select::fields(["uuid"]));
    }

    #[test]
    fn test_user_id_type_default() {
        assert_eq!(UserIdType::default().as_str(), "open_id");
    }
}
