//! Builder-side filter state.

use tessera_api::{Condition, Conjunction, FilterInfo};

/// The filter a statement accumulates: one optional conjunction over a flat
/// condition list.
///
/// The conjunction is global. `Or` after `Where` flips it for every
/// condition already accumulated, not just later ones: the model is a flat
/// list under a single combinator, not a tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    /// The combinator, set by the first `Where`/`Or` call.
    pub conjunction: Option<Conjunction>,
    /// The accumulated conditions, in insertion order.
    pub conditions: Vec<Condition>,
}

impl Filter {
    /// Whether the filter would appear in an outgoing request.
    ///
    /// A set conjunction with no conditions is inactive: the request must
    /// omit the filter entirely.
    pub fn is_active(&self) -> bool {
        self.conjunction.is_some() && !self.conditions.is_empty()
    }

    /// The wire form, or `None` when the filter is inactive.
    pub fn to_wire(&self) -> Option<FilterInfo> {
        match self.conjunction {
            Some(conjunction) if !self.conditions.is_empty() => Some(FilterInfo {
                conjunction,
                conditions: self.conditions.clone(),
            }),
            _ => None,
        }
    }
}
