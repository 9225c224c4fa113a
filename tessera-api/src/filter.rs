//! Filter wire types: operators, conditions, conjunctions, and sorts.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Value payload of a single condition.
///
/// Almost every condition carries zero, one, or two elements (two only for
/// the `["ExactDate", millis]` date form), so the backing storage is inline.
pub type ConditionValue = SmallVec<[String; 2]>;

/// The comparison operator vocabulary of the table service.
///
/// These are the canonical wire tags; the predicate parser maps source
/// aliases (`=`, `<>`, `is not null`, ...) onto them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operator {
    /// Equality.
    Is,
    /// Inequality. Not supported for date fields.
    IsNot,
    /// Substring containment. Not supported for date fields.
    Contains,
    /// Substring non-containment. Not supported for date fields.
    DoesNotContain,
    /// The field holds no value.
    IsEmpty,
    /// The field holds a value.
    IsNotEmpty,
    /// Strictly greater.
    IsGreater,
    /// Greater or equal.
    IsGreaterEqual,
    /// Strictly less.
    IsLess,
    /// Less or equal.
    IsLessEqual,
    /// Pattern match.
    Like,
    /// Membership in a value list.
    In,
}

impl Operator {
    /// Every operator tag, in wire order.
    pub const ALL: [Operator; 12] = [
        Operator::Is,
        Operator::IsNot,
        Operator::Contains,
        Operator::DoesNotContain,
        Operator::IsEmpty,
        Operator::IsNotEmpty,
        Operator::IsGreater,
        Operator::IsGreaterEqual,
        Operator::IsLess,
        Operator::IsLessEqual,
        Operator::Like,
        Operator::In,
    ];

    /// The canonical wire tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Is => "is",
            Self::IsNot => "isNot",
            Self::Contains => "contains",
            Self::DoesNotContain => "doesNotContain",
            Self::IsEmpty => "isEmpty",
            Self::IsNotEmpty => "isNotEmpty",
            Self::IsGreater => "isGreater",
            Self::IsGreaterEqual => "isGreaterEqual",
            Self::IsLess => "isLess",
            Self::IsLessEqual => "isLessEqual",
            Self::Like => "like",
            Self::In => "in",
        }
    }

    /// Whether the operator compares against a value at all.
    ///
    /// The emptiness tests take an empty value list; everything else
    /// requires at least one operand.
    pub fn requires_value(&self) -> bool {
        !matches!(self, Self::IsEmpty | Self::IsNotEmpty)
    }

    /// Whether the service accepts a date operand for this operator.
    pub fn supports_date(&self) -> bool {
        matches!(
            self,
            Self::Is | Self::IsEmpty | Self::IsNotEmpty | Self::IsGreater | Self::IsLess
        )
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Boolean combinator applied uniformly across all conditions of one filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Conjunction {
    /// All conditions must hold.
    And,
    /// Any condition may hold.
    Or,
}

impl Conjunction {
    /// The wire tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

impl fmt::Display for Conjunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One filter condition: `field_name operator value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// Name of the field the condition applies to.
    pub field_name: String,
    /// Comparison operator.
    pub operator: Operator,
    /// String-encoded operand list. Empty for the emptiness tests.
    #[serde(default)]
    pub value: ConditionValue,
}

impl Condition {
    /// Build a condition from its parts.
    pub fn new(
        field_name: impl Into<String>,
        operator: Operator,
        value: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            operator,
            value: value.into_iter().collect(),
        }
    }
}

/// Complete filter: one conjunction over a flat condition list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterInfo {
    /// The combinator shared by every condition.
    pub conjunction: Conjunction,
    /// The conditions, in insertion order.
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

/// Sort specification for a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    /// Name of the field to sort by.
    pub field_name: String,
    /// Descending when true.
    pub desc: bool,
}

impl Sort {
    /// Ascending sort on `field_name`.
    pub fn asc(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            desc: false,
        }
    }

    /// Descending sort on `field_name`.
    pub fn desc(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            desc: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_operator_wire_tags() {
        assert_eq!(serde_json::to_value(Operator::Is).unwrap(), "is");
        assert_eq!(serde_json::to_value(Operator::IsNot).unwrap(), "isNot");
        assert_eq!(
            serde_json::to_value(Operator::DoesNotContain).unwrap(),
            "doesNotContain"
        );
        assert_eq!(serde_json::to_value(Operator::In).unwrap(), "in");
    }

    #[test]
    fn test_operator_as_str_matches_serde() {
        for op in Operator::ALL {
            assert_eq!(serde_json::to_value(op).unwrap(), op.as_str());
        }
    }

    #[test]
    fn test_operator_value_requirements() {
        assert!(!Operator::IsEmpty.requires_value());
        assert!(!Operator::IsNotEmpty.requires_value());
        assert!(Operator::Is.requires_value());
        assert!(Operator::In.requires_value());
    }

    #[test]
    fn test_operator_date_support() {
        assert!(Operator::Is.supports_date());
        assert!(Operator::IsGreater.supports_date());
        assert!(Operator::IsLess.supports_date());
        assert!(!Operator::Contains.supports_date());
        assert!(!Operator::IsNot.supports_date());
    }

    #[test]
    fn test_condition_wire_shape() {
        let cond = Condition::new("age", Operator::IsGreater, ["18".to_string()]);
        let json = serde_json::to_value(&cond).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "field_name": "age",
                "operator": "isGreater",
                "value": ["18"],
            })
        );
    }

    #[test]
    fn test_filter_wire_shape() {
        let filter = FilterInfo {
            conjunction: Conjunction::Or,
            conditions: vec![Condition::new("name", Operator::IsEmpty, [])],
        };
        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(json["conjunction"], "or");
        assert_eq!(json["conditions"][0]["value"], serde_json::json!([]));
    }

    #[test]
    fn test_sort_wire_shape() {
        let json = serde_json::to_value(Sort::desc("created_at")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"field_name": "created_at", "desc": true})
        );
    }
}
