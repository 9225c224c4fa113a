//! The SQL-ish predicate mini-grammar.
//!
//! Two forms are accepted:
//!
//! 1. `"<field> <operator>"`: no placeholder, no arguments. Only the
//!    emptiness-testing operators are legal here (`isEmpty`, `isNotEmpty`
//!    and their `is null` / `is empty` style aliases).
//! 2. `"<field> <operator> ?"`: exactly one placeholder, exactly one
//!    argument, which is string-encoded by type.
//!
//! The field is the first whitespace-delimited token; the operator is
//! everything between the field and the optional `?`, so multi-word aliases
//! like `is not null` work. Matching is an explicit tokenizer over a static
//! alias table, no regular expressions.
//!
//! ```rust
//! use tessera_query::predicate::parse;
//! use tessera_api::Operator;
//!
//! let cond = parse("age > ?", &[18.into()]).unwrap().unwrap();
//! assert_eq!(cond.field_name, "age");
//! assert_eq!(cond.operator, Operator::IsGreater);
//! assert_eq!(cond.value.as_slice(), ["18".to_string()]);
//! ```

use chrono::{DateTime, Utc};
use smallvec::{SmallVec, smallvec};

use tessera_api::{Condition, ConditionValue, Operator};

use crate::error::ParseError;
use crate::value::Value;

/// Operator alias table, source token to canonical wire tag.
///
/// Multi-word aliases are matched after the tokenizer has collapsed
/// whitespace, so `"is  not   null"` still resolves.
const OPERATOR_ALIASES: &[(&str, Operator)] = &[
    ("=", Operator::Is),
    ("is", Operator::Is),
    ("!=", Operator::IsNot),
    ("<>", Operator::IsNot),
    ("isNot", Operator::IsNot),
    ("contains", Operator::Contains),
    ("doesNotContain", Operator::DoesNotContain),
    ("isEmpty", Operator::IsEmpty),
    ("is empty", Operator::IsEmpty),
    ("is null", Operator::IsEmpty),
    ("isNotEmpty", Operator::IsNotEmpty),
    ("is not empty", Operator::IsNotEmpty),
    ("is not null", Operator::IsNotEmpty),
    (">", Operator::IsGreater),
    ("isGreater", Operator::IsGreater),
    (">=", Operator::IsGreaterEqual),
    ("isGreaterEqual", Operator::IsGreaterEqual),
    ("<", Operator::IsLess),
    ("isLess", Operator::IsLess),
    ("<=", Operator::IsLessEqual),
    ("isLessEqual", Operator::IsLessEqual),
    ("like", Operator::Like),
    ("in", Operator::In),
];

fn lookup_operator(token: &str) -> Option<Operator> {
    OPERATOR_ALIASES
        .iter()
        .find(|(alias, _)| *alias == token)
        .map(|(_, op)| *op)
}

/// Parse one predicate expression into a filter condition.
///
/// `Ok(None)` is the silent no-op path: an empty expression with no
/// arguments appends nothing and raises nothing. Every failure leaves the
/// caller's filter untouched; unknown operators fail hard rather than
/// appending a best-effort condition.
pub fn parse(expr: &str, args: &[Value]) -> Result<Option<Condition>, ParseError> {
    let placeholders = expr.matches('?').count();
    if placeholders >= 2 {
        return Err(ParseError::ArgCountMismatch {
            expr: expr.to_string(),
            placeholders,
            args: args.len(),
        });
    }

    let trimmed = expr.trim();
    if placeholders == 0 && trimmed.is_empty() && args.is_empty() {
        return Ok(None);
    }
    if placeholders != args.len() {
        return Err(ParseError::ArgCountMismatch {
            expr: expr.to_string(),
            placeholders,
            args: args.len(),
        });
    }

    if placeholders == 0 {
        parse_bare(expr, trimmed)
    } else {
        parse_with_placeholder(expr, trimmed, &args[0])
    }
}

/// Form 1: `"<field> <operator>"` with an emptiness-testing operator.
fn parse_bare(expr: &str, trimmed: &str) -> Result<Option<Condition>, ParseError> {
    let mut tokens = trimmed.split_whitespace();
    let Some(field) = tokens.next() else {
        return Err(ParseError::NoMatch {
            expr: expr.to_string(),
        });
    };
    let op_text = tokens.collect::<Vec<_>>().join(" ");
    if op_text.is_empty() {
        return Err(ParseError::NoMatch {
            expr: expr.to_string(),
        });
    }

    let operator = lookup_operator(&op_text).ok_or_else(|| ParseError::UnknownOperator {
        expr: expr.to_string(),
        token: op_text.clone(),
    })?;
    if operator.requires_value() {
        // A value-requiring operator without a placeholder is a grammar
        // mismatch, not an empty comparison.
        return Err(ParseError::NoMatch {
            expr: expr.to_string(),
        });
    }

    Ok(Some(Condition::new(field, operator, [])))
}

/// Form 2: `"<field> <operator> ?"` with exactly one argument.
fn parse_with_placeholder(
    expr: &str,
    trimmed: &str,
    arg: &Value,
) -> Result<Option<Condition>, ParseError> {
    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    if tokens.len() < 3 || tokens.last().copied() != Some("?") {
        return Err(ParseError::NoMatch {
            expr: expr.to_string(),
        });
    }
    let field = tokens[0];
    let op_text = tokens[1..tokens.len() - 1].join(" ");

    let operator = lookup_operator(&op_text).ok_or_else(|| ParseError::UnknownOperator {
        expr: expr.to_string(),
        token: op_text.clone(),
    })?;
    let value = encode_value(operator, arg)?;

    Ok(Some(Condition {
        field_name: field.to_string(),
        operator,
        value,
    }))
}

/// String-encode one placeholder argument for the given operator.
fn encode_value(operator: Operator, value: &Value) -> Result<ConditionValue, ParseError> {
    let encoded = match value {
        Value::Str(s) => smallvec![s.clone()],
        Value::StrList(items) => items.iter().cloned().collect(),
        Value::Int(n) => smallvec![n.to_string()],
        Value::UInt(n) => smallvec![n.to_string()],
        Value::Float(f) => smallvec![format!("{f:.6}")],
        Value::Bool(b) => smallvec![b.to_string()],
        Value::Time(t) => return encode_time(operator, *t),
        Value::Json(v) => {
            smallvec![serde_json::to_string(v).unwrap_or_else(|_| v.to_string())]
        }
    };
    Ok(encoded)
}

/// Date operands are operator-dependent: the emptiness tests take an empty
/// value, the three comparisons the service allows take the
/// `["ExactDate", millis]` form, and everything else is rejected.
fn encode_time(operator: Operator, t: DateTime<Utc>) -> Result<ConditionValue, ParseError> {
    match operator {
        Operator::IsEmpty | Operator::IsNotEmpty => Ok(SmallVec::new()),
        Operator::Is | Operator::IsGreater | Operator::IsLess => Ok(smallvec![
            "ExactDate".to_string(),
            t.timestamp_millis().to_string(),
        ]),
        _ => Err(ParseError::UnsupportedOperatorForType { operator }),
    }
}
