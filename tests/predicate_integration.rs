//! Predicate grammar properties exercised through the public API.

mod common;

use chrono::{TimeZone, Utc};
use common::test_db;
use pretty_assertions::assert_eq;
use tessera_orm::api::{Conjunction, Operator};
use tessera_orm::predicate::parse;
use tessera_orm::ParseErrorKind;

#[test]
fn where_builds_the_documented_condition() {
    let (_, db) = test_db();

    let stmt = db.r#where("age > ?", 18).statement().cloned().unwrap();

    assert_eq!(stmt.filter.conjunction, Some(Conjunction::And));
    assert_eq!(stmt.filter.conditions.len(), 1);
    let cond = &stmt.filter.conditions[0];
    assert_eq!(cond.field_name, "age");
    assert_eq!(cond.operator, Operator::IsGreater);
    assert_eq!(cond.value.as_slice(), ["18".to_string()]);
}

#[test]
fn bare_emptiness_test_has_empty_value() {
    let (_, db) = test_db();

    let stmt = db.r#where("name is empty", ()).statement().cloned().unwrap();

    let cond = &stmt.filter.conditions[0];
    assert_eq!(cond.field_name, "name");
    assert_eq!(cond.operator, Operator::IsEmpty);
    assert!(cond.value.is_empty());
}

#[test]
fn or_rejoins_earlier_conditions() {
    let (_, db) = test_db();

    let stmt = db
        .r#where("age > ?", 18)
        .or("role = ?", "admin")
        .statement()
        .cloned()
        .unwrap();

    assert_eq!(stmt.filter.conjunction, Some(Conjunction::Or));
    assert_eq!(stmt.filter.conditions.len(), 2);
}

#[test]
fn arity_mismatches_append_nothing() {
    for (expr, args) in [("age > ?", 0usize), ("age > 5", 1), ("a ? b ?", 2)] {
        let result = match args {
            0 => parse(expr, &[]),
            1 => parse(expr, &[18.into()]),
            _ => parse(expr, &[1.into(), 2.into()]),
        };
        let err = result.unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::ArgCountMismatch, "{expr:?}");
    }
}

#[test]
fn date_arguments_encode_per_operator() {
    let t = Utc.with_ymd_and_hms(2025, 1, 7, 0, 0, 0).unwrap();

    let cond = parse("updated_at > ?", &[t.into()]).unwrap().unwrap();
    assert_eq!(
        cond.value.as_slice(),
        ["ExactDate".to_string(), t.timestamp_millis().to_string()]
    );

    let err = parse("updated_at contains ?", &[t.into()]).unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::UnsupportedOperatorForType);
}

#[test]
fn reparsing_canonical_operators_is_stable() {
    for op in Operator::ALL {
        let cond = if op.requires_value() {
            parse(&format!("f {} ?", op.as_str()), &["v".into()])
        } else {
            parse(&format!("f {}", op.as_str()), &[])
        }
        .unwrap()
        .unwrap();
        assert_eq!(cond.operator, op);
    }
}

#[test]
fn locator_examples_from_the_docs() {
    let (_, db) = test_db();

    let ok = db.base_table("app123.tbl456");
    let stmt = ok.statement().unwrap();
    assert_eq!(stmt.table.app_token, "app123");
    assert_eq!(stmt.table.table_id, "tbl456");

    let bad = db.base_table("app123");
    assert!(matches!(
        bad.error(),
        Some(tessera_orm::Error::LocatorFormat(_))
    ));
}
