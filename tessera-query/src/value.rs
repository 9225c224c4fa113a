//! Argument values accepted by `Where`/`Or` placeholders.

use chrono::{DateTime, Utc};

/// A typed placeholder argument.
///
/// Whatever the source type, the predicate parser string-encodes it into
/// the condition's value list; see
/// [`predicate::parse`](crate::predicate::parse) for the per-type rules.
///
/// ```rust
/// use tessera_query::Value;
///
/// let v: Value = 42.into();
/// assert!(matches!(v, Value::Int(42)));
///
/// let v: Value = "hello".into();
/// assert!(matches!(v, Value::Str(_)));
///
/// let v: Value = vec!["a".to_string(), "b".to_string()].into();
/// assert!(matches!(v, Value::StrList(_)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Text.
    Str(String),
    /// A list of texts, passed through unchanged (for `in`).
    StrList(Vec<String>),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    UInt(u64),
    /// Floating point number.
    Float(f64),
    /// Boolean.
    Bool(bool),
    /// Date/time instant.
    Time(DateTime<Utc>),
    /// Structured value, encoded as JSON text.
    Json(serde_json::Value),
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Self::Str(String::from_utf8_lossy(v).into_owned())
    }
}

impl From<Vec<String>> for Value {
    fn from(v: Vec<String>) -> Self {
        Self::StrList(v)
    }
}

impl From<Vec<&str>> for Value {
    fn from(v: Vec<&str>) -> Self {
        Self::StrList(v.into_iter().map(str::to_string).collect())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(v as f64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Self::Time(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Self::Json(v)
    }
}

macro_rules! impl_value_from_int {
    (signed: $($ty:ty),* $(,)?) => {$(
        impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Self::Int(v as i64)
            }
        }
    )*};
    (unsigned: $($ty:ty),* $(,)?) => {$(
        impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Self::UInt(v as u64)
            }
        }
    )*};
}

impl_value_from_int!(signed: i8, i16, i32, i64, isize);
impl_value_from_int!(unsigned: u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_integer_conversions() {
        assert_eq!(Value::from(-3i8), Value::Int(-3));
        assert_eq!(Value::from(7i64), Value::Int(7));
        assert_eq!(Value::from(7u16), Value::UInt(7));
        assert_eq!(Value::from(u64::MAX), Value::UInt(u64::MAX));
    }

    #[test]
    fn test_byte_slice_is_lossy_text() {
        let bytes: &[u8] = b"caf\xc3\xa9";
        assert_eq!(Value::from(bytes), Value::Str("café".into()));
    }

    #[test]
    fn test_str_list_conversions() {
        assert_eq!(
            Value::from(vec!["a", "b"]),
            Value::StrList(vec!["a".into(), "b".into()])
        );
    }

    #[test]
    fn test_float_widening() {
        match Value::from(2.5f32) {
            Value::Float(f) => assert_eq!(f, 2.5),
            other => panic!("expected float, got {other:?}"),
        }
    }
}
