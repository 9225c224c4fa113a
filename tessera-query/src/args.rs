//! Conversions from caller arguments to predicate placeholder values.

use smallvec::{SmallVec, smallvec};

use crate::value::Value;

/// Argument list handed to the predicate parser. Almost always 0 or 1
/// element, since the grammar admits at most one placeholder.
pub type Args = SmallVec<[Value; 1]>;

/// Anything that can be passed as the argument side of a `Where`/`Or` call.
///
/// Implemented for `()` (no arguments), every scalar convertible into
/// [`Value`], and tuples of up to three such scalars. The tuple forms exist
/// so arity mismatches still reach the parser and fail with its
/// `ArgCountMismatch` diagnostics rather than at the type level.
///
/// ```rust
/// use tessera_query::IntoArgs;
///
/// assert_eq!(().into_args().len(), 0);
/// assert_eq!(18.into_args().len(), 1);
/// assert_eq!(("a", "b").into_args().len(), 2);
/// ```
pub trait IntoArgs {
    /// Convert into the parser's argument list.
    fn into_args(self) -> Args;
}

impl IntoArgs for () {
    fn into_args(self) -> Args {
        SmallVec::new()
    }
}

macro_rules! impl_scalar_into_args {
    ($($ty:ty),* $(,)?) => {$(
        impl IntoArgs for $ty {
            fn into_args(self) -> Args {
                smallvec![Value::from(self)]
            }
        }
    )*};
}

impl_scalar_into_args!(
    &str,
    String,
    &[u8],
    Vec<String>,
    Vec<&str>,
    bool,
    i8,
    i16,
    i32,
    i64,
    isize,
    u8,
    u16,
    u32,
    u64,
    usize,
    f32,
    f64,
    chrono::DateTime<chrono::Utc>,
    serde_json::Value,
    Value,
);

impl<T1: Into<Value>> IntoArgs for (T1,) {
    fn into_args(self) -> Args {
        smallvec![self.0.into()]
    }
}

impl<T1: Into<Value>, T2: Into<Value>> IntoArgs for (T1, T2) {
    fn into_args(self) -> Args {
        smallvec![self.0.into(), self.1.into()]
    }
}

impl<T1: Into<Value>, T2: Into<Value>, T3: Into<Value>> IntoArgs for (T1, T2, T3) {
    fn into_args(self) -> Args {
        smallvec![self.0.into(), self.1.into(), self.2.into()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_is_empty() {
        assert!(().into_args().is_empty());
    }

    #[test]
    fn test_scalars_are_single() {
        assert_eq!("x".into_args().len(), 1);
        assert_eq!(3.5f64.into_args().len(), 1);
        assert_eq!(vec!["a", "b"].into_args().len(), 1);
    }

    #[test]
    fn test_tuples_keep_arity() {
        assert_eq!((1,).into_args().len(), 1);
        assert_eq!((1, 2).into_args().len(), 2);
        assert_eq!((1, "two", true).into_args().len(), 3);
    }
}
