//! Runtime-checked bind for erased continuations.
//!
//! [`Monad::bind`] cannot be handed a function returning a foreign kind: the
//! signature rules it out. When the continuation is erased, returning a
//! [`Value`], that guarantee is gone, and [`DynamicBind::bind_dynamic`]
//! restores it with a runtime check that fails fast instead of letting a
//! foreign container into the chain.
//!
//! # Examples
//!
//! ```rust
//! use monadic_do::typeclass::{DynamicBind, MonadError, MonadKind, Value};
//!
//! let doubled = Some(2).bind_dynamic::<i32, _>(|n| Value::from(Some(n * 2)));
//! assert_eq!(doubled, Ok(Some(4)));
//!
//! let smuggled = Some(2).bind_dynamic::<i32, _>(|n| Value::from(Ok::<i32, ()>(n)));
//! assert!(matches!(
//!     smuggled,
//!     Err(MonadError::WrongMonadKind { expected: MonadKind::Option, .. })
//! ));
//! ```

use super::erased::Value;
use super::error::MonadError;
use super::monad::Monad;

/// Monads whose bind can be driven by an erased continuation.
///
/// Receivers that short-circuit return their short-circuit without calling
/// the function, exactly like [`Monad::bind`].
///
/// `IO` does not implement this trait: its continuation only runs when the
/// action is run, long after `bind` has returned, so there is no point at
/// which the check could report an error to the caller of `bind`.
pub trait DynamicBind: Monad {
    /// Binds a function returning an erased value, checking the kind of its result.
    ///
    /// # Errors
    ///
    /// Returns [`MonadError::WrongMonadKind`] if the function returns a
    /// container of another kind or a plain value, and
    /// [`MonadError::TypeMismatch`] if it returns this kind with an element
    /// type other than `B`.
    fn bind_dynamic<B, F>(self, function: F) -> Result<Self::WithType<B>, MonadError>
    where
        B: 'static,
        F: FnMut(Self::Inner) -> Value;
}

impl<A> DynamicBind for Option<A> {
    fn bind_dynamic<B, F>(self, mut function: F) -> Result<Option<B>, MonadError>
    where
        B: 'static,
        F: FnMut(A) -> Value,
    {
        match self {
            Some(value) => function(value).expect_monad::<Option<B>>(),
            None => Ok(None),
        }
    }
}

impl<T, E: 'static> DynamicBind for Result<T, E> {
    fn bind_dynamic<B, F>(self, mut function: F) -> Result<Result<B, E>, MonadError>
    where
        B: 'static,
        F: FnMut(T) -> Value,
    {
        match self {
            Ok(value) => function(value).expect_monad::<Result<B, E>>(),
            Err(error) => Ok(Err(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::MonadKind;
    use rstest::rstest;

    #[rstest]
    fn option_bind_dynamic_accepts_option() {
        let result = Some(3).bind_dynamic::<String, _>(|n| Value::from(Some(n.to_string())));
        assert_eq!(result, Ok(Some("3".to_string())));
    }

    #[rstest]
    fn option_bind_dynamic_rejects_result() {
        let result = Some(3).bind_dynamic::<i32, _>(|n| Value::from(Ok::<i32, String>(n)));
        let Err(MonadError::WrongMonadKind { expected, found }) = result else {
            panic!("expected WrongMonadKind");
        };
        assert_eq!(expected, MonadKind::Option);
        assert!(found.contains("Result"));
    }

    #[rstest]
    fn option_bind_dynamic_rejects_other_element_type() {
        let result = Some(3).bind_dynamic::<i32, _>(|_| Value::from(Some("three")));
        assert!(matches!(result, Err(MonadError::TypeMismatch { .. })));
    }

    #[rstest]
    fn none_bind_dynamic_skips_function() {
        let mut calls = 0;
        let result = None::<i32>.bind_dynamic::<i32, _>(|n| {
            calls += 1;
            Value::from(Some(n))
        });
        assert_eq!(result, Ok(None));
        assert_eq!(calls, 0);
    }

    #[rstest]
    fn result_bind_dynamic_rejects_option() {
        let result = Ok::<i32, String>(1).bind_dynamic::<i32, _>(|n| Value::from(Some(n)));
        assert!(matches!(
            result,
            Err(MonadError::WrongMonadKind {
                expected: MonadKind::Result,
                ..
            })
        ));
    }

    #[rstest]
    fn err_bind_dynamic_keeps_error() {
        let result = Err::<i32, String>("boom".to_string())
            .bind_dynamic::<i32, _>(|n| Value::from(Ok::<i32, String>(n)));
        assert_eq!(result, Ok(Err("boom".to_string())));
    }

    #[rstest]
    fn result_bind_dynamic_rejects_other_error_type() {
        let result = Ok::<i32, String>(1).bind_dynamic::<i32, _>(|n| Value::from(Ok::<i32, u8>(n)));
        assert!(matches!(result, Err(MonadError::TypeMismatch { .. })));
    }
}
