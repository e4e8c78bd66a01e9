//! Monad type class - sequencing computations within a context.
//!
//! A `Monad` lifts plain values into a container (`return_`) and sequences
//! computations where each step depends on the unwrapped result of the
//! previous one (`bind`). Short-circuiting containers (`None`, `Err`, an empty
//! list) skip the rest of the chain.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::return_(a).bind(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.bind(Self::return_) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic_do::typeclass::Monad;
//!
//! fn parse_positive(s: &str) -> Option<i32> {
//!     s.parse::<i32>().ok().filter(|&n| n > 0)
//! }
//!
//! let result = Some("42")
//!     .bind(parse_positive)
//!     .bind(|n| Some(n * 2));
//! assert_eq!(result, Some(84));
//! ```

use super::higher::TypeConstructor;
use super::kind::MonadKind;

/// A type class for types that support sequencing of computations.
///
/// The function passed to [`bind`](Monad::bind) is `FnMut` because `List`
/// calls it once per element, and `'static` because `IO` keeps it until the
/// action is run.
///
/// # Examples
///
/// ```rust
/// use monadic_do::typeclass::Monad;
///
/// let x = Some(5);
/// assert_eq!(x.bind(|n| Some(n * 2)), Some(10));
///
/// let failed: Result<i32, &str> = Err("boom");
/// assert_eq!(failed.bind(|n| Ok(n * 2)), Err("boom"));
/// ```
pub trait Monad: TypeConstructor + Sized {
    /// The concrete kind of this container.
    const KIND: MonadKind;

    /// Lifts a plain value into the container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_do::typeclass::Monad;
    ///
    /// assert_eq!(Option::return_(3), Some(3));
    /// assert_eq!(Result::<i32, String>::return_(3), Ok(3));
    /// ```
    fn return_(value: Self::Inner) -> Self;

    /// Alias for [`return_`](Monad::return_).
    #[inline]
    fn pure(value: Self::Inner) -> Self {
        Self::return_(value)
    }

    /// Applies a function to the value inside the container and flattens the result.
    ///
    /// In Haskell, this is `>>=`. A short-circuiting receiver returns its
    /// short-circuit without calling `function`.
    fn bind<B, F>(self, function: F) -> Self::WithType<B>
    where
        B: 'static,
        F: FnMut(Self::Inner) -> Self::WithType<B> + 'static;

    /// Alias for [`bind`](Monad::bind), matching `Option::and_then`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        B: 'static,
        F: FnMut(Self::Inner) -> Self::WithType<B> + 'static,
    {
        self.bind(function)
    }
}

impl<A> Monad for Option<A> {
    const KIND: MonadKind = MonadKind::Option;

    #[inline]
    fn return_(value: A) -> Self {
        Some(value)
    }

    #[inline]
    fn bind<B, F>(self, function: F) -> Option<B>
    where
        B: 'static,
        F: FnMut(A) -> Option<B> + 'static,
    {
        self.and_then(function)
    }
}

impl<T, E> Monad for Result<T, E> {
    const KIND: MonadKind = MonadKind::Result;

    #[inline]
    fn return_(value: T) -> Self {
        Ok(value)
    }

    #[inline]
    fn bind<B, F>(self, function: F) -> Result<B, E>
    where
        B: 'static,
        F: FnMut(T) -> Result<B, E> + 'static,
    {
        self.and_then(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_bind_some() {
        assert_eq!(Some(5).bind(|n| Some(n * 2)), Some(10));
    }

    #[rstest]
    fn option_bind_none_skips_function() {
        let none: Option<i32> = None;
        let result: Option<i32> = none.bind(|_| -> Option<i32> { panic!("must not be called") });
        assert_eq!(result, None);
    }

    #[rstest]
    fn option_bind_to_none() {
        assert_eq!(Some(5).bind(|_| None::<i32>), None);
    }

    #[rstest]
    #[case(Ok(4), Ok(8))]
    #[case(Err("boom"), Err("boom"))]
    fn result_bind(
        #[case] input: Result<i32, &'static str>,
        #[case] expected: Result<i32, &'static str>,
    ) {
        assert_eq!(input.bind(|n| Ok(n * 2)), expected);
    }

    #[rstest]
    fn result_bind_keeps_first_error() {
        let failed: Result<i32, String> = Err("first".to_string());
        let result: Result<i32, String> = failed.bind(|n| Err(format!("second {n}")));
        assert_eq!(result, Err("first".to_string()));
    }

    #[rstest]
    fn pure_is_return() {
        assert_eq!(Option::pure(1), Option::return_(1));
        assert_eq!(Result::<i32, ()>::pure(1), Ok(1));
    }

    #[rstest]
    fn and_then_equals_bind() {
        let function = |n: i32| if n > 0 { Some(n) } else { None };
        assert_eq!(Some(3).and_then(function), Some(3).bind(function));
        assert_eq!(Some(-3).and_then(function), None);
    }

    #[rstest]
    fn kinds_are_tagged() {
        assert_eq!(<Option<u8> as Monad>::KIND, MonadKind::Option);
        assert_eq!(<Result<u8, ()> as Monad>::KIND, MonadKind::Result);
    }
}
