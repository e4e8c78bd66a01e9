//! `do_!` macro for do-notation over any [`Monad`](crate::typeclass::Monad).
//!
//! The macro builds a [`Chain`](crate::control::Chain) from its body and hands
//! it to [`run_chain`](crate::control::run_chain), so it evaluates to
//! `Result<M, MonadError>` where `M` is the container type the caller asks
//! for. The final expression is an `M` as well, so `Ok(x)` in a `Result`
//! block needs no turbofish.
//!
//! # Syntax
//!
//! - `pattern <= expression;` - Bind: suspends on a container and binds its value
//! - `let pattern = expression;` - Pure let binding
//! - `expression` - Final expression, the block's result container
//!
//! `<-` is not a single token in Rust, so binding uses `<=`.
//!
//! # Examples
//!
//! ```rust
//! use monadic_do::do_;
//! use monadic_do::data::List;
//! use monadic_do::typeclass::MonadError;
//!
//! let result: Result<Option<i32>, MonadError> = do_! {
//!     x <= Some(5);
//!     y <= Some(10);
//!     let z = x + y;
//!     Some(z * 2)
//! };
//! assert_eq!(result, Ok(Some(30)));
//!
//! let pairs: Result<List<(i32, i32)>, MonadError> = do_! {
//!     x <= List::from([1, 2]);
//!     y <= List::from([3, 4]);
//!     List::singleton((x, y))
//! };
//! assert_eq!(pairs, Ok(List::from([(1, 3), (1, 4), (2, 3), (2, 4)])));
//! ```
//!
//! # Evaluation
//!
//! Each bind becomes a `move` closure receiving the bound value, as with
//! `flat_map`. Every step expression and statement runs once per branch.
//! A forked `List` branch starts from a fresh chain and evaluates the steps
//! before its fork point again, so bound values must be `Clone`.
//!
//! The closures move what they use. Outer state that must outlive the block,
//! such as a counter, enters it by reference:
//!
//! ```rust
//! use std::cell::Cell;
//! use monadic_do::do_;
//! use monadic_do::typeclass::MonadError;
//!
//! let calls = Cell::new(0);
//! let calls = &calls;
//! let result: Result<Option<i32>, MonadError> = do_! {
//!     x <= { calls.set(calls.get() + 1); Some(1) };
//!     y <= { calls.set(calls.get() + 1); Some(2) };
//!     Some(x + y)
//! };
//! assert_eq!(result, Ok(Some(3)));
//! assert_eq!(calls.get(), 2);
//! ```

/// Do-notation over any kind the interpreter supports.
///
/// ```text
/// do_! {
///     pattern <= container;      // suspend and bind
///     let pattern = expression;  // pure let binding
///     container                  // the result
/// }
/// ```
///
/// # Examples
///
/// ```rust
/// use monadic_do::do_;
/// use monadic_do::typeclass::MonadError;
///
/// let result: Result<Option<i32>, MonadError> = do_! {
///     x <= Some(5);
///     _ <= None::<()>;
///     Some(x)
/// };
/// assert_eq!(result, Ok(None));
/// ```
#[macro_export]
macro_rules! do_ {
    ($($body:tt)+) => {
        $crate::control::run_chain(|| $crate::__do_steps!($($body)+))
    };
}

/// Expands the statements of a [`do_!`] body into a [`Chain`](crate::control::Chain).
#[doc(hidden)]
#[macro_export]
macro_rules! __do_steps {
    // Final expression
    ($result:expr) => {
        $crate::control::Chain::done($result)
    };

    // pattern <= container; rest
    ($pattern:ident <= $monad:expr ; $($rest:tt)+) => {
        $crate::control::Chain::bind($monad, move |$pattern| {
            $crate::__do_steps!($($rest)+)
        })
    };

    (($($pattern:tt)*) <= $monad:expr ; $($rest:tt)+) => {
        $crate::control::Chain::bind($monad, move |($($pattern)*)| {
            $crate::__do_steps!($($rest)+)
        })
    };

    (_ <= $monad:expr ; $($rest:tt)+) => {
        $crate::control::Chain::bind($monad, move |_| {
            $crate::__do_steps!($($rest)+)
        })
    };

    // let pattern = expression; rest
    (let $pattern:ident = $expr:expr ; $($rest:tt)+) => {
        {
            let $pattern = $expr;
            $crate::__do_steps!($($rest)+)
        }
    };

    (let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {
        {
            let ($($pattern)*) = $expr;
            $crate::__do_steps!($($rest)+)
        }
    };
}
