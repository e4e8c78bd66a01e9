//! # monadic-do
//!
//! A small monad toolkit for Rust: a common `bind`/`return_` contract over
//! several container kinds, a do-notation interpreter that drives step
//! generators over any of them, and monoid structure for the kinds that
//! have one.
//!
//! ## Overview
//!
//! - **Type Classes**: `Monad`, `Semigroup`, `Monoid`, `MonadPlus`, plus the
//!   erased layer (`ErasedMonad`, `Value`, `DynamicBind`) with runtime kind checks
//! - **Data**: `List`, the non-deterministic list monad
//! - **Control**: `run_do`, `DoBlock`, `Chain` and the `do_!` macro
//! - **Effect**: `IO`, deferred side effects
//!
//! `Option` and `Result` from the standard library are monads here as they are.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and the erased layer
//! - `data`: `List`
//! - `control`: The do-notation interpreter and `do_!`
//! - `effect`: `IO`
//! - `serde`: Serialization for `List`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use monadic_do::prelude::*;
//! use monadic_do::do_;
//!
//! let result: Result<Option<i32>, MonadError> = do_! {
//!     x <= Some(1);
//!     y <= Some(2);
//!     Some(x + y)
//! };
//! assert_eq!(result, Ok(Some(3)));
//!
//! let halves = Some(8).bind(|n| Some(n / 2));
//! assert_eq!(halves, Some(4));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use monadic_do::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "data")]
    pub use crate::data::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "data")]
pub mod data;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;
