//! Type class traits for monadic containers.
//!
//! - [`Monad`]: `bind` and `return_`, implemented for `Option`, `Result`,
//!   [`List`](crate::data::List) and [`IO`](crate::effect::IO)
//! - [`Semigroup`] / [`Monoid`]: `combine` and its identity `zero`
//! - [`MonadPlus`]: monads that are also monoids
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types. This module
//! uses Generic Associated Types ([`TypeConstructor`]) so that `bind` can
//! require, in its signature, a function returning the same container kind
//! as the receiver.
//!
//! ## The Erased Layer
//!
//! The do-notation interpreter works on containers whose element types change
//! from step to step, so it sees them through [`ErasedMonad`] and [`Value`].
//! There, the kind is a runtime tag ([`MonadKind`]) and contract violations
//! are reported as [`MonadError`]. [`DynamicBind`] offers the same checked
//! bind to callers that build continuations out of erased values.
//!
//! # Examples
//!
//! ```rust
//! use monadic_do::typeclass::{Monad, Monoid, Semigroup};
//!
//! let halved = Some(10).bind(|n| if n % 2 == 0 { Some(n / 2) } else { None });
//! assert_eq!(halved, Some(5));
//!
//! let chosen = Option::zero().combine(Some(1)).combine(Some(2));
//! assert_eq!(chosen, Some(1));
//! ```

mod dynamic_bind;
mod erased;
mod error;
mod higher;
mod kind;
mod monad;
mod monad_plus;
mod monoid;
mod semigroup;

pub use dynamic_bind::DynamicBind;
pub use erased::{ErasedMonad, Unwrapped, Value};
pub use error::MonadError;
pub use higher::TypeConstructor;
pub use kind::MonadKind;
pub use monad::Monad;
pub use monad_plus::MonadPlus;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
