//! Do-notation.
//!
//! This module provides the interpreter that lets a computation be written
//! as a sequence of binds over any [`Monad`](crate::typeclass::Monad):
//!
//! - [`DoBlock`]: a step generator, suspended at each bind
//! - [`run_do`]: drives a block, unwrapping each yielded container
//! - [`Chain`]: a block built from one continuation per bind
//! - [`run_chain`]: `run_do` with the result type tied to the chain
//! - [`do_!`](crate::do_): macro syntax over `Chain`
//!
//! # Examples
//!
//! ## Short-Circuit
//!
//! ```rust
//! use monadic_do::control::{run_chain, Chain};
//! use monadic_do::typeclass::MonadError;
//!
//! let result: Result<Option<i32>, MonadError> = run_chain(|| {
//!     Chain::bind(Some(1), |x| {
//!         Chain::bind(None::<i32>, move |y| Chain::done(Some(x + y)))
//!     })
//! });
//! assert_eq!(result, Ok(None));
//! ```
//!
//! ## Kind Checks
//!
//! ```rust
//! use monadic_do::do_;
//! use monadic_do::typeclass::{MonadError, MonadKind};
//!
//! let result: Result<Option<i32>, MonadError> = do_! {
//!     x <= Some(1);
//!     y <= Ok::<i32, String>(2);
//!     Some(x + y)
//! };
//! assert!(matches!(
//!     result,
//!     Err(MonadError::InconsistentMonadKind { found: MonadKind::Result, .. })
//! ));
//! ```

mod chain;
mod do_block;
mod do_macro;
mod interpreter;

pub use chain::{Chain, run_chain};
pub use do_block::{DoBlock, Step, downcast_input};
pub use interpreter::run_do;
