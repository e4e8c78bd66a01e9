//! Container data types that are not provided by the standard library.
//!
//! - [`List`]: the list monad (non-deterministic computation)
//!
//! `Option` and `Result` are used directly from `std`; the type class
//! instances for them live in [`typeclass`](crate::typeclass).

mod list;

pub use list::List;
