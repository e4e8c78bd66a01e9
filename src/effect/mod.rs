//! Deferred side effects.
//!
//! The [`IO`] type represents a computation that may perform side effects.
//! Side effects are deferred until `run_unsafe` is called, maintaining
//! referential transparency in pure code.
//!
//! ```rust
//! use monadic_do::effect::IO;
//! use monadic_do::typeclass::Monad;
//!
//! // Create and chain IO actions
//! let io = IO::pure(10)
//!     .fmap(|x| x * 2)
//!     .bind(|x| IO::pure(x + 1));
//!
//! // Side effects don't occur until run_unsafe is called
//! assert_eq!(io.run_unsafe(), 21);
//! ```

mod io;

pub use io::IO;
