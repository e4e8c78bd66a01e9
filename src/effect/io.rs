//! IO Monad - Deferred side effect handling.
//!
//! The `IO` type represents a computation that may perform side effects.
//! Side effects are not executed until `run_unsafe` is called, maintaining
//! referential transparency in pure code.
//!
//! # Design Philosophy
//!
//! IO "describes" side effects but doesn't "execute" them. Execution happens
//! only via `run_unsafe`, which should be called at the program's "edge".
//! A do-block over `IO` is such an edge: the interpreter runs each IO step
//! when it needs the step's value.
//!
//! # Examples
//!
//! ```rust
//! use monadic_do::effect::IO;
//! use monadic_do::typeclass::Monad;
//!
//! let io = IO::pure(10)
//!     .fmap(|x| x * 2)
//!     .bind(|x| IO::pure(x + 1));
//! assert_eq!(io.run_unsafe(), 21);
//! ```
//!
//! # Side Effect Deferral
//!
//! ```rust
//! use monadic_do::effect::IO;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let executed = Rc::new(Cell::new(false));
//! let flag = Rc::clone(&executed);
//!
//! let io = IO::new(move || {
//!     flag.set(true);
//!     42
//! });
//!
//! assert!(!executed.get());
//! assert_eq!(io.run_unsafe(), 42);
//! assert!(executed.get());
//! ```

use std::any::Any;
use std::rc::Rc;

use crate::typeclass::{ErasedMonad, Monad, MonadKind, TypeConstructor, Unwrapped};

/// A monad representing deferred side effects.
///
/// `IO<A>` wraps a computation that produces a value of type `A` and may
/// perform side effects. The computation is not executed until `run_unsafe`
/// is called, and an `IO` never short-circuits.
///
/// # Monad Laws
///
/// 1. **Left Identity**: `IO::pure(a).bind(f) == f(a)`
/// 2. **Right Identity**: `m.bind(IO::pure) == m`
/// 3. **Associativity**: `m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))`
///
/// (equality meaning: running both sides performs the same effects and
/// produces the same value)
pub struct IO<A> {
    run_io: Box<dyn FnOnce() -> A>,
}

impl<A: 'static> IO<A> {
    /// Creates a new IO action from a closure.
    ///
    /// The closure will not be executed until `run_unsafe` is called.
    pub fn new<F>(action: F) -> Self
    where
        F: FnOnce() -> A + 'static,
    {
        Self {
            run_io: Box::new(action),
        }
    }

    /// Wraps a pure value in an IO action.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_do::effect::IO;
    ///
    /// assert_eq!(IO::pure(42).run_unsafe(), 42);
    /// ```
    pub fn pure(value: A) -> Self {
        Self::new(move || value)
    }

    /// Executes the IO action and returns the result.
    ///
    /// This is named `run_unsafe` to indicate that it executes side effects.
    /// While it's memory-safe, calling it breaks referential transparency.
    pub fn run_unsafe(self) -> A {
        (self.run_io)()
    }

    /// Transforms the result of an IO action using a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_do::effect::IO;
    ///
    /// let io = IO::pure(21).fmap(|x| x * 2);
    /// assert_eq!(io.run_unsafe(), 42);
    /// ```
    pub fn fmap<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        IO::new(move || function(self.run_unsafe()))
    }

    /// Chains IO actions, passing the result of the first to a function
    /// that produces the second.
    ///
    /// Unlike [`Monad::bind`], this accepts a `FnOnce`.
    pub fn flat_map<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> IO<B> + 'static,
        B: 'static,
    {
        IO::new(move || {
            let a = self.run_unsafe();
            function(a).run_unsafe()
        })
    }

    /// Sequences two IO actions, discarding the result of the first.
    ///
    /// The first action is still executed for its side effects.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_do::effect::IO;
    ///
    /// let io = IO::pure(10).then(IO::pure(20));
    /// assert_eq!(io.run_unsafe(), 20);
    /// ```
    pub fn then<B>(self, next: IO<B>) -> IO<B>
    where
        B: 'static,
    {
        self.flat_map(move |_| next)
    }

    /// Combines two IO actions using a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_do::effect::IO;
    ///
    /// let io = IO::pure(10).map2(IO::pure(20), |a, b| a + b);
    /// assert_eq!(io.run_unsafe(), 30);
    /// ```
    pub fn map2<B, C, F>(self, other: IO<B>, function: F) -> IO<C>
    where
        F: FnOnce(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        self.flat_map(move |a| other.fmap(move |b| function(a, b)))
    }
}

// =============================================================================
// Type Classes
// =============================================================================

impl<A> TypeConstructor for IO<A> {
    type Inner = A;
    type WithType<B> = IO<B>;
}

impl<A: 'static> Monad for IO<A> {
    const KIND: MonadKind = MonadKind::IO;

    fn return_(value: A) -> Self {
        Self::pure(value)
    }

    fn bind<B, F>(self, function: F) -> IO<B>
    where
        B: 'static,
        F: FnMut(A) -> IO<B> + 'static,
    {
        self.flat_map(function)
    }
}

impl<A: 'static> ErasedMonad for IO<A> {
    fn kind(&self) -> MonadKind {
        MonadKind::IO
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn unwrap_step(self: Box<Self>) -> Unwrapped {
        Unwrapped::Continue(vec![Rc::new(self.run_unsafe())])
    }

    fn short_circuit(_residue: Box<dyn Any>) -> Option<Self> {
        None
    }
}
