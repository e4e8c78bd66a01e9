//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic_do::typeclass::Semigroup;
//!
//! // The first present value wins
//! assert_eq!(None.combine(Some(2)), Some(2));
//! assert_eq!(Some(1).combine(Some(2)), Some(1));
//! ```

/// A type class for types with an associative binary operation.
///
/// For containers this is the choice operator of `MonadPlus`: `Option`
/// keeps the first present value, `List` concatenates.
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines all elements of a non-empty iterator.
    ///
    /// Returns `None` if the iterator is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_do::typeclass::Semigroup;
    ///
    /// let options = vec![None, Some(2), Some(3)];
    /// assert_eq!(Option::reduce_all(options), Some(Some(2)));
    ///
    /// let empty: Vec<Option<i32>> = vec![];
    /// assert_eq!(Option::reduce_all(empty), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator.into_iter().reduce(Self::combine)
    }
}

/// `Option` combines by choice: the first `Some` wins.
impl<A> Semigroup for Option<A> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        self.or(other)
    }
}
