//! Monoid type class - semigroups with an identity element.
//!
//! A type `T` is a monoid if it has an associative `combine` (from
//! [`Semigroup`]) and a `zero` such that for all `a`:
//!
//! ```text
//! T::zero().combine(a) == a
//! a.combine(T::zero()) == a
//! ```
//!
//! For containers, `zero` is the short-circuit: `None`, the empty list.
//!
//! # Examples
//!
//! ```rust
//! use monadic_do::typeclass::{Monoid, Semigroup};
//!
//! assert_eq!(Option::<i32>::zero(), None);
//! assert_eq!(Option::zero().combine(Some(3)), Some(3));
//! assert_eq!(Some(3).combine(Option::zero()), Some(3));
//! ```

use super::semigroup::Semigroup;

/// A type class for semigroups with an identity element.
pub trait Monoid: Semigroup {
    /// Returns the identity element for [`combine`](Semigroup::combine).
    fn zero() -> Self;

    /// Combines all elements in an iterator, starting from [`zero`](Monoid::zero).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_do::typeclass::Monoid;
    ///
    /// assert_eq!(Option::combine_all(vec![None, Some(1), Some(2)]), Some(1));
    /// assert_eq!(Option::<i32>::combine_all(Vec::new()), None);
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::zero(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value is the identity element.
    fn is_zero(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::zero()
    }
}

impl<A> Monoid for Option<A> {
    #[inline]
    fn zero() -> Self {
        None
    }
}
