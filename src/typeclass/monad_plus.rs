//! `MonadPlus` - monads that are also monoids.
//!
//! No new operations are required: a `MonadPlus` is a [`Monad`] whose
//! [`Monoid`] instance provides choice (`combine`) and failure (`zero`). The
//! trait is implemented for every type that has both.
//!
//! Beyond the monoid laws, `zero` is expected to be the short-circuit of the
//! monad:
//!
//! ```text
//! Self::zero().bind(f) == zero
//! ```

use super::monad::Monad;
use super::monoid::Monoid;

/// The conjunction of [`Monad`] and [`Monoid`].
///
/// # Examples
///
/// ```rust
/// use monadic_do::typeclass::MonadPlus;
///
/// fn lookup(key: &str) -> Option<u16> {
///     match key {
///         "http" => Some(80),
///         "https" => Some(443),
///         _ => None,
///     }
/// }
///
/// let port = Option::first_of(["gopher", "https", "http"].map(lookup));
/// assert_eq!(port, Some(443));
/// ```
pub trait MonadPlus: Monad + Monoid {
    /// Returns the first non-zero value, or `zero` if there is none.
    ///
    /// For `Option` this is the first present value; for `List` it is the
    /// concatenation of all the lists.
    fn first_of<I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::combine_all(candidates)
    }
}

impl<T: Monad + Monoid> MonadPlus for T {}
