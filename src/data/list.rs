//! The list monad.
//!
//! [`List`] is an ordered sequence of zero or more values. As a monad it
//! models non-deterministic computation: `bind` applies the function to every
//! element in order and concatenates the results, and the empty list is the
//! short-circuit.
//!
//! # Examples
//!
//! ```rust
//! use monadic_do::data::List;
//! use monadic_do::typeclass::Monad;
//!
//! let list = List::from(vec![1, 2]);
//! let result = list.bind(|x| List::from(vec![x, x * 10]));
//! assert_eq!(result, List::from(vec![1, 10, 2, 20]));
//! ```

use std::any::Any;
use std::ops::BitOr;
use std::rc::Rc;

use crate::typeclass::{
    DynamicBind, ErasedMonad, Monad, MonadError, MonadKind, Monoid, Semigroup, TypeConstructor,
    Unwrapped, Value,
};

/// An ordered sequence of values, forming the list monad.
///
/// `List` is an immutable value: every operation consumes its receiver and
/// returns a new list.
///
/// # Monad Laws
///
/// 1. **Left Identity**: `List::return_(a).bind(f) == f(a)`
/// 2. **Right Identity**: `m.bind(List::return_) == m`
/// 3. **Associativity**: `m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct List<A> {
    elements: Vec<A>,
}

impl<A> List<A> {
    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates a list holding a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_do::data::List;
    ///
    /// assert_eq!(List::singleton(1).len(), 1);
    /// ```
    #[inline]
    pub fn singleton(element: A) -> Self {
        Self {
            elements: vec![element],
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the list has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the element at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&A> {
        self.elements.get(index)
    }

    /// Returns an iterator over references to the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, A> {
        self.elements.iter()
    }

    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[A] {
        &self.elements
    }

    /// Consumes the list and returns its elements.
    #[inline]
    pub fn into_vec(self) -> Vec<A> {
        self.elements
    }

    /// Appends `other` after the elements of `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_do::data::List;
    ///
    /// let joined = List::from(vec![1, 2]).append(List::from(vec![3]));
    /// assert_eq!(joined, List::from(vec![1, 2, 3]));
    /// ```
    #[must_use]
    pub fn append(mut self, other: Self) -> Self {
        self.elements.extend(other.elements);
        self
    }

    /// Applies a function to every element.
    pub fn fmap<B, F>(self, function: F) -> List<B>
    where
        F: FnMut(A) -> B,
    {
        self.elements.into_iter().map(function).collect()
    }
}

impl<A> Default for List<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> From<Vec<A>> for List<A> {
    fn from(elements: Vec<A>) -> Self {
        Self { elements }
    }
}

impl<A, const N: usize> From<[A; N]> for List<A> {
    fn from(elements: [A; N]) -> Self {
        Self {
            elements: Vec::from(elements),
        }
    }
}

impl<A> FromIterator<A> for List<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iterator: I) -> Self {
        Self {
            elements: iterator.into_iter().collect(),
        }
    }
}

impl<A> IntoIterator for List<A> {
    type Item = A;
    type IntoIter = std::vec::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, A> IntoIterator for &'a List<A> {
    type Item = &'a A;
    type IntoIter = std::slice::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

// =============================================================================
// Type Classes
// =============================================================================

impl<A> TypeConstructor for List<A> {
    type Inner = A;
    type WithType<B> = List<B>;
}

impl<A> Monad for List<A> {
    const KIND: MonadKind = MonadKind::List;

    #[inline]
    fn return_(value: A) -> Self {
        Self::singleton(value)
    }

    fn bind<B, F>(self, mut function: F) -> List<B>
    where
        B: 'static,
        F: FnMut(A) -> List<B> + 'static,
    {
        self.elements
            .into_iter()
            .flat_map(|element| function(element).elements)
            .collect()
    }
}

impl<A> DynamicBind for List<A> {
    fn bind_dynamic<B, F>(self, mut function: F) -> Result<List<B>, MonadError>
    where
        B: 'static,
        F: FnMut(A) -> Value,
    {
        self.elements
            .into_iter()
            .map(|element| function(element).expect_monad::<List<B>>())
            .try_fold(List::new(), |accumulator, next| {
                Ok(accumulator.append(next?))
            })
    }
}

impl<A: 'static> ErasedMonad for List<A> {
    fn kind(&self) -> MonadKind {
        MonadKind::List
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn unwrap_step(self: Box<Self>) -> Unwrapped {
        if self.is_empty() {
            return Unwrapped::ShortCircuit(Box::new(()));
        }
        Unwrapped::Continue(
            self.elements
                .into_iter()
                .map(|element| Rc::new(element) as Rc<dyn Any>)
                .collect(),
        )
    }

    fn short_circuit(residue: Box<dyn Any>) -> Option<Self> {
        residue.downcast::<()>().ok().map(|_| Self::new())
    }

    fn append_branch(self, later: Self) -> Self {
        self.append(later)
    }
}

/// `List` combines by concatenation.
impl<A> Semigroup for List<A> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        self.append(other)
    }
}

impl<A> Monoid for List<A> {
    #[inline]
    fn zero() -> Self {
        Self::new()
    }
}

/// `a | b` is `a.combine(b)`.
impl<A> BitOr for List<A> {
    type Output = Self;

    fn bitor(self, other: Self) -> Self {
        self.combine(other)
    }
}
