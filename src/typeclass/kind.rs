//! Runtime tags for the concrete container kinds.

use std::fmt::{self, Display, Formatter};

/// The concrete container kind a monadic value belongs to.
///
/// Statically typed code never needs this: `bind` already forces the same
/// kind through its signature. It exists for the erased layer, where a
/// [`Value`](super::Value) or a do-block step has lost its static type and the
/// kind has to be checked at runtime.
///
/// # Examples
///
/// ```rust
/// use monadic_do::typeclass::{Monad, MonadKind};
///
/// assert_eq!(<Option<i32> as Monad>::KIND, MonadKind::Option);
/// assert_eq!(MonadKind::Result.to_string(), "Result");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonadKind {
    /// `Option<A>`: a present or absent value.
    Option,
    /// `Result<A, E>`: a success value or an error value.
    Result,
    /// `List<A>`: zero or more values.
    List,
    /// `IO<A>`: a deferred side effect producing a value.
    IO,
}

impl MonadKind {
    /// Returns the name of the kind as it appears in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Option => "Option",
            Self::Result => "Result",
            Self::List => "List",
            Self::IO => "IO",
        }
    }
}

impl Display for MonadKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(MonadKind::Option, "Option")]
    #[case(MonadKind::Result, "Result")]
    #[case(MonadKind::List, "List")]
    #[case(MonadKind::IO, "IO")]
    fn display_uses_kind_name(#[case] kind: MonadKind, #[case] expected: &str) {
        assert_eq!(kind.to_string(), expected);
    }
}
