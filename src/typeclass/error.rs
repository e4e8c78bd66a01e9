//! Errors raised when the monad contract is violated.
//!
//! Every variant is a programmer error: a container of the wrong kind was
//! smuggled through the erased layer, or a do-block broke the step protocol.
//! A legitimate short-circuit (`None`, `Err`, an empty list) is never an
//! error; it is returned as an ordinary container.

use thiserror::Error;

use super::MonadKind;

/// Represents a violation of the monad contract.
///
/// `step` counts the suspend points of the do-block branch in which the
/// violation was detected, starting at zero. A violation found in the value a
/// block returns carries the number of steps it passed through.
///
/// # Examples
///
/// ```rust
/// use monadic_do::typeclass::{MonadError, MonadKind};
///
/// let error = MonadError::NotAMonad { step: 0, found: "i32" };
/// assert_eq!(error.to_string(), "do: expected a monad, got i32");
///
/// let error = MonadError::WrongMonadKind {
///     expected: MonadKind::Option,
///     found: "core::result::Result<i32, ()>",
/// };
/// assert_eq!(
///     error.to_string(),
///     "Option.bind: function must return an Option, got core::result::Result<i32, ()>"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonadError {
    /// A function passed to a checked bind returned a different kind than the receiver.
    #[error(
        "{expected}.bind: function must return {article} {expected}, got {found}",
        article = article(.expected)
    )]
    WrongMonadKind {
        /// The kind of the receiver.
        expected: MonadKind,
        /// The type the function actually returned.
        found: &'static str,
    },

    /// A do-block yielded or returned something that is not a container.
    #[error("do: expected a monad, got {found}")]
    NotAMonad {
        /// The step at which the value was produced.
        step: usize,
        /// The type of the offending value.
        found: &'static str,
    },

    /// A do-block step belongs to a different kind than the block.
    #[error("do: step {step} yielded {found}, but the block runs in {expected}")]
    InconsistentMonadKind {
        /// The step at which the kind changed.
        step: usize,
        /// The kind the block runs in.
        expected: MonadKind,
        /// The kind that was yielded.
        found: MonadKind,
    },

    /// A container of the right kind but the wrong element type.
    #[error("do: step {step} expected {expected}, got {found}")]
    TypeMismatch {
        /// The step at which the value was produced.
        step: usize,
        /// The type the interpreter needed.
        expected: &'static str,
        /// The type it received.
        found: &'static str,
    },

    /// Re-running a do-block did not retrace the steps it took before.
    #[error("do: step {step} changed between runs of the same block")]
    ReplayDiverged {
        /// The first step that differed.
        step: usize,
    },
}

const fn article(kind: &MonadKind) -> &'static str {
    match *kind {
        MonadKind::Option | MonadKind::IO => "an",
        MonadKind::Result | MonadKind::List => "a",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_monad_kind_display() {
        let error = MonadError::WrongMonadKind {
            expected: MonadKind::List,
            found: "core::option::Option<i32>",
        };
        assert_eq!(
            error.to_string(),
            "List.bind: function must return a List, got core::option::Option<i32>"
        );
    }

    #[test]
    fn inconsistent_monad_kind_display() {
        let error = MonadError::InconsistentMonadKind {
            step: 1,
            expected: MonadKind::Option,
            found: MonadKind::Result,
        };
        assert_eq!(
            error.to_string(),
            "do: step 1 yielded Result, but the block runs in Option"
        );
    }

    #[test]
    fn replay_diverged_display() {
        let error = MonadError::ReplayDiverged { step: 3 };
        assert_eq!(
            error.to_string(),
            "do: step 3 changed between runs of the same block"
        );
    }
}
