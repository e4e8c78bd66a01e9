//! Type-erased containers.
//!
//! A do-block resumes with values whose types change from one step to the
//! next, so the interpreter cannot hold them in a single static type. Here
//! values travel as `dyn Any`, and each container kind describes itself
//! through the object-safe [`ErasedMonad`] trait.
//!
//! The erasure is also where the runtime kind checks live. Statically typed
//! code cannot hand `bind` a foreign container, but erased code can, so
//! everything crossing this boundary carries a [`MonadKind`] tag.

use std::any::{Any, type_name};
use std::fmt::{self, Debug, Formatter};
use std::rc::Rc;

use super::error::MonadError;
use super::kind::MonadKind;
use super::monad::Monad;

/// The result of unwrapping one container at a do-block step.
pub enum Unwrapped {
    /// The container holds values; the block continues with each of them.
    ///
    /// Single-valued kinds produce exactly one value. `List` produces one per
    /// element, and the interpreter forks a branch for every value after the
    /// first.
    Continue(Vec<Rc<dyn Any>>),

    /// The container short-circuits.
    ///
    /// The residue is whatever the short-circuit carries: `()` for `None` and
    /// the empty list, the error value for `Err`.
    ShortCircuit(Box<dyn Any>),
}

/// The object-safe half of the monad contract, driven by the do-interpreter.
///
/// Implementations exist for every concrete kind. They are what allows a
/// container to be stored as `Box<dyn ErasedMonad>` and taken apart without
/// knowing its element type.
pub trait ErasedMonad: Any {
    /// The concrete kind of this container.
    fn kind(&self) -> MonadKind;

    /// The full type name of this container, for error messages.
    fn type_name(&self) -> &'static str {
        type_name::<Self>()
    }

    /// Converts the boxed container into `Box<dyn Any>` for downcasting.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// Takes the container apart into its values or its short-circuit.
    ///
    /// For `IO` this runs the action.
    fn unwrap_step(self: Box<Self>) -> Unwrapped;

    /// Rebuilds the short-circuit of this type from a residue produced by
    /// [`unwrap_step`](ErasedMonad::unwrap_step) on a container of the same
    /// kind but possibly another element type.
    ///
    /// Returns `None` if the residue does not fit, which happens for `Result`
    /// when the error types differ, and always for kinds that never
    /// short-circuit.
    fn short_circuit(residue: Box<dyn Any>) -> Option<Self>
    where
        Self: Sized;

    /// Merges the result of a later branch into this one.
    ///
    /// Only multi-valued kinds fork, so the default keeps `self`.
    fn append_branch(self, later: Self) -> Self
    where
        Self: Sized,
    {
        let _ = later;
        self
    }
}

static_assertions::assert_obj_safe!(ErasedMonad);

impl<A: 'static> ErasedMonad for Option<A> {
    fn kind(&self) -> MonadKind {
        MonadKind::Option
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn unwrap_step(self: Box<Self>) -> Unwrapped {
        match *self {
            Some(value) => Unwrapped::Continue(vec![Rc::new(value)]),
            None => Unwrapped::ShortCircuit(Box::new(())),
        }
    }

    fn short_circuit(residue: Box<dyn Any>) -> Option<Self> {
        residue.downcast::<()>().ok().map(|_| None)
    }
}

impl<T: 'static, E: 'static> ErasedMonad for Result<T, E> {
    fn kind(&self) -> MonadKind {
        MonadKind::Result
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn unwrap_step(self: Box<Self>) -> Unwrapped {
        match *self {
            Ok(value) => Unwrapped::Continue(vec![Rc::new(value)]),
            Err(error) => Unwrapped::ShortCircuit(Box::new(error)),
        }
    }

    fn short_circuit(residue: Box<dyn Any>) -> Option<Self> {
        residue.downcast::<E>().ok().map(|error| Err(*error))
    }
}

enum Repr {
    Container(Box<dyn ErasedMonad>),
    Plain {
        value: Box<dyn Any>,
        type_name: &'static str,
    },
}

/// A value with its static type erased.
///
/// This is what a do-block yields and returns. Containers are converted with
/// `From`; anything else can be wrapped with [`Value::plain`], which the
/// interpreter rejects with [`MonadError::NotAMonad`].
///
/// # Examples
///
/// ```rust
/// use monadic_do::typeclass::{MonadKind, Value};
///
/// let value = Value::from(Some(3));
/// assert_eq!(value.kind(), Some(MonadKind::Option));
/// assert_eq!(value.downcast::<Option<i32>>().ok(), Some(Some(3)));
///
/// let plain = Value::plain(3);
/// assert_eq!(plain.kind(), None);
/// assert_eq!(plain.type_name(), "i32");
/// ```
pub struct Value(Repr);

impl Value {
    /// Wraps a value that is not a container.
    pub fn plain<T: Any>(value: T) -> Self {
        Self(Repr::Plain {
            value: Box::new(value),
            type_name: type_name::<T>(),
        })
    }

    /// Returns the kind of the wrapped container, or `None` for a plain value.
    pub fn kind(&self) -> Option<MonadKind> {
        match &self.0 {
            Repr::Container(container) => Some(container.kind()),
            Repr::Plain { .. } => None,
        }
    }

    /// Returns the type name of the wrapped value.
    pub fn type_name(&self) -> &'static str {
        match &self.0 {
            Repr::Container(container) => container.type_name(),
            Repr::Plain { type_name, .. } => *type_name,
        }
    }

    /// Returns `true` if this value wraps a container.
    pub fn is_container(&self) -> bool {
        matches!(self.0, Repr::Container(_))
    }

    /// Recovers the static type, handing the value back if it does not match.
    pub fn downcast<T: Any>(self) -> Result<T, Self> {
        match self.0 {
            Repr::Container(container) => {
                if !(container.as_ref() as &dyn Any).is::<T>() {
                    return Err(Self(Repr::Container(container)));
                }
                let type_name = container.type_name();
                container
                    .into_any()
                    .downcast::<T>()
                    .map(|value| *value)
                    .map_err(|value| Self(Repr::Plain { value, type_name }))
            }
            Repr::Plain { value, type_name } => value
                .downcast::<T>()
                .map(|value| *value)
                .map_err(|value| Self(Repr::Plain { value, type_name })),
        }
    }

    /// Recovers a container of type `M`, checking its kind first.
    ///
    /// This is the check behind [`DynamicBind`](super::DynamicBind): a value of
    /// another kind, or no container at all, is
    /// [`MonadError::WrongMonadKind`]; a container of the right kind with a
    /// different element type is [`MonadError::TypeMismatch`].
    pub fn expect_monad<M>(self) -> Result<M, MonadError>
    where
        M: Monad + ErasedMonad,
    {
        if self.kind() != Some(M::KIND) {
            return Err(MonadError::WrongMonadKind {
                expected: M::KIND,
                found: self.type_name(),
            });
        }
        self.downcast::<M>().map_err(|value| MonadError::TypeMismatch {
            step: 0,
            expected: type_name::<M>(),
            found: value.type_name(),
        })
    }

    /// Splits the value into its container, or reports the plain value.
    pub(crate) fn into_container(self) -> Result<Box<dyn ErasedMonad>, &'static str> {
        match self.0 {
            Repr::Container(container) => Ok(container),
            Repr::Plain { type_name, .. } => Err(type_name),
        }
    }
}

impl<M: ErasedMonad> From<M> for Value {
    fn from(container: M) -> Self {
        Self(Repr::Container(Box::new(container)))
    }
}

impl Debug for Value {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Value")
            .field("kind", &self.kind())
            .field("type_name", &self.type_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_unwraps_to_single_value() {
        let unwrapped = Box::new(Some(7)).unwrap_step();
        match unwrapped {
            Unwrapped::Continue(values) => {
                assert_eq!(values.len(), 1);
                assert_eq!(values[0].downcast_ref::<i32>(), Some(&7));
            }
            Unwrapped::ShortCircuit(_) => panic!("Some must continue"),
        }
    }

    #[rstest]
    fn none_short_circuits_into_any_option() {
        let unwrapped = Box::new(None::<String>).unwrap_step();
        let Unwrapped::ShortCircuit(residue) = unwrapped else {
            panic!("None must short-circuit");
        };
        assert_eq!(<Option<i32> as ErasedMonad>::short_circuit(residue), Some(None));
    }

    #[rstest]
    fn err_residue_rebuilds_err_with_same_error_type() {
        let unwrapped = Box::new(Err::<String, _>("boom")).unwrap_step();
        let Unwrapped::ShortCircuit(residue) = unwrapped else {
            panic!("Err must short-circuit");
        };
        assert_eq!(
            <Result<i32, &str> as ErasedMonad>::short_circuit(residue),
            Some(Err("boom"))
        );
    }

    #[rstest]
    fn err_residue_rejects_other_error_type() {
        let unwrapped = Box::new(Err::<i32, _>(404_u16)).unwrap_step();
        let Unwrapped::ShortCircuit(residue) = unwrapped else {
            panic!("Err must short-circuit");
        };
        assert_eq!(<Result<i32, String> as ErasedMonad>::short_circuit(residue), None);
    }

    #[rstest]
    fn value_downcast_returns_value_on_mismatch() {
        let value = Value::from(Some(1_u8));
        let value = value.downcast::<Option<i64>>().unwrap_err();
        assert_eq!(value.kind(), Some(MonadKind::Option));
        assert_eq!(value.downcast::<Option<u8>>().ok(), Some(Some(1)));
    }

    #[rstest]
    fn expect_monad_reports_wrong_kind() {
        let error = Value::from(Ok::<i32, ()>(1)).expect_monad::<Option<i32>>().unwrap_err();
        assert!(matches!(
            error,
            MonadError::WrongMonadKind {
                expected: MonadKind::Option,
                ..
            }
        ));
    }

    #[rstest]
    fn expect_monad_reports_plain_values_as_wrong_kind() {
        let error = Value::plain("text").expect_monad::<Option<i32>>().unwrap_err();
        assert_eq!(
            error,
            MonadError::WrongMonadKind {
                expected: MonadKind::Option,
                found: "&str",
            }
        );
    }

    #[rstest]
    fn debug_shows_kind_and_type() {
        let rendered = format!("{:?}", Value::from(Some(1)));
        assert!(rendered.contains("Option"));
    }
}
