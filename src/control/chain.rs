//! Do-blocks built from continuations.
//!
//! A [`Chain`] is a do-block written the way `flat_map` chains are written:
//! each bind pairs a container with the closure that receives its value and
//! builds the rest of the block. Resuming the block calls that closure once,
//! so the code between two binds runs exactly once per branch.
//!
//! A continuation can only be called once. When a `List` step forks, the
//! interpreter builds the extra branches on fresh chains and brings them to
//! the fork point with [`DoBlock::replay`]; only those branches evaluate the
//! steps before the fork again.

use std::any::{Any, type_name};
use std::fmt;
use std::mem;
use std::rc::Rc;

use super::do_block::{DoBlock, Step, downcast_input};
use super::interpreter::run_do;
use crate::typeclass::{ErasedMonad, Monad, MonadError, TypeConstructor, Value};

type Continuation<'a, M> =
    Box<dyn FnOnce(Rc<dyn Any>, usize) -> Result<Chain<'a, M>, MonadError> + 'a>;

enum Link<'a, M> {
    Bind(Value, Continuation<'a, M>),
    Suspended(Continuation<'a, M>),
    Done(M),
    Finished,
}

/// A [`DoBlock`] whose result container is an `M`.
///
/// # Examples
///
/// ```rust
/// use monadic_do::control::{run_chain, Chain};
/// use monadic_do::typeclass::MonadError;
///
/// let result: Result<Result<i32, String>, MonadError> = run_chain(|| {
///     Chain::bind(Ok::<i32, String>(20), |x| {
///         Chain::bind("22".parse::<i32>().map_err(|e| e.to_string()), move |y| {
///             Chain::done(Ok(x + y))
///         })
///     })
/// });
/// assert_eq!(result, Ok(Ok(42)));
/// ```
pub struct Chain<'a, M> {
    link: Link<'a, M>,
    step: usize,
}

impl<'a, M: ErasedMonad> Chain<'a, M> {
    const fn from_link(link: Link<'a, M>) -> Self {
        Self { link, step: 0 }
    }

    /// A block with no suspend points that returns `result`.
    pub const fn done(result: M) -> Self {
        Self::from_link(Link::Done(result))
    }

    /// Suspends on `container` and hands its value to `then`.
    pub fn bind<C, K>(container: C, then: K) -> Self
    where
        C: ErasedMonad + TypeConstructor,
        C::Inner: Clone + 'static,
        K: FnOnce(C::Inner) -> Self + 'a,
    {
        let continuation = move |input: Rc<dyn Any>, step: usize| {
            downcast_input::<C::Inner>(&input, step).map(then)
        };
        Self::from_link(Link::Bind(Value::from(container), Box::new(continuation)))
    }

    /// Suspends on an arbitrary value and hands the untyped input to `then`.
    ///
    /// Plain values are accepted here and rejected by the interpreter with
    /// [`MonadError::NotAMonad`].
    pub fn suspend<K>(value: Value, then: K) -> Self
    where
        K: FnOnce(Rc<dyn Any>) -> Self + 'a,
    {
        let continuation = move |input: Rc<dyn Any>, _: usize| Ok::<_, MonadError>(then(input));
        Self::from_link(Link::Bind(value, Box::new(continuation)))
    }

    /// The index of the next suspend point.
    pub const fn step(&self) -> usize {
        self.step
    }

    fn advance(&mut self, link: Link<'a, M>) -> Result<Step, MonadError> {
        match link {
            Link::Bind(value, then) => {
                self.link = Link::Suspended(then);
                Ok(Step::Yield(value))
            }
            Link::Done(result) => Ok(Step::Return(Value::from(result))),
            link @ (Link::Suspended(_) | Link::Finished) => {
                self.link = link;
                Err(MonadError::ReplayDiverged { step: self.step })
            }
        }
    }
}

impl<M: ErasedMonad> DoBlock for Chain<'_, M> {
    fn start(&mut self) -> Result<Step, MonadError> {
        let link = mem::replace(&mut self.link, Link::Finished);
        self.advance(link)
    }

    fn resume(&mut self, input: Rc<dyn Any>) -> Result<Step, MonadError> {
        match mem::replace(&mut self.link, Link::Finished) {
            Link::Suspended(then) => {
                let step = self.step;
                self.step += 1;
                let next = then(input, step)?;
                self.advance(next.link)
            }
            link => {
                self.link = link;
                Err(MonadError::ReplayDiverged { step: self.step })
            }
        }
    }
}

impl<M> fmt::Debug for Chain<'_, M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.link {
            Link::Bind(..) => "ready",
            Link::Suspended(_) => "suspended",
            Link::Done(_) => "done",
            Link::Finished => "finished",
        };
        formatter
            .debug_struct("Chain")
            .field("result", &type_name::<M>())
            .field("step", &self.step)
            .field("state", &state)
            .finish()
    }
}

/// Runs a block built by `factory` to its final `M`.
///
/// This is [`run_do`] with the block's result type tied to `M`, so the final
/// container of a chain needs no annotation of its own.
///
/// # Errors
///
/// The errors of [`run_do`].
pub fn run_chain<'a, M, F>(factory: F) -> Result<M, MonadError>
where
    M: Monad + ErasedMonad,
    F: FnMut() -> Chain<'a, M>,
{
    run_do(factory)
}
