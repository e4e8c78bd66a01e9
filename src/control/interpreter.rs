//! The do-notation interpreter.
//!
//! [`run_do`] drives a [`DoBlock`] step by step. Each yielded container is
//! unwrapped: its value resumes the block, its short-circuit ends the block
//! with the short-circuit rebuilt at the result type, and each extra value of
//! a `List` starts another branch. Branches run depth-first in element order
//! and their results are appended in the order they finish.
//!
//! A branch is an explicit state machine driven by a loop, so the Rust stack
//! does not grow with the number of steps.

use std::any::{Any, type_name};
use std::rc::Rc;

use tracing::{debug, trace};

use super::do_block::{DoBlock, Step};
use crate::typeclass::{ErasedMonad, Monad, MonadError, MonadKind, Unwrapped, Value};

/// Runs a do-block to its final container.
///
/// `factory` builds a fresh block. It is called once for the main branch and
/// once more for every forked `List` branch, which [`DoBlock::replay`] brings
/// to its fork point.
///
/// The block runs in the kind of `M`: every yielded container and the final
/// container must be of that kind.
///
/// # Errors
///
/// - [`MonadError::NotAMonad`] if the block yields or returns a plain value
/// - [`MonadError::InconsistentMonadKind`] if a step yields, or the block
///   returns, a container of another kind
/// - [`MonadError::TypeMismatch`] if the final container is not an `M`, or a
///   short-circuit cannot be rebuilt as an `M`
/// - any error raised by the block itself
///
/// # Examples
///
/// ```rust
/// use monadic_do::control::{run_do, Chain};
/// use monadic_do::typeclass::MonadError;
///
/// let result: Result<Option<i32>, MonadError> = run_do(|| {
///     Chain::bind(Some(1), |x| {
///         Chain::bind(Some(2), move |y| Chain::done(Some(x + y)))
///     })
/// });
/// assert_eq!(result, Ok(Some(3)));
/// ```
pub fn run_do<M, F, G>(mut factory: F) -> Result<M, MonadError>
where
    M: Monad + ErasedMonad,
    F: FnMut() -> G,
    G: DoBlock,
{
    let mut forks = Vec::new();
    let mut outcome: M = drive(&mut factory(), Vec::new(), &mut forks)?;
    while let Some(history) = forks.pop() {
        debug!(
            step = history.len() - 1,
            pending = forks.len(),
            "do-block entering forked branch"
        );
        let branch: M = drive(&mut factory(), history, &mut forks)?;
        outcome = outcome.append_branch(branch);
    }
    Ok(outcome)
}

/// The values a branch was resumed with, one per completed step.
type History = Vec<Rc<dyn Any>>;

enum State<M> {
    NotStarted,
    Running(Step),
    Suspended(Box<dyn ErasedMonad>),
    Completed(M),
    ShortCircuited(M),
}

fn drive<M, G>(
    block: &mut G,
    mut history: History,
    forks: &mut Vec<History>,
) -> Result<M, MonadError>
where
    M: Monad + ErasedMonad,
    G: DoBlock + ?Sized,
{
    let kind = M::KIND;
    let mut state = State::NotStarted;
    loop {
        state = match state {
            State::NotStarted if history.is_empty() => State::Running(block.start()?),
            State::NotStarted => State::Running(block.replay(&history)?),
            State::Running(Step::Yield(value)) => {
                let container = expect_step(value, kind, history.len())?;
                trace!(
                    step = history.len(),
                    %kind,
                    container = container.type_name(),
                    "do-block suspended"
                );
                State::Suspended(container)
            }
            State::Running(Step::Return(value)) => {
                State::Completed(expect_result(value, history.len())?)
            }
            State::Suspended(container) => {
                let step = history.len();
                let found = container.type_name();
                let unwrapped = match container.unwrap_step() {
                    Unwrapped::Continue(values) if values.is_empty() => {
                        Unwrapped::ShortCircuit(Box::new(()))
                    }
                    unwrapped => unwrapped,
                };
                match unwrapped {
                    Unwrapped::ShortCircuit(residue) => {
                        debug!(step, %kind, container = found, "do-block short-circuited");
                        State::ShortCircuited(rebuild_short_circuit(residue, step, found)?)
                    }
                    Unwrapped::Continue(mut values) => {
                        let rest = values.split_off(1);
                        if !rest.is_empty() {
                            debug!(step, branches = rest.len(), "do-block forked");
                        }
                        for value in rest.into_iter().rev() {
                            let mut fork = history.clone();
                            fork.push(value);
                            forks.push(fork);
                        }
                        let first = Rc::clone(&values[0]);
                        history.push(Rc::clone(&first));
                        trace!(step, "do-block resumed");
                        State::Running(block.resume(first)?)
                    }
                }
            }
            State::Completed(result) | State::ShortCircuited(result) => return Ok(result),
        };
    }
}

fn expect_step(
    value: Value,
    kind: MonadKind,
    step: usize,
) -> Result<Box<dyn ErasedMonad>, MonadError> {
    let container = value
        .into_container()
        .map_err(|found| MonadError::NotAMonad { step, found })?;
    let found = container.kind();
    if found != kind {
        return Err(MonadError::InconsistentMonadKind {
            step,
            expected: kind,
            found,
        });
    }
    Ok(container)
}

fn expect_result<M>(value: Value, step: usize) -> Result<M, MonadError>
where
    M: Monad + ErasedMonad,
{
    match value.kind() {
        None => Err(MonadError::NotAMonad {
            step,
            found: value.type_name(),
        }),
        Some(found) if found != M::KIND => Err(MonadError::InconsistentMonadKind {
            step,
            expected: M::KIND,
            found,
        }),
        Some(_) => value.downcast::<M>().map_err(|value| MonadError::TypeMismatch {
            step,
            expected: type_name::<M>(),
            found: value.type_name(),
        }),
    }
}

fn rebuild_short_circuit<M: ErasedMonad>(
    residue: Box<dyn Any>,
    step: usize,
    found: &'static str,
) -> Result<M, MonadError> {
    M::short_circuit(residue).ok_or(MonadError::TypeMismatch {
        step,
        expected: type_name::<M>(),
        found,
    })
}
