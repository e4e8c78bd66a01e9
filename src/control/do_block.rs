//! Step generators for do-notation.
//!
//! A [`DoBlock`] is a computation written as a sequence of suspend points.
//! Started, it runs to its first suspend point and yields a container; resumed
//! with that container's unwrapped value, it runs to the next suspend point or
//! returns its final container. The interpreter in
//! [`run_do`](super::run_do) is the only caller of these methods.
//!
//! Hand-written blocks are explicit state machines:
//!
//! ```rust
//! use std::any::Any;
//! use std::rc::Rc;
//! use monadic_do::control::{downcast_input, run_do, DoBlock, Step};
//! use monadic_do::typeclass::{MonadError, Value};
//!
//! /// x <- Some(1); y <- Some(2); return Some(x + y)
//! #[derive(Default)]
//! struct AddTwo {
//!     x: Option<i32>,
//! }
//!
//! impl DoBlock for AddTwo {
//!     fn start(&mut self) -> Result<Step, MonadError> {
//!         Ok(Step::Yield(Value::from(Some(1))))
//!     }
//!
//!     fn resume(&mut self, input: Rc<dyn Any>) -> Result<Step, MonadError> {
//!         match self.x {
//!             None => {
//!                 self.x = Some(downcast_input(&input, 0)?);
//!                 Ok(Step::Yield(Value::from(Some(2))))
//!             }
//!             Some(x) => {
//!                 let y: i32 = downcast_input(&input, 1)?;
//!                 Ok(Step::Return(Value::from(Some(x + y))))
//!             }
//!         }
//!     }
//! }
//!
//! let result: Result<Option<i32>, MonadError> = run_do(AddTwo::default);
//! assert_eq!(result, Ok(Some(3)));
//! ```

use std::any::{Any, type_name};
use std::rc::Rc;

use crate::typeclass::{MonadError, Value};

/// What a do-block produced when it stopped running.
#[derive(Debug)]
pub enum Step {
    /// The block reached a suspend point and wants the value inside this container.
    Yield(Value),
    /// The block finished; this is its final container.
    Return(Value),
}

/// A resumable computation driven by [`run_do`](super::run_do).
///
/// # Protocol
///
/// The interpreter calls [`start`](DoBlock::start) once, then
/// [`resume`](DoBlock::resume) once per yielded container that did not
/// short-circuit, passing that container's unwrapped value. It never resumes
/// a block after the block returned or after a short-circuit.
///
/// Multi-valued containers (`List`) fork the computation. Each extra branch
/// is driven on a fresh block obtained from the factory given to `run_do`,
/// brought to the fork point with [`replay`](DoBlock::replay).
pub trait DoBlock {
    /// Runs the block to its first suspend point or to completion.
    ///
    /// # Errors
    ///
    /// Any error is handed unchanged to the caller of `run_do`.
    fn start(&mut self) -> Result<Step, MonadError>;

    /// Resumes the block with the unwrapped value of the container it yielded last.
    ///
    /// # Errors
    ///
    /// Any error is handed unchanged to the caller of `run_do`.
    fn resume(&mut self, input: Rc<dyn Any>) -> Result<Step, MonadError>;

    /// Brings a fresh block to the suspend point that follows `history`.
    ///
    /// The default starts the block and resumes it with every entry of
    /// `history` in turn, discarding the containers yielded on the way.
    ///
    /// # Errors
    ///
    /// Returns [`MonadError::ReplayDiverged`] if the block returns before the
    /// history is exhausted.
    fn replay(&mut self, history: &[Rc<dyn Any>]) -> Result<Step, MonadError> {
        let mut step = self.start()?;
        for (position, input) in history.iter().enumerate() {
            step = match step {
                Step::Yield(_) => self.resume(Rc::clone(input))?,
                Step::Return(_) => return Err(MonadError::ReplayDiverged { step: position }),
            };
        }
        Ok(step)
    }
}

static_assertions::assert_obj_safe!(DoBlock);

impl<D: DoBlock + ?Sized> DoBlock for Box<D> {
    fn start(&mut self) -> Result<Step, MonadError> {
        (**self).start()
    }

    fn resume(&mut self, input: Rc<dyn Any>) -> Result<Step, MonadError> {
        (**self).resume(input)
    }

    fn replay(&mut self, history: &[Rc<dyn Any>]) -> Result<Step, MonadError> {
        (**self).replay(history)
    }
}

/// Reads the value a hand-written [`DoBlock`] was resumed with.
///
/// `step` is the index of the suspend point being resumed, used in the error.
///
/// # Errors
///
/// Returns [`MonadError::TypeMismatch`] if the input is not a `T`.
pub fn downcast_input<T: Clone + 'static>(
    input: &Rc<dyn Any>,
    step: usize,
) -> Result<T, MonadError> {
    input
        .downcast_ref::<T>()
        .cloned()
        .ok_or(MonadError::TypeMismatch {
            step,
            expected: type_name::<T>(),
            found: "a value of another type",
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Yields `Some(10)` and `Some(20)`, then returns their sum.
    #[derive(Default)]
    struct Sum {
        inputs: Vec<i32>,
        starts: usize,
    }

    impl DoBlock for Sum {
        fn start(&mut self) -> Result<Step, MonadError> {
            self.starts += 1;
            self.inputs.clear();
            Ok(Step::Yield(Value::from(Some(10))))
        }

        fn resume(&mut self, input: Rc<dyn Any>) -> Result<Step, MonadError> {
            self.inputs.push(downcast_input(&input, self.inputs.len())?);
            if self.inputs.len() < 2 {
                Ok(Step::Yield(Value::from(Some(20))))
            } else {
                Ok(Step::Return(Value::from(Some(self.inputs.iter().sum::<i32>()))))
            }
        }
    }

    fn history(values: &[i32]) -> Vec<Rc<dyn Any>> {
        values
            .iter()
            .map(|value| Rc::new(*value) as Rc<dyn Any>)
            .collect()
    }

    #[rstest]
    fn replay_resumes_through_history() {
        let mut block = Sum::default();
        let step = block.replay(&history(&[1, 2])).unwrap();
        let Step::Return(value) = step else {
            panic!("two inputs complete the block");
        };
        assert_eq!(value.downcast::<Option<i32>>().ok(), Some(Some(3)));
        assert_eq!(block.starts, 1);
    }

    #[rstest]
    fn replay_of_empty_history_is_start() {
        let mut block = Sum::default();
        assert!(matches!(block.replay(&[]), Ok(Step::Yield(_))));
    }

    #[rstest]
    fn replay_past_return_diverges() {
        let mut block = Sum::default();
        let result = block.replay(&history(&[1, 2, 3]));
        assert_eq!(result.unwrap_err(), MonadError::ReplayDiverged { step: 2 });
    }

    #[rstest]
    fn downcast_input_rejects_other_types() {
        let input: Rc<dyn Any> = Rc::new("text");
        let error = downcast_input::<i32>(&input, 4).unwrap_err();
        assert!(matches!(error, MonadError::TypeMismatch { step: 4, .. }));
    }

    #[rstest]
    fn boxed_blocks_are_blocks() {
        let mut block: Box<dyn DoBlock> = Box::new(Sum::default());
        assert!(matches!(block.start(), Ok(Step::Yield(_))));
    }
}
