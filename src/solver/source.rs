//! Guess sources
//!
//! Defines the GuessSource trait and the runtime-selectable wrapper.

use super::{InteractiveSolver, RandomSolver};
use crate::core::Feedback;
use anyhow::Result;

/// Something that produces successive guesses for a game
pub trait GuessSource {
    /// Produce the next guess
    ///
    /// `previous` is the feedback for the last accepted guess, if any. Guesses
    /// are not validated here; the game rejects invalid ones and the driver
    /// asks again.
    ///
    /// # Errors
    /// Returns an error if the source can no longer produce guesses (for
    /// example when interactive input is closed).
    fn generate_guess(&mut self, previous: Option<&Feedback>) -> Result<String>;
}

/// Enum wrapper for all solver types
///
/// Allows runtime selection of the guess source while maintaining static dispatch.
pub enum SolverType<'a> {
    /// Uniform random picks from the vocabulary
    Random(RandomSolver<'a>),
    /// Guesses typed on stdin
    Interactive(InteractiveSolver),
}

impl GuessSource for SolverType<'_> {
    fn generate_guess(&mut self, previous: Option<&Feedback>) -> Result<String> {
        match self {
            Self::Random(s) => s.generate_guess(previous),
            Self::Interactive(s) => s.generate_guess(previous),
        }
    }
}

impl<S: GuessSource + ?Sized> GuessSource for &mut S {
    fn generate_guess(&mut self, previous: Option<&Feedback>) -> Result<String> {
        (**self).generate_guess(previous)
    }
}
