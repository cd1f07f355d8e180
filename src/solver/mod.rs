//! Guess sources
//!
//! This module contains the sources a game driver can ask for guesses.

mod interactive;
mod random;
mod source;

pub use interactive::InteractiveSolver;
pub use random::{RandomSolver, choose_target, rng_from_seed};
pub use source::{GuessSource, SolverType};
