//! Game session state
//!
//! Holds the target word, vocabulary, guess budget and history, and evaluates
//! submitted guesses.

mod history;
mod session;

pub use history::{HistoryMode, render_history};
pub use session::{DEFAULT_MAX_GUESSES, Evaluation, Game, GameError, InvalidGuess, Status};
