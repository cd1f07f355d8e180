//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types: feedback calculation and
//! the word list. Everything here is pure and has no I/O.

mod feedback;
mod vocabulary;

pub use feedback::{Feedback, Mark};
pub use vocabulary::{Vocabulary, VocabularyError};
