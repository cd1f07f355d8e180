//! Word lists for the game
//!
//! Provides the embedded word list compiled into the binary and loaders that
//! turn word lists into a vocabulary.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
