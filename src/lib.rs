//! Wordle Game
//!
//! A text-based Wordle game: a hidden target word is guessed letter by letter,
//! with feedback marking correct, misplaced and absent letters. Guesses come
//! from a random solver or from interactive input.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Mark, Vocabulary};
//! use wordle_game::game::{Game, Status};
//!
//! let vocabulary = Vocabulary::new(["crane", "train", "slate"], 5).unwrap();
//! let mut game = Game::new(&vocabulary, "crane", 6).unwrap();
//!
//! let evaluation = game.evaluate("train");
//! assert_eq!(evaluation.status(), Status::Continue);
//! assert_eq!(evaluation.feedback().unwrap().marks()[1], Mark::Correct);
//! ```

// Core domain types
pub mod core;

// Session state and guess evaluation
pub mod game;

// Guess sources
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
