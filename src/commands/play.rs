//! Game driver
//!
//! Asks a guess source for guesses and feeds them to a game until the target
//! is found or the guess budget runs out.

use crate::core::{Feedback, Vocabulary};
use crate::game::{DEFAULT_MAX_GUESSES, Evaluation, Game, InvalidGuess};
use crate::solver::{GuessSource, choose_target};
use anyhow::Result;
use rand::rngs::StdRng;
use tracing::{info, warn};

/// Configuration for a game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayConfig {
    /// Word list file, or `"embedded"`
    pub wordlist: String,
    pub word_length: usize,
    /// Explicit target; chosen at random from the vocabulary when absent
    pub target: Option<String>,
    pub seed: Option<u64>,
    pub max_guesses: usize,
    pub interactive: bool,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            wordlist: crate::wordlists::loader::EMBEDDED.to_string(),
            word_length: 5,
            target: None,
            seed: None,
            max_guesses: DEFAULT_MAX_GUESSES,
            interactive: false,
        }
    }
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
}

/// A single accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: String,
    pub feedback: Feedback,
}

/// Result of playing one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayResult {
    pub outcome: Outcome,
    pub turns: Vec<Turn>,
    /// Guesses the game rejected along the way
    pub invalid_attempts: usize,
    pub target: String,
}

/// Receives progress while a game is played
///
/// Both hooks default to doing nothing.
pub trait PlayObserver {
    /// Called for every accepted guess, with the 1-based turn number
    fn on_turn(&mut self, _turn: usize, _guess: &str, _feedback: &Feedback) {}

    /// Called for every rejected guess
    fn on_invalid(&mut self, _guess: &str, _reason: InvalidGuess) {}
}

/// Observer that ignores everything
pub struct Silent;

impl PlayObserver for Silent {}

/// Decide the target word for a session
///
/// An explicit target from the configuration wins (trimmed and lowercased);
/// otherwise one is drawn from the vocabulary with `rng`.
///
/// # Errors
///
/// Returns an error if a random target is needed and the vocabulary is empty.
pub fn pick_target(
    config: &PlayConfig,
    vocabulary: &Vocabulary,
    rng: &mut StdRng,
) -> Result<String> {
    match &config.target {
        Some(word) => {
            if config.seed.is_some() && config.interactive {
                warn!("seed has no effect with an explicit target in interactive mode");
            }
            Ok(word.trim().to_lowercase())
        }
        None => choose_target(vocabulary, rng),
    }
}

/// Play `game` to the end with guesses from `source`
///
/// Invalid guesses are reported and asked for again without using up a turn.
/// The session ends with a win or once every allowed guess has been used.
///
/// # Errors
///
/// Returns an error if the guess source fails (for example closed input).
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use wordle_game::commands::{Outcome, Silent, play_game};
/// use wordle_game::core::Vocabulary;
/// use wordle_game::game::Game;
/// use wordle_game::solver::InteractiveSolver;
///
/// let vocabulary = Vocabulary::new(["crane", "slate"], 5).unwrap();
/// let mut game = Game::new(&vocabulary, "crane", 6).unwrap();
/// let mut solver = InteractiveSolver::new(Cursor::new("oops\nslate\ncrane\n"), Vec::new(), 5);
///
/// let result = play_game(&mut game, &mut solver, &mut Silent).unwrap();
/// assert_eq!(result.outcome, Outcome::Win);
/// assert_eq!(result.turns.len(), 2);
/// assert_eq!(result.invalid_attempts, 1);
/// ```
pub fn play_game<S, O>(
    game: &mut Game<'_>,
    source: &mut S,
    observer: &mut O,
) -> Result<PlayResult>
where
    S: GuessSource + ?Sized,
    O: PlayObserver + ?Sized,
{
    let mut turns: Vec<Turn> = Vec::with_capacity(game.max_guesses());
    let mut invalid_attempts = 0;
    let mut outcome = Outcome::Lose;

    while !game.is_over() {
        let previous = turns.last().map(|turn| &turn.feedback);
        let guess = source.generate_guess(previous)?;

        let feedback = match game.evaluate(&guess) {
            Evaluation::Invalid(reason) => {
                invalid_attempts += 1;
                observer.on_invalid(&guess, reason);
                continue;
            }
            Evaluation::Win(feedback) => {
                outcome = Outcome::Win;
                feedback
            }
            Evaluation::Continue(feedback) => feedback,
        };

        observer.on_turn(game.guesses_used(), &guess, &feedback);
        turns.push(Turn { guess, feedback });
    }

    info!(
        outcome = ?outcome,
        guesses = turns.len(),
        invalid_attempts,
        "game finished"
    );

    Ok(PlayResult {
        outcome,
        turns,
        invalid_attempts,
        target: game.target().to_string(),
    })
}
