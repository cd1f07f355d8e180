//! Game session state and guess evaluation

use super::history::{HistoryMode, render_history};
use crate::core::{Feedback, Vocabulary};
use std::fmt;
use tracing::{debug, info};

/// Default guess budget
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Status of one evaluated guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Continue,
    Win,
    Invalid,
}

/// Why a guess was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidGuess {
    WrongLength { expected: usize, actual: usize },
    NotInVocabulary,
    /// Every allowed guess has already been used
    BudgetExhausted,
}

impl fmt::Display for InvalidGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, actual } => {
                write!(f, "guess must be {expected} letters, got {actual}")
            }
            Self::NotInVocabulary => write!(f, "not in word list"),
            Self::BudgetExhausted => write!(f, "no guesses left"),
        }
    }
}

/// Result of submitting a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// Accepted, target not found yet
    Continue(Feedback),
    /// Accepted, every position correct
    Win(Feedback),
    /// Rejected without touching the session
    Invalid(InvalidGuess),
}

impl Evaluation {
    #[must_use]
    pub const fn status(&self) -> Status {
        match self {
            Self::Continue(_) => Status::Continue,
            Self::Win(_) => Status::Win,
            Self::Invalid(_) => Status::Invalid,
        }
    }

    /// Feedback for accepted guesses, `None` for invalid ones
    #[must_use]
    pub const fn feedback(&self) -> Option<&Feedback> {
        match self {
            Self::Continue(feedback) | Self::Win(feedback) => Some(feedback),
            Self::Invalid(_) => None,
        }
    }
}

/// Error type for sessions that cannot be started
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    TargetLength { expected: usize, actual: usize },
    ZeroMaxGuesses,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TargetLength { expected, actual } => write!(
                f,
                "Target word must be {expected} letters to match the vocabulary, got {actual}"
            ),
            Self::ZeroMaxGuesses => write!(f, "Maximum guesses must be at least 1"),
        }
    }
}

impl std::error::Error for GameError {}

/// One game against one fixed target word
///
/// Owns the guess counter and history; only [`Game::evaluate`] mutates it.
#[derive(Debug, Clone)]
pub struct Game<'a> {
    vocabulary: &'a Vocabulary,
    target: String,
    max_guesses: usize,
    history: Vec<String>,
}

impl<'a> Game<'a> {
    /// Start a new session
    ///
    /// The target is lowercased like the vocabulary. It does not need to be in
    /// the vocabulary, but its length must match the vocabulary's word length.
    ///
    /// # Errors
    /// Returns `GameError` if the target has the wrong length or `max_guesses` is zero.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Vocabulary;
    /// use wordle_game::game::{Game, Status};
    ///
    /// let vocabulary = Vocabulary::new(["crane", "slate", "train"], 5).unwrap();
    /// let mut game = Game::new(&vocabulary, "crane", 6).unwrap();
    ///
    /// assert_eq!(game.evaluate("train").status(), Status::Continue);
    /// assert_eq!(game.evaluate("xxxxx").status(), Status::Invalid);
    /// assert_eq!(game.evaluate("crane").status(), Status::Win);
    /// assert_eq!(game.guesses_used(), 2);
    /// ```
    pub fn new(
        vocabulary: &'a Vocabulary,
        target: impl Into<String>,
        max_guesses: usize,
    ) -> Result<Self, GameError> {
        let target = target.into().to_lowercase();
        let actual = target.chars().count();

        if actual != vocabulary.word_length() {
            return Err(GameError::TargetLength {
                expected: vocabulary.word_length(),
                actual,
            });
        }
        if max_guesses == 0 {
            return Err(GameError::ZeroMaxGuesses);
        }

        info!(
            word_length = actual,
            max_guesses,
            vocabulary = vocabulary.len(),
            "game started"
        );

        Ok(Self {
            vocabulary,
            target,
            max_guesses,
            history: Vec::with_capacity(max_guesses),
        })
    }

    /// Submit a guess
    ///
    /// Invalid guesses (wrong length, unknown word, or no guesses left) leave
    /// the counter and history untouched.
    pub fn evaluate(&mut self, guess: &str) -> Evaluation {
        if let Err(reason) = self.validate(guess) {
            debug!(guess, %reason, "guess rejected");
            return Evaluation::Invalid(reason);
        }

        self.history.push(guess.to_string());
        let feedback = Feedback::calculate(guess, &self.target);

        debug!(
            guess,
            feedback = %feedback,
            correct = feedback.count_correct(),
            present = feedback.count_present(),
            used = self.history.len(),
            max = self.max_guesses,
            "guess evaluated"
        );

        if feedback.is_win() {
            Evaluation::Win(feedback)
        } else {
            Evaluation::Continue(feedback)
        }
    }

    fn validate(&self, guess: &str) -> Result<(), InvalidGuess> {
        let actual = guess.chars().count();
        if actual != self.word_length() {
            return Err(InvalidGuess::WrongLength {
                expected: self.word_length(),
                actual,
            });
        }
        if !self.vocabulary.contains(guess) {
            return Err(InvalidGuess::NotInVocabulary);
        }
        if self.history.len() >= self.max_guesses {
            return Err(InvalidGuess::BudgetExhausted);
        }
        Ok(())
    }

    /// Render the past guesses
    ///
    /// Feedback is recomputed from the stored guesses, so repeated calls
    /// always produce the same text.
    #[must_use]
    pub fn history(&self, mode: HistoryMode) -> String {
        render_history(&self.history, &self.target, mode)
    }

    /// Accepted guesses in submission order
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[String] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.vocabulary.word_length()
    }

    #[inline]
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.history.len()
    }

    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.max_guesses - self.history.len()
    }

    /// Check if the last accepted guess was the target
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.history.last().is_some_and(|last| *last == self.target)
    }

    /// Check if the session has reached a terminal state
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_won() || self.remaining_guesses() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark;

    fn vocabulary() -> Vocabulary {
        Vocabulary::new(
            ["crane", "train", "trace", "slate", "eagle", "allee", "robot"],
            5,
        )
        .unwrap()
    }

    #[test]
    fn correct_guess_wins() {
        let vocabulary = vocabulary();
        let mut game = Game::new(&vocabulary, "crane", 6).unwrap();

        let evaluation = game.evaluate("crane");
        assert_eq!(evaluation.status(), Status::Win);
        assert!(evaluation.feedback().unwrap().is_win());
        assert!(game.is_won());
        assert!(game.is_over());
    }

    #[test]
    fn valid_guess_continues_and_records_history() {
        let vocabulary = vocabulary();
        let mut game = Game::new(&vocabulary, "crane", 6).unwrap();

        let evaluation = game.evaluate("train");
        assert_eq!(evaluation.status(), Status::Continue);
        assert_eq!(
            evaluation.feedback().unwrap().marks(),
            &[Mark::Absent, Mark::Correct, Mark::Correct, Mark::Absent, Mark::Present]
        );
        assert_eq!(game.guesses(), &["train"]);
        assert_eq!(game.guesses_used(), 1);
        assert_eq!(game.remaining_guesses(), 5);
        assert!(!game.is_over());
    }

    #[test]
    fn eagle_against_allee() {
        let vocabulary = vocabulary();
        let mut game = Game::new(&vocabulary, "allee", 6).unwrap();

        let evaluation = game.evaluate("eagle");
        assert_eq!(
            evaluation.feedback().unwrap().marks(),
            &[Mark::Present, Mark::Present, Mark::Absent, Mark::Present, Mark::Correct]
        );
    }

    #[test]
    fn wrong_length_is_invalid_without_side_effects() {
        let vocabulary = vocabulary();
        let mut game = Game::new(&vocabulary, "crane", 6).unwrap();

        let evaluation = game.evaluate("cranes");
        assert_eq!(
            evaluation,
            Evaluation::Invalid(InvalidGuess::WrongLength {
                expected: 5,
                actual: 6
            })
        );
        assert!(evaluation.feedback().is_none());
        assert_eq!(game.guesses_used(), 0);
        assert!(game.guesses().is_empty());
    }

    #[test]
    fn unknown_word_is_invalid_without_side_effects() {
        let vocabulary = vocabulary();
        let mut game = Game::new(&vocabulary, "crane", 6).unwrap();

        assert_eq!(
            game.evaluate("zzzzz"),
            Evaluation::Invalid(InvalidGuess::NotInVocabulary)
        );
        // Case matters for membership
        assert_eq!(game.evaluate("CRANE").status(), Status::Invalid);
        assert_eq!(game.guesses_used(), 0);
    }

    #[test]
    fn guesses_after_budget_exhausted_are_invalid() {
        let vocabulary = vocabulary();
        let mut game = Game::new(&vocabulary, "crane", 2).unwrap();

        assert_eq!(game.evaluate("slate").status(), Status::Continue);
        assert_eq!(game.evaluate("train").status(), Status::Continue);
        assert!(game.is_over());
        assert!(!game.is_won());

        // Even the target is rejected now
        assert_eq!(
            game.evaluate("crane"),
            Evaluation::Invalid(InvalidGuess::BudgetExhausted)
        );
        assert_eq!(game.guesses_used(), 2);
        assert_eq!(game.guesses(), &["slate", "train"]);
    }

    #[test]
    fn invalid_guesses_never_consume_budget() {
        let vocabulary = vocabulary();
        let mut game = Game::new(&vocabulary, "crane", 6).unwrap();

        for guess in ["", "abc", "zzzzz", "qwert", "cranes", "CRANE"] {
            assert_eq!(game.evaluate(guess).status(), Status::Invalid);
        }
        assert_eq!(game.remaining_guesses(), 6);

        assert_eq!(game.evaluate("slate").status(), Status::Continue);
        assert_eq!(game.guesses_used(), 1);
    }

    #[test]
    fn repeated_valid_guesses_are_allowed() {
        let vocabulary = vocabulary();
        let mut game = Game::new(&vocabulary, "crane", 6).unwrap();

        assert_eq!(game.evaluate("slate").status(), Status::Continue);
        assert_eq!(game.evaluate("slate").status(), Status::Continue);
        assert_eq!(game.guesses(), &["slate", "slate"]);
    }

    #[test]
    fn uppercase_word_list_and_target_still_win() {
        let vocabulary = Vocabulary::new(["CRANE", "SLATE"], 5).unwrap();
        let mut game = Game::new(&vocabulary, "CRANE", 6).unwrap();

        assert_eq!(game.target(), "crane");
        let guess = vocabulary.words()[0].clone();
        let evaluation = game.evaluate(&guess);
        assert_eq!(evaluation.status(), Status::Win);
        assert!(evaluation.feedback().unwrap().is_win());
    }

    #[test]
    fn target_outside_vocabulary_is_allowed() {
        let vocabulary = vocabulary();
        let mut game = Game::new(&vocabulary, "zesty", 6).unwrap();

        assert_eq!(game.evaluate("slate").status(), Status::Continue);
        // The target itself cannot be guessed since it is not a valid word
        assert_eq!(game.evaluate("zesty").status(), Status::Invalid);
    }

    #[test]
    fn target_length_must_match_vocabulary() {
        let vocabulary = vocabulary();
        assert!(matches!(
            Game::new(&vocabulary, "cranes", 6),
            Err(GameError::TargetLength {
                expected: 5,
                actual: 6
            })
        ));
    }

    #[test]
    fn zero_max_guesses_rejected() {
        let vocabulary = vocabulary();
        assert!(matches!(
            Game::new(&vocabulary, "crane", 0),
            Err(GameError::ZeroMaxGuesses)
        ));
    }

    #[test]
    fn history_is_repeatable() {
        let vocabulary = vocabulary();
        let mut game = Game::new(&vocabulary, "crane", 6).unwrap();
        game.evaluate("slate");
        game.evaluate("train");

        for mode in [HistoryMode::Color, HistoryMode::Hidden, HistoryMode::Raw] {
            let first = game.history(mode);
            let second = game.history(mode);
            assert_eq!(first, second);
        }
        assert_eq!(game.guesses_used(), 2);
    }

    #[test]
    fn history_hidden_and_raw() {
        let vocabulary = vocabulary();
        let mut game = Game::new(&vocabulary, "crane", 6).unwrap();
        game.evaluate("train");
        game.evaluate("crane");

        assert_eq!(game.history(HistoryMode::Raw), "train\ncrane\n");
        assert_eq!(
            game.history(HistoryMode::Hidden),
            "🟥🟩🟩🟥🟦\n🟩🟩🟩🟩🟩\n"
        );
    }

    #[test]
    fn invalid_guess_display() {
        let reason = InvalidGuess::WrongLength {
            expected: 5,
            actual: 3,
        };
        assert_eq!(reason.to_string(), "guess must be 5 letters, got 3");
        assert_eq!(InvalidGuess::NotInVocabulary.to_string(), "not in word list");
    }
}
