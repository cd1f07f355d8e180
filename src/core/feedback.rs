//! Wordle feedback calculation and representation
//!
//! Feedback is one [`Mark`] per letter position:
//! - Absent (letter not available in the target)
//! - Present (letter in the target, wrong position)
//! - Correct (letter in the correct position)
//!
//! Feedback works for any word length.

use colored::Colorize;
use rustc_hash::FxHashMap;
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Letter does not appear in the target (or all occurrences are used up)
    Absent,
    /// Letter appears in the target at another position
    Present,
    /// Letter is in the correct position
    Correct,
}

impl Mark {
    /// Symbol used in the hidden history grid
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Absent => '🟥',
            Self::Present => '🟦',
            Self::Correct => '🟩',
        }
    }
}

/// Per-position feedback for one guess against one target
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Mark>);

impl Feedback {
    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters. No validation happens here: words of unequal
    /// length are compared up to the shorter one.
    ///
    /// # Algorithm
    /// 1. First pass: Mark all exact matches and remove them from the available pool
    /// 2. Second pass: Mark present-but-wrong-position letters from the remaining pool,
    ///    earlier positions first
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Mark};
    ///
    /// let feedback = Feedback::calculate("eagle", "allee");
    /// assert_eq!(
    ///     feedback.marks(),
    ///     &[Mark::Present, Mark::Present, Mark::Absent, Mark::Present, Mark::Correct]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &str, target: &str) -> Self {
        let guess: Vec<char> = guess.chars().collect();
        let target: Vec<char> = target.chars().collect();
        let len = guess.len().min(target.len());

        let mut marks = vec![Mark::Absent; len];
        let mut remaining = letter_counts(&target);

        // First pass: exact position matches
        for (i, mark) in marks.iter_mut().enumerate() {
            if guess[i] == target[i] {
                *mark = Mark::Correct;
                if let Some(count) = remaining.get_mut(&guess[i]) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, but an occurrence is still available
        for (i, mark) in marks.iter_mut().enumerate() {
            if *mark == Mark::Correct {
                continue;
            }
            if let Some(count) = remaining.get_mut(&guess[i])
                && *count > 0
            {
                *mark = Mark::Present;
                *count -= 1;
            }
        }

        Self(marks)
    }

    /// The marks, one per letter position
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    /// Number of letter positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for feedback over an empty word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&mark| mark == Mark::Correct)
    }

    /// Count the number of correct positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(Mark::Correct)
    }

    /// Count the number of present (wrong position) letters
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(Mark::Present)
    }

    fn count(&self, wanted: Mark) -> usize {
        self.0.iter().filter(|&&mark| mark == wanted).count()
    }

    /// Convert feedback to a symbol string like "🟥🟦🟩🟩🟥"
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Feedback;
    ///
    /// assert_eq!(Feedback::calculate("crane", "crane").to_symbols(), "🟩🟩🟩🟩🟩");
    /// ```
    #[must_use]
    pub fn to_symbols(&self) -> String {
        self.0.iter().map(|mark| mark.symbol()).collect()
    }

    /// Render the guessed letters coloured by their marks
    ///
    /// Correct letters are green, present letters blue and absent letters red.
    #[must_use]
    pub fn colorize(&self, guess: &str) -> String {
        guess
            .chars()
            .zip(&self.0)
            .map(|(letter, mark)| {
                let letter = letter.to_string();
                let painted = match mark {
                    Mark::Correct => letter.green(),
                    Mark::Present => letter.blue(),
                    Mark::Absent => letter.red(),
                };
                painted.to_string()
            })
            .collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_symbols())
    }
}

/// Multiset of the letters in a word
fn letter_counts(letters: &[char]) -> FxHashMap<char, usize> {
    let mut counts = FxHashMap::default();
    for &letter in letters {
        *counts.entry(letter).or_insert(0) += 1;
    }
    counts
}
