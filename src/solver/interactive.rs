//! Interactive guess source
//!
//! Reads one guess per prompt from a line-based reader. Stdin in normal use,
//! any `BufRead` (a script, a test cursor) otherwise.

use super::GuessSource;
use crate::core::Feedback;
use anyhow::{Context, Result, bail};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Guess source backed by line input
///
/// Input is trimmed and lowercased but otherwise passed through untouched;
/// the game decides whether a guess is valid.
pub struct InteractiveSolver<R = io::StdinLock<'static>, W = io::Stdout> {
    reader: R,
    writer: W,
    word_length: usize,
}

impl InteractiveSolver {
    /// Read guesses from stdin and prompt on stdout
    #[must_use]
    pub fn stdin(word_length: usize) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), word_length)
    }
}

impl<R: BufRead, W: Write> InteractiveSolver<R, W> {
    /// Create a solver over any reader/writer pair
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    /// use wordle_game::solver::{GuessSource, InteractiveSolver};
    ///
    /// let mut solver = InteractiveSolver::new(Cursor::new("Crane\n"), Vec::new(), 5);
    /// assert_eq!(solver.generate_guess(None).unwrap(), "crane");
    /// ```
    pub const fn new(reader: R, writer: W, word_length: usize) -> Self {
        Self {
            reader,
            writer,
            word_length,
        }
    }

    /// Give back the reader and writer
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> GuessSource for InteractiveSolver<R, W> {
    fn generate_guess(&mut self, _previous: Option<&Feedback>) -> Result<String> {
        write!(
            self.writer,
            "type a guess ({} letters): ",
            self.word_length
        )
        .context("failed to write prompt")?;
        self.writer.flush().context("failed to flush prompt")?;

        let mut input = String::new();
        let read = self
            .reader
            .read_line(&mut input)
            .context("failed to read guess")?;
        if read == 0 {
            bail!("input closed before the game finished");
        }

        let guess = input.trim().to_lowercase();
        debug!(%guess, "interactive guess");
        Ok(guess)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_one_line_per_guess() {
        let mut solver = InteractiveSolver::new(Cursor::new("crane\nslate\n"), Vec::new(), 5);

        assert_eq!(solver.generate_guess(None).unwrap(), "crane");
        assert_eq!(solver.generate_guess(None).unwrap(), "slate");
    }

    #[test]
    fn trims_and_lowercases() {
        let mut solver = InteractiveSolver::new(Cursor::new("  TRAIN \r\n"), Vec::new(), 5);
        assert_eq!(solver.generate_guess(None).unwrap(), "train");
    }

    #[test]
    fn does_not_validate() {
        let mut solver = InteractiveSolver::new(Cursor::new("ab\n\n"), Vec::new(), 5);

        assert_eq!(solver.generate_guess(None).unwrap(), "ab");
        assert_eq!(solver.generate_guess(None).unwrap(), "");
    }

    #[test]
    fn writes_prompt_with_word_length() {
        let mut solver = InteractiveSolver::new(Cursor::new("absent\n"), Vec::new(), 6);
        solver.generate_guess(None).unwrap();

        let (_, prompt) = solver.into_parts();
        assert_eq!(String::from_utf8(prompt).unwrap(), "type a guess (6 letters): ");
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut solver = InteractiveSolver::new(Cursor::new(""), Vec::new(), 5);
        let err = solver.generate_guess(None).unwrap_err();
        assert!(err.to_string().contains("input closed"));
    }

    #[test]
    fn final_line_without_newline_is_read() {
        let mut solver = InteractiveSolver::new(Cursor::new("crane"), Vec::new(), 5);
        assert_eq!(solver.generate_guess(None).unwrap(), "crane");
        assert!(solver.generate_guess(None).is_err());
    }
}
