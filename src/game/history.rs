//! Guess history rendering

use crate::core::Feedback;

/// How to render the guess history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryMode {
    /// Guessed letters coloured by their feedback
    #[default]
    Color,
    /// Feedback symbols only, letters hidden
    Hidden,
    /// The guessed words as typed
    Raw,
}

/// Render one line per guess, each terminated by a newline
///
/// An empty history renders as a single newline.
///
/// # Examples
/// ```
/// use wordle_game::game::{HistoryMode, render_history};
///
/// let guesses = vec!["slate".to_string(), "crane".to_string()];
/// let grid = render_history(&guesses, "crane", HistoryMode::Hidden);
/// assert_eq!(grid, "🟥🟥🟩🟥🟩\n🟩🟩🟩🟩🟩\n");
/// ```
#[must_use]
pub fn render_history(guesses: &[String], target: &str, mode: HistoryMode) -> String {
    let lines: Vec<String> = guesses
        .iter()
        .map(|guess| match mode {
            HistoryMode::Color => Feedback::calculate(guess, target).colorize(guess),
            HistoryMode::Hidden => Feedback::calculate(guess, target).to_symbols(),
            HistoryMode::Raw => guess.clone(),
        })
        .collect();

    let mut rendered = lines.join("\n");
    rendered.push('\n');
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guesses(words: &[&str]) -> Vec<String> {
        words.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn empty_history_is_a_newline() {
        for mode in [HistoryMode::Color, HistoryMode::Hidden, HistoryMode::Raw] {
            assert_eq!(render_history(&[], "crane", mode), "\n");
        }
    }

    #[test]
    fn raw_lists_words() {
        let history = guesses(&["slate", "train"]);
        assert_eq!(
            render_history(&history, "crane", HistoryMode::Raw),
            "slate\ntrain\n"
        );
    }

    #[test]
    fn hidden_uses_symbols() {
        let history = guesses(&["eagle"]);
        assert_eq!(
            render_history(&history, "allee", HistoryMode::Hidden),
            "🟦🟦🟥🟦🟩\n"
        );
    }

    #[test]
    fn color_contains_every_letter() {
        let history = guesses(&["train"]);
        let rendered = render_history(&history, "crane", HistoryMode::Color);
        for letter in "train".chars() {
            assert!(rendered.contains(letter));
        }
        assert!(rendered.ends_with('\n'));
    }

    #[test]
    fn default_mode_is_color() {
        assert_eq!(HistoryMode::default(), HistoryMode::Color);
    }
}
