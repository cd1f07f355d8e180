//! Word list loading utilities
//!
//! Provides functions to build a vocabulary from a file or the embedded list.

use super::{WORDS, WORDS_COUNT};
use crate::core::Vocabulary;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// Name that selects the embedded list instead of a file path
pub const EMBEDDED: &str = "embedded";

/// Load a vocabulary of `word_length` words from a newline-delimited file
///
/// # Errors
///
/// Returns an error if the file cannot be read or no word of the requested
/// length is in it.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let vocabulary = load_from_file("words.txt", 5).unwrap();
/// println!("Loaded {} words", vocabulary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: usize) -> Result<Vocabulary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;

    let vocabulary = Vocabulary::new(content.lines(), word_length)
        .with_context(|| format!("unusable word list {}", path.display()))?;

    info!(
        path = %path.display(),
        words = vocabulary.len(),
        word_length,
        "loaded word list"
    );
    Ok(vocabulary)
}

/// Build a vocabulary of `word_length` words from the embedded list
///
/// # Errors
///
/// Returns an error if the embedded list has no word of that length.
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::load_embedded;
///
/// let vocabulary = load_embedded(5).unwrap();
/// assert!(vocabulary.contains("crane"));
/// ```
pub fn load_embedded(word_length: usize) -> Result<Vocabulary> {
    let vocabulary =
        Vocabulary::new(WORDS, word_length).context("unusable embedded word list")?;
    info!(
        words = vocabulary.len(),
        embedded = WORDS_COUNT,
        word_length,
        "loaded embedded word list"
    );
    Ok(vocabulary)
}

/// Load the vocabulary named on the command line
///
/// `"embedded"` selects the bundled list; anything else is a file path.
///
/// # Errors
///
/// Returns an error under the same conditions as [`load_from_file`] and
/// [`load_embedded`].
pub fn load_vocabulary(source: &str, word_length: usize) -> Result<Vocabulary> {
    if source == EMBEDDED {
        load_embedded(word_length)
    } else {
        load_from_file(source, word_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::process;

    fn temp_word_list(name: &str, content: &str) -> std::path::PathBuf {
        let path = env::temp_dir().join(format!("wordle_game_{}_{name}.txt", process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn load_from_file_filters_length() {
        let path = temp_word_list("filters", "crane\nslate\nable\nabsent\n\n  train  \n");
        let vocabulary = load_from_file(&path, 5).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(vocabulary.words(), &["crane", "slate", "train"]);
    }

    #[test]
    fn load_from_file_other_length() {
        let path = temp_word_list("other_length", "crane\nable\nbath\n");
        let vocabulary = load_from_file(&path, 4).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(vocabulary.words(), &["able", "bath"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let err = load_from_file("/nonexistent/wordle_game/words.txt", 5).unwrap_err();
        assert!(err.to_string().contains("failed to read word list"));
    }

    #[test]
    fn load_from_file_without_matches_fails() {
        let path = temp_word_list("no_matches", "able\nbath\n");
        let result = load_from_file(&path, 5);
        fs::remove_file(&path).unwrap();

        let err = result.unwrap_err();
        assert!(format!("{err:#}").contains("no words of length 5"));
    }

    #[test]
    fn load_embedded_by_length() {
        for length in [4, 5, 6] {
            let vocabulary = load_embedded(length).unwrap();
            assert!(vocabulary.words().iter().all(|w| w.chars().count() == length));
        }
    }

    #[test]
    fn load_embedded_unknown_length_fails() {
        assert!(load_embedded(12).is_err());
    }

    #[test]
    fn load_vocabulary_selects_embedded() {
        let vocabulary = load_vocabulary(EMBEDDED, 5).unwrap();
        assert!(vocabulary.contains("crane"));
    }
}
