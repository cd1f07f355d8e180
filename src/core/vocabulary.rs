//! Fixed-length word list
//!
//! A Vocabulary keeps words in their original order (so seeded random selection
//! is reproducible) alongside a hash set for fast membership checks. Words are
//! stored lowercase.

use rustc_hash::FxHashSet;
use std::fmt;

/// Ordered list of words that all share one length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<String>,
    lookup: FxHashSet<String>,
    word_length: usize,
}

/// Error type for vocabularies that cannot be used for a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabularyError {
    ZeroWordLength,
    /// No entry of the requested length survived filtering
    Empty { word_length: usize },
}

impl fmt::Display for VocabularyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWordLength => write!(f, "Word length must be at least 1"),
            Self::Empty { word_length } => {
                write!(f, "Vocabulary has no words of length {word_length}")
            }
        }
    }
}

impl std::error::Error for VocabularyError {}

impl Vocabulary {
    /// Build a vocabulary from candidate entries, keeping those of `word_length`
    ///
    /// Entries are trimmed and lowercased; blank lines and words of any other
    /// length (in characters) are skipped. Order is preserved.
    ///
    /// # Errors
    /// Returns `VocabularyError` if `word_length` is zero or no entry matches it.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Vocabulary;
    ///
    /// let vocabulary = Vocabulary::new(["crane", "slate", "cranes"], 5).unwrap();
    /// assert_eq!(vocabulary.words(), &["crane", "slate"]);
    /// assert!(vocabulary.contains("slate"));
    /// assert!(!vocabulary.contains("cranes"));
    ///
    /// assert!(Vocabulary::new(["abc"], 5).is_err());
    /// ```
    pub fn new<I, S>(entries: I, word_length: usize) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if word_length == 0 {
            return Err(VocabularyError::ZeroWordLength);
        }

        let words: Vec<String> = entries
            .into_iter()
            .map(|entry| entry.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty() && word.chars().count() == word_length)
            .collect();

        if words.is_empty() {
            return Err(VocabularyError::Empty { word_length });
        }

        let lookup = words.iter().cloned().collect();

        Ok(Self {
            words,
            lookup,
            word_length,
        })
    }

    /// Get the words in their original order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Length shared by every word
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Check if a word is part of the vocabulary
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(word)
    }

    /// Number of entries (duplicates included)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
