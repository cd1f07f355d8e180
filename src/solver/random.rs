//! Random guess source
//!
//! Draws guesses uniformly, with replacement, from the whole vocabulary.

use super::GuessSource;
use crate::core::{Feedback, Vocabulary};
use anyhow::{Result, anyhow};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use tracing::{debug, warn};

/// Build the random source for a session
///
/// A seed makes the session reproducible; without one the generator is seeded
/// from the operating system.
#[must_use]
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

/// Pick a target word uniformly from the vocabulary
///
/// # Errors
/// Returns an error if the vocabulary is empty.
pub fn choose_target(vocabulary: &Vocabulary, rng: &mut StdRng) -> Result<String> {
    vocabulary
        .words()
        .choose(rng)
        .cloned()
        .ok_or_else(|| anyhow!("cannot choose a target from an empty vocabulary"))
}

/// Random strategy
///
/// Ignores feedback entirely and may repeat earlier guesses.
pub struct RandomSolver<'a> {
    words: &'a [String],
    rng: StdRng,
}

impl<'a> RandomSolver<'a> {
    /// Create a solver drawing from `vocabulary` with the given generator
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Vocabulary;
    /// use wordle_game::solver::{GuessSource, RandomSolver, rng_from_seed};
    ///
    /// let vocabulary = Vocabulary::new(["crane", "slate", "train"], 5).unwrap();
    /// let mut solver = RandomSolver::new(&vocabulary, rng_from_seed(Some(42)));
    ///
    /// let guess = solver.generate_guess(None).unwrap();
    /// assert!(vocabulary.contains(&guess));
    /// ```
    #[must_use]
    pub fn new(vocabulary: &'a Vocabulary, rng: StdRng) -> Self {
        Self {
            words: vocabulary.words(),
            rng,
        }
    }
}

impl GuessSource for RandomSolver<'_> {
    fn generate_guess(&mut self, _previous: Option<&Feedback>) -> Result<String> {
        let guess = self.words.choose(&mut self.rng).cloned().ok_or_else(|| {
            warn!("random solver has no words to choose from");
            anyhow!("no words available to guess")
        })?;
        debug!(%guess, "random guess");
        Ok(guess)
    }
}
