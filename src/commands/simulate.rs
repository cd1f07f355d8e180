//! Batch simulation
//!
//! Plays many independent random-solver games in parallel and collects
//! win/loss statistics.

use super::play::{Outcome, Silent, play_game};
use crate::core::Vocabulary;
use crate::game::{DEFAULT_MAX_GUESSES, Game};
use crate::solver::{RandomSolver, choose_target, rng_from_seed};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Configuration for a simulation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    pub games: usize,
    /// Game `i` is seeded with `seed + i`; a random base is used when absent
    pub seed: Option<u64>,
    pub max_guesses: usize,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(games: usize) -> Self {
        Self {
            games,
            seed: None,
            max_guesses: DEFAULT_MAX_GUESSES,
            show_progress: false,
        }
    }
}

/// Statistics from a simulation run
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    /// Number of wins by guesses used
    pub distribution: FxHashMap<usize, usize>,
    pub average_winning_guesses: Option<f64>,
    pub max_guesses: usize,
    /// Base seed, reported so a run can be repeated
    pub seed: u64,
    pub duration: Duration,
}

impl SimulationResult {
    /// Fraction of games won, 0.0 for an empty run
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }
}

/// Play `config.games` random games against random targets from `vocabulary`
///
/// Every game owns its own generator, so results only depend on the base seed.
///
/// # Errors
///
/// Returns an error if any game cannot be set up or played.
pub fn run_simulation(
    vocabulary: &Vocabulary,
    config: &SimulationConfig,
) -> Result<SimulationResult> {
    let seed = config.seed.unwrap_or_else(rand::random);
    let start = Instant::now();

    let pb = if config.show_progress {
        ProgressBar::new(config.games as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")?
            .progress_chars("█▓▒░"),
    );

    let outcomes: Vec<(Outcome, usize)> = (0..config.games)
        .into_par_iter()
        .map(|index| -> Result<(Outcome, usize)> {
            let mut rng = rng_from_seed(Some(seed.wrapping_add(index as u64)));
            let target = choose_target(vocabulary, &mut rng)?;
            let mut game = Game::new(vocabulary, target, config.max_guesses)?;
            let mut solver = RandomSolver::new(vocabulary, rng);

            let result = play_game(&mut game, &mut solver, &mut Silent)?;
            pb.inc(1);
            Ok((result.outcome, result.turns.len()))
        })
        .collect::<Result<_>>()?;

    pb.finish_and_clear();

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut winning_guesses = 0;
    for &(outcome, guesses) in &outcomes {
        if outcome == Outcome::Win {
            *distribution.entry(guesses).or_insert(0) += 1;
            winning_guesses += guesses;
        }
    }

    let wins: usize = distribution.values().sum();
    let duration = start.elapsed();

    info!(
        games = config.games,
        wins,
        seed,
        elapsed_ms = duration.as_millis() as u64,
        "simulation finished"
    );

    Ok(SimulationResult {
        games: config.games,
        wins,
        losses: config.games - wins,
        distribution,
        average_winning_guesses: (wins > 0).then(|| winning_guesses as f64 / wins as f64),
        max_guesses: config.max_guesses,
        seed,
        duration,
    })
}
