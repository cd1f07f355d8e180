//! Wordle Game - CLI
//!
//! Plays a Wordle game with a random or interactive guesser, or simulates many
//! random games.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wordle_game::{
    commands::{PlayConfig, SimulationConfig, pick_target, play_game, run_simulation},
    game::{DEFAULT_MAX_GUESSES, Game, HistoryMode},
    output::{TurnPrinter, print_simulation_result, write_session_end},
    solver::{InteractiveSolver, RandomSolver, SolverType, rng_from_seed},
    wordlists::loader::{EMBEDDED, load_vocabulary},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Text-based Wordle with a random or interactive guesser",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = EMBEDDED)]
    wordlist: String,

    /// Length of the words to play with
    #[arg(short = 'l', long, global = true, default_value_t = 5)]
    word_length: usize,

    /// Seed for reproducible target and guess selection
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Maximum number of guesses per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: usize,

    /// Target word (default: random from the wordlist)
    #[arg(long, global = true)]
    word: Option<String>,

    /// Type guesses instead of using the random solver
    #[arg(short, long, global = true)]
    interactive: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game (default)
    Play,

    /// Play many random games and report statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        games: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let config = PlayConfig {
                wordlist: cli.wordlist,
                word_length: cli.word_length,
                target: cli.word,
                seed: cli.seed,
                max_guesses: cli.max_guesses,
                interactive: cli.interactive,
            };
            run_play_command(&config)
        }
        Commands::Simulate { games } => {
            if cli.word.is_some() || cli.interactive {
                tracing::warn!("--word and --interactive are ignored by simulate");
            }
            let config = SimulationConfig {
                games,
                seed: cli.seed,
                max_guesses: cli.max_guesses,
                show_progress: true,
            };
            run_simulate_command(&cli.wordlist, cli.word_length, &config)
        }
    }
}

fn run_play_command(config: &PlayConfig) -> Result<()> {
    let vocabulary = load_vocabulary(&config.wordlist, config.word_length)?;

    let mut rng = rng_from_seed(config.seed);
    let target = pick_target(config, &vocabulary, &mut rng)?;
    let mut game = Game::new(&vocabulary, target, config.max_guesses)
        .context("invalid game configuration")?;

    let mut solver = if config.interactive {
        SolverType::Interactive(InteractiveSolver::stdin(config.word_length))
    } else {
        SolverType::Random(RandomSolver::new(&vocabulary, rng))
    };

    let mut printer = TurnPrinter::stdout(config.interactive);
    let result = play_game(&mut game, &mut solver, &mut printer)?;

    write_session_end(
        &mut std::io::stdout().lock(),
        &result,
        &game.history(HistoryMode::Hidden),
    )
    .context("failed to print game result")?;
    Ok(())
}

fn run_simulate_command(
    wordlist: &str,
    word_length: usize,
    config: &SimulationConfig,
) -> Result<()> {
    let vocabulary = load_vocabulary(wordlist, word_length)?;

    println!(
        "Simulating {} games with {} words of length {word_length}...",
        config.games,
        vocabulary.len()
    );

    let result = run_simulation(&vocabulary, config)?;
    print_simulation_result(&result);
    Ok(())
}
