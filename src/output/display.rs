//! Display functions for game and simulation results

use super::formatters::{distribution_bar, percent, turn_line};
use crate::commands::{Outcome, PlayObserver, PlayResult, SimulationResult};
use crate::core::Feedback;
use crate::game::InvalidGuess;
use colored::Colorize;
use std::io::{self, Write};
use tracing::warn;

/// Writes each turn as it is played
///
/// Rejected guesses are only reported when `report_invalid` is set, which is
/// what a human typing guesses wants to see.
pub struct TurnPrinter<W = io::Stdout> {
    writer: W,
    report_invalid: bool,
}

impl TurnPrinter {
    /// Print turns on stdout
    #[must_use]
    pub fn stdout(report_invalid: bool) -> Self {
        Self::new(io::stdout(), report_invalid)
    }
}

impl<W: Write> TurnPrinter<W> {
    pub const fn new(writer: W, report_invalid: bool) -> Self {
        Self {
            writer,
            report_invalid,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PlayObserver for TurnPrinter<W> {
    fn on_turn(&mut self, turn: usize, guess: &str, feedback: &Feedback) {
        let line = turn_line(turn, &feedback.colorize(guess));
        if let Err(err) = writeln!(self.writer, "{line}") {
            warn!(%err, "failed to print turn");
        }
    }

    fn on_invalid(&mut self, guess: &str, reason: InvalidGuess) {
        if !self.report_invalid {
            return;
        }
        let label = "invalid guess".yellow();
        if let Err(err) = writeln!(self.writer, "{label} '{guess}': {reason}") {
            warn!(%err, "failed to print rejected guess");
        }
    }
}

/// How the game ended, revealing the target on a loss
#[must_use]
pub fn outcome_line(result: &PlayResult) -> String {
    match result.outcome {
        Outcome::Win => "win".to_string(),
        Outcome::Lose => format!("lose, word is {}", result.target.green()),
    }
}

/// Write the end of a session: the outcome followed by the history grid
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_session_end<W: Write>(
    writer: &mut W,
    result: &PlayResult,
    history: &str,
) -> io::Result<()> {
    writeln!(writer, "{}", outcome_line(result))?;
    write!(writer, "{history}")?;
    writer.flush()
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    println!(
        "   Wins:             {} ({})",
        result.wins.to_string().green(),
        percent(result.wins, result.games)
    );
    println!("   Losses:           {}", result.losses.to_string().red());
    if let Some(average) = result.average_winning_guesses {
        println!(
            "   Average guesses:  {}",
            format!("{average:.2}").bright_yellow().bold()
        );
    }
    println!("   Seed:             {}", result.seed);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    if result.wins == 0 {
        return;
    }

    let largest = result.distribution.values().copied().max().unwrap_or(0);
    println!("\n📈 {}", "Winning guess distribution:".bright_cyan().bold());
    for guess_count in 1..=result.max_guesses {
        let count = result.distribution.get(&guess_count).copied().unwrap_or(0);
        println!(
            "   {guess_count:>2}: {} {count:6} ({})",
            distribution_bar(count, largest, 40).green(),
            percent(count, result.wins)
        );
    }
}
