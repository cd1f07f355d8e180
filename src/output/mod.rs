//! Terminal output formatting
//!
//! Display utilities for turns, outcomes and simulation results.

pub mod display;
pub mod formatters;

pub use display::{TurnPrinter, outcome_line, print_simulation_result, write_session_end};
