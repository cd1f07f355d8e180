//! Command implementations

pub mod play;
pub mod simulate;

pub use play::{
    Outcome, PlayConfig, PlayObserver, PlayResult, Silent, Turn, pick_target, play_game,
};
pub use simulate::{SimulationConfig, SimulationResult, run_simulation};
