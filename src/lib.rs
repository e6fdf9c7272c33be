//! Black Box - a hidden-atom deduction game
//!
//! Core modules:
//! - `sim`: Grid, ray traversal engine and game session (scoring, guesses)
//! - `renderer`: Plain-text board dump for the last shot
//! - `settings`: Data-driven game rules
//! - `error`: Construction and configuration errors

pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{GridError, SessionError, SettingsError};
pub use settings::Settings;
pub use sim::{GameSession, GuessResult, Position, ShotResult};

/// Game configuration constants
pub mod consts {
    /// Canonical board side, border ring included
    pub const BOARD_SIDE: usize = 10;
    /// Smallest board that still has an interior cell
    pub const MIN_BOARD_SIDE: usize = 3;
    /// Largest board a rule set may ask for
    pub const MAX_BOARD_SIDE: usize = 256;

    /// Points a fresh session starts with
    pub const STARTING_POINTS: u32 = 25;
    /// Cost of a wrong atom guess
    pub const GUESS_COST: u32 = 5;
    /// Cost of each border cell the first time it is used as entry or exit
    pub const RAY_CELL_COST: u32 = 1;
}
