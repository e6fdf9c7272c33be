//! Error types for board construction and rule configuration
//!
//! Gameplay rejections (bad origin, not enough points) are ordinary result
//! values on [`crate::sim::ShotResult`] and [`crate::sim::GuessResult`]; only
//! setup can fail with an error.

use crate::sim::Position;

/// Why a board layout was rejected
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("board side {side} is too small (minimum {min})")]
    SideTooSmall { side: usize, min: usize },
    #[error("atom at {pos} lies outside a {side}x{side} board")]
    OutOfRange { pos: Position, side: usize },
    #[error("atom at {pos} sits on the border ring")]
    OnBorder { pos: Position },
    #[error("atom at {pos} is listed more than once")]
    Duplicate { pos: Position },
    #[error("cannot place {requested} atoms in an interior of {capacity} cells")]
    TooManyAtoms { requested: usize, capacity: usize },
}

/// Why a game session could not be started
#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// Why a rule set could not be loaded
#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("settings json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}
