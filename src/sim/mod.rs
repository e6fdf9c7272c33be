//! Game simulation module
//!
//! All gameplay logic lives here and is deterministic:
//! - The grid is immutable once built
//! - One ray is resolved to completion before the next is fired
//! - Random layouts come from a seeded RNG only
//! - No rendering or platform dependencies

pub mod grid;
pub mod ray;
pub mod session;
pub mod state;

pub use grid::Grid;
pub use ray::{RayEngine, RayOutcome, Scan, ShotTrace};
pub use session::{GameSession, GuessResult, ShotResult};
pub use state::{Cell, Heading, Position, RayPhase, RayState, RngState};
