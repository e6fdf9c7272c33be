//! Board coordinates and per-ray state
//!
//! Everything a single shot mutates lives in [`RayState`]; it is created at
//! the start of a shot and dropped when the shot resolves.

use std::collections::HashSet;
use std::fmt;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// A board cell, 0-indexed from the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Neighbour at a signed offset, `None` if it would fall off the top or left edge
    #[inline]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }

    /// Next cell along a heading
    #[inline]
    pub fn step(self, heading: Heading) -> Option<Self> {
        let (d_row, d_col) = heading.delta();
        self.offset(d_row, d_col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Direction of travel; rows grow southward, columns eastward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    North,
    South,
    East,
    West,
}

impl Heading {
    /// `(d_row, d_col)` of one step
    #[inline]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Heading::North => (-1, 0),
            Heading::South => (1, 0),
            Heading::East => (0, 1),
            Heading::West => (0, -1),
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Heading::North => Heading::South,
            Heading::South => Heading::North,
            Heading::East => Heading::West,
            Heading::West => Heading::East,
        }
    }

    /// The two headings perpendicular to this one.
    ///
    /// A scan-ahead diagonal is the straight-ahead cell shifted one step
    /// toward a side; a ray deflected by that diagonal turns to the
    /// opposite side.
    #[inline]
    pub const fn sides(self) -> [Heading; 2] {
        match self {
            Heading::North | Heading::South => [Heading::West, Heading::East],
            Heading::East | Heading::West => [Heading::North, Heading::South],
        }
    }
}

/// What a scan finds in one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Interior cell holding an atom
    Atom,
    /// Interior cell with nothing in it
    Empty,
    /// Border, corner or off the board; never deflects a ray
    Outside,
}

impl Cell {
    #[inline]
    pub fn is_atom(self) -> bool {
        self == Cell::Atom
    }
}

/// Lifecycle of a single ray
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RayPhase {
    /// Sitting on its origin, about to check for an immediate reflection
    Entering,
    /// Moving through the interior
    Traveling,
    /// Absorbed by an atom
    Hit,
    /// Back on a border cell
    Exited,
}

/// Mutable state of the ray currently in flight
#[derive(Debug, Clone)]
pub struct RayState {
    pub position: Position,
    pub heading: Heading,
    pub phase: RayPhase,
    /// Interior cells passed through (border cells and the hit cell excluded)
    pub trajectory: HashSet<Position>,
    pub hit: Option<Position>,
    /// Advance steps taken so far
    pub steps: usize,
    /// Deflections and reversals so far
    pub turns: usize,
}

impl RayState {
    pub fn new(origin: Position, heading: Heading) -> Self {
        Self {
            position: origin,
            heading,
            phase: RayPhase::Entering,
            trajectory: HashSet::new(),
            hit: None,
            steps: 0,
            turns: 0,
        }
    }

    /// Change heading, counting the turn if it actually differs
    pub fn turn(&mut self, heading: Heading) {
        if heading != self.heading {
            self.heading = heading;
            self.turns += 1;
        }
    }

    /// Whether the ray has reached a terminal phase
    pub fn is_done(&self) -> bool {
        matches!(self.phase, RayPhase::Hit | RayPhase::Exited)
    }
}

/// RNG state wrapper so random layouts are reproducible from a seed
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_rejects_negative() {
        let origin = Position::new(0, 3);
        assert_eq!(origin.step(Heading::North), None);
        assert_eq!(origin.step(Heading::South), Some(Position::new(1, 3)));
        assert_eq!(Position::new(4, 0).offset(-1, -1), None);
    }

    #[test]
    fn test_sides_are_perpendicular() {
        for heading in [Heading::North, Heading::South, Heading::East, Heading::West] {
            let (dr, dc) = heading.delta();
            for side in heading.sides() {
                let (sr, sc) = side.delta();
                assert_eq!(dr * sr + dc * sc, 0, "{heading:?} / {side:?}");
            }
            assert_eq!(heading.opposite().opposite(), heading);
        }
    }

    #[test]
    fn test_turn_counts_only_changes() {
        let mut ray = RayState::new(Position::new(0, 3), Heading::South);
        ray.turn(Heading::South);
        assert_eq!(ray.turns, 0);
        ray.turn(Heading::West);
        ray.turn(Heading::East);
        assert_eq!(ray.turns, 2);
        assert_eq!(ray.heading, Heading::East);
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(3, 9).to_string(), "(3, 9)");
        assert_eq!(Position::from((7, 1)), Position::new(7, 1));
    }
}
