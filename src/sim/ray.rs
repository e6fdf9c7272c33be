//! Ray traversal and direction resolution
//!
//! The interesting part of Black Box: a ray walks the interior one cell at a
//! time, and before every step it looks at the cell straight ahead and the
//! two cells diagonally ahead. One atom on a diagonal turns the ray away from
//! it, two atoms reverse it, and an atom straight ahead wins over both so the
//! ray is absorbed on the next step.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::grid::Grid;
use super::state::{Cell, Heading, Position, RayPhase, RayState};

/// Terminal result of one shot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RayOutcome {
    /// Origin is not a border cell, or is a corner
    Invalid,
    /// Absorbed by the atom at this position
    Hit(Position),
    /// Left the board at this border cell (possibly the origin itself)
    Exit(Position),
}

/// A resolved shot with the path it took
#[derive(Debug, Clone)]
pub struct ShotTrace {
    pub origin: Position,
    pub outcome: RayOutcome,
    /// Interior cells the ray passed through
    pub trajectory: HashSet<Position>,
    /// Advance steps taken
    pub steps: usize,
    /// Deflections and reversals
    pub turns: usize,
}

impl ShotTrace {
    fn finish(origin: Position, outcome: RayOutcome, ray: RayState) -> Self {
        Self {
            origin,
            outcome,
            trajectory: ray.trajectory,
            steps: ray.steps,
            turns: ray.turns,
        }
    }

    /// Ray came straight back out of its own entry cell
    pub fn is_reflection(&self) -> bool {
        self.outcome == RayOutcome::Exit(self.origin)
    }
}

/// The three cells ahead of a ray, relative to its heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scan {
    pub ahead: Cell,
    /// Diagonals in the order of [`Heading::sides`]
    pub diagonals: [Cell; 2],
}

impl Scan {
    /// Read the straight-ahead cell and the two diagonals from `pos`
    pub fn look(grid: &Grid, pos: Position, heading: Heading) -> Self {
        let (d_row, d_col) = heading.delta();
        let ahead_row = pos.row as isize + d_row;
        let ahead_col = pos.col as isize + d_col;
        let diagonals = heading.sides().map(|side| {
            let (s_row, s_col) = side.delta();
            grid.cell(ahead_row + s_row, ahead_col + s_col)
        });
        Self {
            ahead: grid.cell(ahead_row, ahead_col),
            diagonals,
        }
    }

    /// An atom diagonally ahead of the entry cell, with a clear path straight ahead
    pub fn reflects_at_entry(&self) -> bool {
        !self.ahead.is_atom() && self.diagonals.iter().any(|c| c.is_atom())
    }

    /// Heading after applying the deflection rules
    pub fn resolve(&self, heading: Heading) -> Heading {
        if self.ahead.is_atom() {
            return heading;
        }
        let [first, second] = heading.sides();
        match (self.diagonals[0].is_atom(), self.diagonals[1].is_atom()) {
            (true, true) => heading.opposite(),
            (true, false) => first.opposite(),
            (false, true) => second.opposite(),
            (false, false) => heading,
        }
    }
}

/// Fires rays across a shared, read-only grid
#[derive(Debug, Clone, Copy)]
pub struct RayEngine<'g> {
    grid: &'g Grid,
}

impl<'g> RayEngine<'g> {
    pub fn new(grid: &'g Grid) -> Self {
        Self { grid }
    }

    /// Resolve a shot to its outcome
    pub fn fire(&self, origin: Position) -> RayOutcome {
        self.trace(origin)
            .map_or(RayOutcome::Invalid, |trace| trace.outcome)
    }

    /// Resolve a shot and keep its path; `None` for an invalid origin
    pub fn trace(&self, origin: Position) -> Option<ShotTrace> {
        let heading = self.grid.entry_heading(origin)?;
        let mut ray = RayState::new(origin, heading);
        let outcome = self.run(&mut ray);
        log::debug!(
            "Ray from {} heading {:?}: {:?} after {} steps, {} turns",
            origin,
            heading,
            outcome,
            ray.steps,
            ray.turns
        );
        Some(ShotTrace::finish(origin, outcome, ray))
    }

    fn run(&self, ray: &mut RayState) -> RayOutcome {
        debug_assert_eq!(ray.phase, RayPhase::Entering);

        if Scan::look(self.grid, ray.position, ray.heading).reflects_at_entry() {
            ray.phase = RayPhase::Exited;
            return RayOutcome::Exit(ray.position);
        }

        ray.phase = RayPhase::Traveling;
        self.advance(ray);

        // Rays are reversible, so a path from the border always returns to it
        while !ray.is_done() && !self.grid.is_border_origin(ray.position) {
            ray.trajectory.insert(ray.position);

            let heading = Scan::look(self.grid, ray.position, ray.heading).resolve(ray.heading);
            if heading != ray.heading {
                log::trace!("Turn at {}: {:?} -> {:?}", ray.position, ray.heading, heading);
                ray.turn(heading);
            }

            self.advance(ray);
            debug_assert!(
                ray.steps <= self.grid.side().saturating_mul(self.grid.side()),
                "ray exceeded side² steps"
            );
        }

        match ray.hit {
            Some(pos) => RayOutcome::Hit(pos),
            None => {
                ray.phase = RayPhase::Exited;
                RayOutcome::Exit(ray.position)
            }
        }
    }

    /// Move one cell along the current heading, marking a hit if it lands on an atom
    fn advance(&self, ray: &mut RayState) {
        // From the entry cell or the interior a step never leaves the lattice
        let Some(next) = ray.position.step(ray.heading) else {
            ray.phase = RayPhase::Exited;
            return;
        };
        ray.position = next;
        ray.steps += 1;
        if self.grid.occupied(next) {
            ray.hit = Some(next);
            ray.phase = RayPhase::Hit;
        }
    }
}
