//! One game: point budget, charged border cells and atom guesses
//!
//! The session owns all mutable game state. Each shot runs the ray engine to
//! completion, then the charge is checked against the balance before
//! anything is committed, so a rejected shot or guess leaves no trace.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use super::grid::Grid;
use super::ray::{RayEngine, RayOutcome, ShotTrace};
use super::state::Position;
use crate::error::{GridError, SessionError};
use crate::renderer;
use crate::settings::Settings;

/// What the player sees after a shot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotResult {
    /// Not a border cell, or a corner; nothing charged
    InvalidOrigin,
    /// The entry/exit charge would use up the remaining balance; nothing charged
    InsufficientPoints,
    /// Absorbed by an atom
    Hit,
    /// Left the board here
    Exit(Position),
}

/// What the player sees after guessing an atom location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessResult {
    InsufficientPoints,
    AlreadyGuessedCorrect,
    AlreadyGuessedIncorrect,
    Correct,
    Incorrect,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    settings: Settings,
    grid: Grid,
    /// Ground truth for guesses, kept apart from the grid's own copy
    atoms: BTreeSet<Position>,
    points: u32,
    /// Guessed cell -> whether it held an atom
    guesses: BTreeMap<Position, bool>,
    /// Border cells already billed as an entry or exit
    charged: HashSet<Position>,
    last_trace: Option<ShotTrace>,
}

impl GameSession {
    /// Canonical 10x10 game with atoms at the given interior cells
    pub fn new(atoms: &[Position]) -> Result<Self, SessionError> {
        Self::with_settings(Settings::default(), atoms)
    }

    pub fn with_settings(settings: Settings, atoms: &[Position]) -> Result<Self, SessionError> {
        settings.validate()?;
        let grid = Grid::new(settings.side, atoms).inspect_err(|e| {
            log::warn!("Rejected atom layout: {}", e);
        })?;
        Ok(Self::from_grid(settings, grid))
    }

    /// Game with `atom_count` atoms hidden at seeded random cells
    pub fn random(settings: Settings, atom_count: usize, seed: u64) -> Result<Self, SessionError> {
        settings.validate()?;
        let grid = Grid::random(settings.side, atom_count, seed)?;
        log::info!("Hid {} atoms with seed {}", atom_count, seed);
        Ok(Self::from_grid(settings, grid))
    }

    fn from_grid(settings: Settings, grid: Grid) -> Self {
        log::info!(
            "New game: {}x{} board, {} atoms, {} points",
            grid.side(),
            grid.side(),
            grid.atom_count(),
            settings.starting_points
        );
        Self {
            atoms: grid.atoms().collect(),
            points: settings.starting_points,
            settings,
            grid,
            guesses: BTreeMap::new(),
            charged: HashSet::new(),
            last_trace: None,
        }
    }

    /// Fire a ray from a border cell
    pub fn shoot(&mut self, row: usize, col: usize) -> ShotResult {
        let origin = Position::new(row, col);
        let Some(trace) = RayEngine::new(&self.grid).trace(origin) else {
            return ShotResult::InvalidOrigin;
        };

        let exit = match trace.outcome {
            RayOutcome::Exit(pos) => Some(pos),
            _ => None,
        };
        let mut fresh: Vec<Position> = Vec::with_capacity(2);
        for cell in std::iter::once(origin).chain(exit) {
            if !self.charged.contains(&cell) && !fresh.contains(&cell) {
                fresh.push(cell);
            }
        }

        // A zero balance rejects even a shot through cells already paid for;
        // a cost too large to represent is never affordable
        let cost = match (fresh.len() as u32).checked_mul(self.settings.ray_cell_cost) {
            Some(cost) if cost < self.points => cost,
            cost => {
                log::debug!(
                    "Shot from {} needs {:?} points, only {} left",
                    origin,
                    cost,
                    self.points
                );
                return ShotResult::InsufficientPoints;
            }
        };

        self.points -= cost;
        self.charged.extend(fresh);

        let result = match trace.outcome {
            RayOutcome::Exit(pos) => ShotResult::Exit(pos),
            _ => ShotResult::Hit,
        };
        self.last_trace = Some(trace);
        result
    }

    /// Guess that an atom sits at an interior cell
    pub fn guess_atom(&mut self, row: usize, col: usize) -> GuessResult {
        if self.points < self.settings.guess_cost {
            return GuessResult::InsufficientPoints;
        }

        let pos = Position::new(row, col);
        if let Some(&correct) = self.guesses.get(&pos) {
            return if correct {
                GuessResult::AlreadyGuessedCorrect
            } else {
                GuessResult::AlreadyGuessedIncorrect
            };
        }

        let correct = self.atoms.contains(&pos);
        self.guesses.insert(pos, correct);
        if correct {
            log::info!("Atom found at {}", pos);
            GuessResult::Correct
        } else {
            self.points -= self.settings.guess_cost;
            log::info!("No atom at {}, {} points left", pos, self.points);
            GuessResult::Incorrect
        }
    }

    pub fn score(&self) -> u32 {
        self.points
    }

    /// Atoms not yet correctly guessed
    pub fn atoms_remaining(&self) -> usize {
        self.atoms
            .iter()
            .filter(|&pos| self.guesses.get(pos) != Some(&true))
            .count()
    }

    /// Every atom has been found
    pub fn is_solved(&self) -> bool {
        self.atoms_remaining() == 0
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Path of the most recent accepted shot
    pub fn last_trace(&self) -> Option<&ShotTrace> {
        self.last_trace.as_ref()
    }

    /// Interior board with atoms and the last shot's path
    pub fn render(&self) -> String {
        match &self.last_trace {
            Some(trace) => renderer::render_board(&self.grid, &trace.trajectory),
            None => renderer::render_board(&self.grid, &HashSet::new()),
        }
    }
}
