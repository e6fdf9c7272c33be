//! Static board: border ring of ray origins around an interior of atoms
//!
//! The grid never changes after construction, so one instance can be
//! shared read-only by the ray engine and the renderer.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;

use super::state::{Cell, Heading, Position, RngState};
use crate::consts::MIN_BOARD_SIDE;
use crate::error::GridError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    side: usize,
    atoms: BTreeSet<Position>,
}

impl Grid {
    /// Build a board, rejecting the whole layout if any atom is off the
    /// interior or listed twice.
    pub fn new(side: usize, atoms: &[Position]) -> Result<Self, GridError> {
        if side < MIN_BOARD_SIDE {
            return Err(GridError::SideTooSmall {
                side,
                min: MIN_BOARD_SIDE,
            });
        }

        let mut placed = BTreeSet::new();
        for &pos in atoms {
            if pos.row >= side || pos.col >= side {
                return Err(GridError::OutOfRange { pos, side });
            }
            if !Self::is_interior_of(pos, side) {
                return Err(GridError::OnBorder { pos });
            }
            if !placed.insert(pos) {
                return Err(GridError::Duplicate { pos });
            }
        }

        Ok(Self {
            side,
            atoms: placed,
        })
    }

    /// Place `count` distinct atoms at seeded random interior cells
    pub fn random(side: usize, count: usize, seed: u64) -> Result<Self, GridError> {
        if side < MIN_BOARD_SIDE {
            return Err(GridError::SideTooSmall {
                side,
                min: MIN_BOARD_SIDE,
            });
        }
        let interior = side - 2;
        let capacity = interior * interior;
        if count > capacity {
            return Err(GridError::TooManyAtoms {
                requested: count,
                capacity,
            });
        }

        let mut cells: Vec<Position> = (1..=interior)
            .flat_map(|row| (1..=interior).map(move |col| Position::new(row, col)))
            .collect();
        let mut rng = RngState::new(seed).to_rng();
        cells.shuffle(&mut rng);
        cells.truncate(count);

        Self::new(side, &cells)
    }

    /// Board side including the border ring
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Side of the playable interior
    #[inline]
    pub fn interior_side(&self) -> usize {
        self.side - 2
    }

    pub fn atoms(&self) -> impl Iterator<Item = Position> + '_ {
        self.atoms.iter().copied()
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Interior cell holding an atom
    #[inline]
    pub fn occupied(&self, pos: Position) -> bool {
        self.atoms.contains(&pos)
    }

    /// `1 <= row <= side_length && 1 <= col <= side_length`
    #[inline]
    pub fn is_interior(row: isize, col: isize, side_length: usize) -> bool {
        let side_length = side_length as isize;
        (1..=side_length).contains(&row) && (1..=side_length).contains(&col)
    }

    #[inline]
    fn is_interior_of(pos: Position, side: usize) -> bool {
        Self::is_interior(pos.row as isize, pos.col as isize, side - 2)
    }

    /// On the border ring but not a corner
    pub fn is_border_origin(&self, pos: Position) -> bool {
        let last = self.side - 1;
        let on_edge_row = pos.row == 0 || pos.row == last;
        let on_edge_col = pos.col == 0 || pos.col == last;
        let in_row_span = (1..last).contains(&pos.row);
        let in_col_span = (1..last).contains(&pos.col);
        (on_edge_row && in_col_span) || (on_edge_col && in_row_span)
    }

    /// Three-valued read used by the ray scans; anything off the interior is `Outside`
    pub fn cell(&self, row: isize, col: isize) -> Cell {
        if !Self::is_interior(row, col, self.interior_side()) {
            return Cell::Outside;
        }
        if self.occupied(Position::new(row as usize, col as usize)) {
            Cell::Atom
        } else {
            Cell::Empty
        }
    }

    /// Heading a ray fired from `origin` starts with, `None` for non-origins
    pub fn entry_heading(&self, origin: Position) -> Option<Heading> {
        if !self.is_border_origin(origin) {
            return None;
        }
        let last = self.side - 1;
        Some(if origin.row == 0 {
            Heading::South
        } else if origin.row == last {
            Heading::North
        } else if origin.col == 0 {
            Heading::East
        } else {
            Heading::West
        })
    }

    /// Every valid ray origin, clockwise from the top-left
    pub fn origins(&self) -> Vec<Position> {
        let last = self.side - 1;
        let top = (1..last).map(|col| Position::new(0, col));
        let right = (1..last).map(|row| Position::new(row, last));
        let bottom = (1..last).rev().map(|col| Position::new(last, col));
        let left = (1..last).rev().map(|row| Position::new(row, 0));
        top.chain(right).chain(bottom).chain(left).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_occupied() {
        let grid = Grid::new(10, &[p(4, 4), p(8, 8)]).unwrap();
        assert!(grid.occupied(p(4, 4)));
        assert!(grid.occupied(p(8, 8)));
        assert!(!grid.occupied(p(4, 5)));
        assert_eq!(grid.atom_count(), 2);
    }

    #[test]
    fn test_border_origins_exclude_corners() {
        let grid = Grid::new(10, &[]).unwrap();
        assert!(grid.is_border_origin(p(0, 1)));
        assert!(grid.is_border_origin(p(9, 8)));
        assert!(grid.is_border_origin(p(5, 0)));
        assert!(grid.is_border_origin(p(5, 9)));
        for corner in [p(0, 0), p(0, 9), p(9, 0), p(9, 9)] {
            assert!(!grid.is_border_origin(corner), "{corner}");
        }
        assert!(!grid.is_border_origin(p(4, 4)));
        assert!(!grid.is_border_origin(p(10, 3)));
    }

    #[test]
    fn test_origins_cover_ring() {
        let grid = Grid::new(10, &[]).unwrap();
        let origins = grid.origins();
        assert_eq!(origins.len(), 32);
        assert!(origins.iter().all(|&o| grid.is_border_origin(o)));
        assert_eq!(origins[0], p(0, 1));
        assert_eq!(origins[31], p(1, 0));
    }

    #[test]
    fn test_cell_reports_outside() {
        let grid = Grid::new(10, &[p(1, 1)]).unwrap();
        assert_eq!(grid.cell(1, 1), Cell::Atom);
        assert_eq!(grid.cell(1, 2), Cell::Empty);
        assert_eq!(grid.cell(0, 1), Cell::Outside);
        assert_eq!(grid.cell(9, 4), Cell::Outside);
        assert_eq!(grid.cell(-1, 4), Cell::Outside);
    }

    #[test]
    fn test_entry_heading() {
        let grid = Grid::new(10, &[]).unwrap();
        assert_eq!(grid.entry_heading(p(0, 3)), Some(Heading::South));
        assert_eq!(grid.entry_heading(p(9, 3)), Some(Heading::North));
        assert_eq!(grid.entry_heading(p(3, 0)), Some(Heading::East));
        assert_eq!(grid.entry_heading(p(3, 9)), Some(Heading::West));
        assert_eq!(grid.entry_heading(p(0, 0)), None);
        assert_eq!(grid.entry_heading(p(3, 3)), None);
    }

    #[test]
    fn test_rejects_bad_layouts() {
        assert_eq!(
            Grid::new(2, &[]),
            Err(GridError::SideTooSmall { side: 2, min: 3 })
        );
        assert_eq!(
            Grid::new(10, &[p(0, 4)]),
            Err(GridError::OnBorder { pos: p(0, 4) })
        );
        assert_eq!(
            Grid::new(10, &[p(4, 12)]),
            Err(GridError::OutOfRange { pos: p(4, 12), side: 10 })
        );
        assert_eq!(
            Grid::new(10, &[p(3, 3), p(3, 3)]),
            Err(GridError::Duplicate { pos: p(3, 3) })
        );
    }

    #[test]
    fn test_random_is_seeded() {
        let a = Grid::random(10, 5, 42).unwrap();
        let b = Grid::random(10, 5, 42).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.atom_count(), 5);
        assert!(a.atoms().all(|pos| Grid::is_interior(pos.row as isize, pos.col as isize, 8)));
    }

    #[test]
    fn test_random_rejects_overfull() {
        assert_eq!(
            Grid::random(4, 5, 1),
            Err(GridError::TooManyAtoms { requested: 5, capacity: 4 })
        );
        assert_eq!(Grid::random(4, 4, 1).unwrap().atom_count(), 4);
    }
}
