//! Plain-text dump of the interior, one board row per line

use std::collections::HashSet;

use crate::sim::{Grid, Position};

pub const ATOM_MARK: &str = " o ";
pub const PATH_MARK: &str = " x ";
pub const EMPTY_MARK: &str = " _ ";

/// Render the interior with atoms and a ray's trajectory.
///
/// Border cells are left out. An atom always wins over a trajectory mark.
pub fn render_board(grid: &Grid, trajectory: &HashSet<Position>) -> String {
    let interior = 1..=grid.interior_side();
    interior
        .clone()
        .map(|row| {
            interior
                .clone()
                .map(|col| {
                    let pos = Position::new(row, col);
                    if grid.occupied(pos) {
                        ATOM_MARK
                    } else if trajectory.contains(&pos) {
                        PATH_MARK
                    } else {
                        EMPTY_MARK
                    }
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_board() {
        let grid = Grid::new(4, &[]).unwrap();
        assert_eq!(render_board(&grid, &HashSet::new()), " _  _ \n _  _ ");
    }

    #[test]
    fn test_atom_wins_over_path() {
        let grid = Grid::new(5, &[Position::new(2, 2)]).unwrap();
        let path: HashSet<Position> = [Position::new(1, 1), Position::new(2, 2)].into();
        let board = render_board(&grid, &path);
        assert_eq!(board, " x  _  _ \n _  o  _ \n _  _  _ ");
    }
}
