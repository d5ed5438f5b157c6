//! Grid providers: the procedural corridor maze and an ASCII parser for fixed layouts.

use glam::IVec2;
use tracing::debug;

use crate::error::ParseError;
use crate::map::{Cell, Grid};

/// Supplies a fresh occupancy grid at the start of every level.
pub trait GridProvider {
    /// Builds a `cols` x `rows` grid. The result must have exactly those dimensions.
    fn generate(&self, cols: u32, rows: u32) -> Grid;
}

impl<F> GridProvider for F
where
    F: Fn(u32, u32) -> Grid,
{
    fn generate(&self, cols: u32, rows: u32) -> Grid {
        self(cols, rows)
    }
}

/// A lattice of straight corridors inside an open perimeter ring.
///
/// Layout, with `cols` x `rows` cells:
/// - everything starts as wall;
/// - row 1, row `rows - 2`, column 1 and column `cols - 2` form the perimeter corridor;
/// - every third row from row 4 and every fourth column from column 4 is a corridor;
/// - cells at `(3 + 4i, 2 + 3j)` open short connections between corridors;
/// - a 2x2 block at the player start and a 5x3 block around the centre are always open.
#[derive(Debug, Default, Clone, Copy)]
pub struct CorridorMaze;

impl GridProvider for CorridorMaze {
    fn generate(&self, cols: u32, rows: u32) -> Grid {
        let mut grid = Grid::filled(cols, rows, Cell::Wall);
        let (w, h) = (cols as i32, rows as i32);
        if w < 3 || h < 3 {
            return grid;
        }

        for x in 1..w - 1 {
            grid.set(IVec2::new(x, 1), Cell::Open);
            grid.set(IVec2::new(x, h - 2), Cell::Open);
        }
        for y in 1..h - 1 {
            grid.set(IVec2::new(1, y), Cell::Open);
            grid.set(IVec2::new(w - 2, y), Cell::Open);
        }

        for y in (4..h - 2).step_by(3) {
            for x in 1..w - 1 {
                grid.set(IVec2::new(x, y), Cell::Open);
            }
        }
        for x in (4..w - 2).step_by(4) {
            for y in 1..h - 1 {
                grid.set(IVec2::new(x, y), Cell::Open);
            }
        }

        for y in (2..h - 2).step_by(3) {
            for x in (3..w - 2).step_by(4) {
                grid.set(IVec2::new(x, y), Cell::Open);
            }
        }

        for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
            grid.set(IVec2::new(x, y), Cell::Open);
        }

        let center = grid.center();
        for y in center.y - 1..=center.y + 1 {
            for x in center.x - 2..=center.x + 2 {
                grid.set(IVec2::new(x, y), Cell::Open);
            }
        }

        debug!(cols, rows, open = grid.open_cells().count(), "Corridor maze generated");
        grid
    }
}

impl Grid {
    /// Parses a grid from rows of characters: `#` is a wall, `.` or a space is open.
    ///
    /// Every row must have the same width.
    pub fn parse(rows: &[&str]) -> Result<Grid, ParseError> {
        let expected = rows.first().ok_or(ParseError::Empty)?.chars().count();
        let mut grid = Grid::filled(expected as u32, rows.len() as u32, Cell::Wall);

        for (y, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != expected {
                return Err(ParseError::RaggedRow { row: y, found, expected });
            }
            for (x, character) in line.chars().enumerate() {
                let cell = match character {
                    '#' => Cell::Wall,
                    '.' | ' ' => Cell::Open,
                    c => return Err(ParseError::UnknownCharacter(c)),
                };
                grid.set(IVec2::new(x as i32, y as i32), cell);
            }
        }

        Ok(grid)
    }
}
