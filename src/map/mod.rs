//! This module defines the occupancy grid and the movement validator built on it.

pub mod builder;

use glam::{IVec2, Vec2};
use smallvec::SmallVec;

use crate::direction::Direction;

/// The state of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Open,
    Wall,
}

/// A fixed-size 2D occupancy grid, stored row-major.
///
/// The grid is produced by a [`builder::GridProvider`] at level start and is only
/// read by the simulation afterwards. Its dimensions never change mid-level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cols: u32,
    rows: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid with every cell set to `cell`.
    pub fn filled(cols: u32, rows: u32, cell: Cell) -> Self {
        Self {
            cols,
            rows,
            cells: vec![cell; cols as usize * rows as usize],
        }
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// The centre cell, `(floor(cols / 2), floor(rows / 2))`.
    pub fn center(&self) -> IVec2 {
        IVec2::new((self.cols / 2) as i32, (self.rows / 2) as i32)
    }

    fn index(&self, cell: IVec2) -> Option<usize> {
        if cell.x < 0 || cell.y < 0 || cell.x >= self.cols as i32 || cell.y >= self.rows as i32 {
            return None;
        }
        Some(cell.y as usize * self.cols as usize + cell.x as usize)
    }

    /// Returns the cell at the given coordinates, or `None` out of bounds.
    pub fn get(&self, cell: IVec2) -> Option<Cell> {
        self.index(cell).and_then(|i| self.cells.get(i).copied())
    }

    /// Sets the cell at the given coordinates. Returns `false` out of bounds.
    pub fn set(&mut self, cell: IVec2, value: Cell) -> bool {
        match self.index(cell) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// Whether an entity may occupy the integer cell. Out of bounds is never open.
    pub fn is_open(&self, cell: IVec2) -> bool {
        matches!(self.get(cell), Some(Cell::Open))
    }

    /// Whether an entity may occupy the cell containing `point`.
    ///
    /// Coordinates are floored, so a fractional query answers for its containing cell.
    pub fn can_occupy(&self, point: Vec2) -> bool {
        if !point.is_finite() {
            return false;
        }
        self.is_open(point.floor().as_ivec2())
    }

    /// Whether a square of the given half-width centred on `center` lies entirely
    /// in open cells. Only ever used to catch render positions drifting into walls.
    ///
    /// `center` is the middle of the entity's square, i.e. `render + 0.5`, since
    /// render coordinates name a cell's top-left corner. See [`Body::render_is_safe`].
    ///
    /// [`Body::render_is_safe`]: crate::entity::Body::render_is_safe
    pub fn is_safe_position(&self, center: Vec2, half_width: f32) -> bool {
        [
            Vec2::new(-half_width, -half_width),
            Vec2::new(half_width, -half_width),
            Vec2::new(-half_width, half_width),
            Vec2::new(half_width, half_width),
        ]
        .into_iter()
        .all(|corner| self.can_occupy(center + corner))
    }

    /// Iterates over every open cell in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = IVec2> + '_ {
        let cols = self.cols.max(1) as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Open)
            .map(move |(i, _)| IVec2::new((i % cols) as i32, (i / cols) as i32))
    }

    /// Directions whose single step from `cell` lands on an open cell.
    pub fn open_directions(&self, cell: IVec2) -> SmallVec<[Direction; 4]> {
        Direction::DIRECTIONS
            .into_iter()
            .filter(|direction| self.is_open(direction.step(cell)))
            .collect()
    }
}
