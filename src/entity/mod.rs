//! Movable entities and the collectibles they interact with.

pub mod ghost;
pub mod item;
pub mod pacman;

use glam::{IVec2, Vec2};

use crate::constants::collider::ENTITY_HALF_WIDTH;
use crate::direction::Direction;
use crate::map::Grid;

/// Position state shared by every movable entity.
///
/// `cell` is the authoritative integer grid coordinate. `render` trails it through
/// exponential interpolation and exists only for presentation; no movement or
/// collision decision ever reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub cell: IVec2,
    pub render: Vec2,
    pub facing: Direction,
    pub moving: bool,
}

impl Body {
    pub fn new(cell: IVec2, facing: Direction) -> Self {
        Self {
            cell,
            render: cell.as_vec2(),
            facing,
            moving: false,
        }
    }

    /// The cell one step ahead in `direction`.
    pub fn ahead(&self, direction: Direction) -> IVec2 {
        direction.step(self.cell)
    }

    /// Commits a single step in `facing` if the target cell is open.
    ///
    /// Returns whether the move happened. A blocked step leaves the cell untouched;
    /// there is never partial progress.
    pub fn try_advance(&mut self, grid: &Grid) -> bool {
        let target = self.ahead(self.facing);
        if grid.is_open(target) {
            self.cell = target;
            true
        } else {
            false
        }
    }

    /// Moves the entity instantly, collapsing any interpolation lag.
    pub fn teleport(&mut self, cell: IVec2) {
        self.cell = cell;
        self.render = cell.as_vec2();
    }

    /// Collapses the render position onto the discrete cell.
    pub fn snap_render(&mut self) {
        self.render = self.cell.as_vec2();
    }

    /// Moves the render position a fraction `rate` of the way to the cell.
    pub fn interpolate(&mut self, rate: f32) {
        let target = self.cell.as_vec2();
        self.render += (target - self.render) * rate.clamp(0.0, 1.0);
    }

    /// Whether the render square sits entirely inside open cells.
    ///
    /// Render coordinates name a cell's top-left corner, so the square is centred half a
    /// cell further in.
    pub fn render_is_safe(&self, grid: &Grid) -> bool {
        grid.is_safe_position(self.render + Vec2::splat(0.5), ENTITY_HALF_WIDTH)
    }

    /// Snaps the render position back if it drifted into a wall. Returns whether it did.
    pub fn settle_render(&mut self, grid: &Grid) -> bool {
        if self.render_is_safe(grid) {
            false
        } else {
            self.snap_render();
            true
        }
    }

    /// Per-axis distance between the discrete cells of two bodies.
    pub fn cell_distance(&self, other: IVec2) -> Vec2 {
        (self.cell - other).abs().as_vec2()
    }
}

/// Converts a per-60Hz-frame decay rate into the rate for a frame of `dt` seconds.
///
/// `1 - (1 - rate)^(dt / FRAME_SECONDS)`: a 60 Hz frame gets exactly `rate`, two half-length
/// frames together decay as much as one full frame.
pub fn frame_rate(rate: f32, dt: f32) -> f32 {
    if dt <= 0.0 {
        return 0.0;
    }
    let rate = rate.clamp(0.0, 1.0);
    1.0 - (1.0 - rate).powf(dt / crate::constants::FRAME_SECONDS)
}
