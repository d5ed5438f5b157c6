use glam::IVec2;
use tracing::trace;

use crate::constants::animation::MOUTH_TICK_STEP;
use crate::direction::Direction;
use crate::entity::Body;
use crate::map::Grid;

/// The player-controlled entity.
///
/// Input only ever writes [`Pacman::desired`]; the turn is taken on the first tick
/// where the cell in that direction is open, so a turn pressed slightly early is
/// honoured exactly when the corridor opens.
#[derive(Debug, Clone, PartialEq)]
pub struct Pacman {
    pub body: Body,
    /// Buffered direction, last write wins.
    pub desired: Direction,
    /// Mouth animation phase, in radians. Cosmetic only.
    pub mouth_phase: f32,
    pub mouth_open: bool,
}

impl Pacman {
    pub fn new(start: IVec2) -> Self {
        Self {
            body: Body::new(start, Direction::Right),
            desired: Direction::Right,
            mouth_phase: 0.0,
            mouth_open: true,
        }
    }

    /// Returns to `start` facing right, with no lag and no buffered turn.
    pub fn reset(&mut self, start: IVec2) {
        self.body.teleport(start);
        self.body.facing = Direction::Right;
        self.body.moving = false;
        self.desired = Direction::Right;
    }

    /// Advances the mouth animation. The mouth is open while `sin(phase) > 0`.
    pub fn animate(&mut self, step: f32) {
        self.mouth_phase += step;
        self.mouth_open = self.mouth_phase.sin() > 0.0;
    }

    /// Runs one logical tick of movement. Returns whether the player changed cells.
    pub fn step(&mut self, grid: &Grid) -> bool {
        self.animate(MOUTH_TICK_STEP);

        if self.desired != self.body.facing && grid.is_open(self.body.ahead(self.desired)) {
            trace!(from = %self.body.facing, to = %self.desired, cell = ?self.body.cell, "Buffered turn taken");
            self.body.facing = self.desired;
        }

        let moved = self.body.try_advance(grid);
        self.body.moving = moved;
        if moved {
            trace!(cell = ?self.body.cell, "Player moved");
        }
        moved
    }
}
