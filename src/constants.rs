//! This module contains all the constants used in the game.
//!
//! Most of these are defaults; the values actually in effect live in [`crate::config::GameConfig`].

use std::time::Duration;

use glam::IVec2;

/// Target refresh rate of the frame driver.
pub const FRAMES_PER_SECOND: u32 = 60;
/// Duration of a single display refresh, in seconds.
pub const FRAME_SECONDS: f32 = 1.0 / FRAMES_PER_SECOND as f32;
pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The size of each cell, in pixels.
pub const CELL_SIZE: u32 = 30;
/// Default viewport, in pixels. The grid is `floor(viewport / CELL_SIZE)` cells.
pub const VIEWPORT_WIDTH: u32 = 600;
pub const VIEWPORT_HEIGHT: u32 = 450;
/// Smallest grid that still fits the corridors and the ghost home area.
pub const MIN_GRID_SIZE: u32 = 7;
/// Largest grid accepted along either axis.
pub const MAX_GRID_SIZE: u32 = 1024;

/// Refreshes per logical tick (60 FPS / 10 = 6 moves per second).
pub const FRAMES_PER_TICK: u32 = 10;

/// The player's start cell, also the fallback for an invalid player position.
pub const PLAYER_START: IVec2 = IVec2::new(1, 1);
/// Collectibles are never placed within this many cells (per axis) of the player start.
pub const START_SAFE_RADIUS: i32 = 2;

pub const STARTING_LIVES: u8 = 3;

/// Score values awarded by the collision resolver.
pub mod score {
    pub const PELLET: u32 = 10;
    pub const POWER_PELLET: u32 = 50;
    pub const GHOST: u32 = 200;
}

/// Vulnerable mode duration in logical ticks.
pub const POWER_DURATION_TICKS: u32 = 300;

/// Chance per logical tick that a ghost re-rolls its direction after a successful move.
pub const GHOST_REDIRECT_CHANCE: f64 = 0.1;

/// Ghost speed progression across levels.
pub mod speed {
    pub const GHOST_BASE: f32 = 1.0;
    pub const GHOST_LEVEL_STEP: f32 = 0.1;
    pub const GHOST_MAX: f32 = 2.0;
}

/// Geometry used by the movement validator and collision resolver, in grid units.
pub mod collider {
    /// Half the side of the square an entity occupies when checking render positions.
    pub const ENTITY_HALF_WIDTH: f32 = 0.4;
    /// Per-axis distance under which the player and a ghost touch.
    pub const GHOST_TOLERANCE: f32 = 0.8;
}

/// Cosmetic animation and interpolation constants.
pub mod animation {
    /// Mouth phase advance per logical tick.
    pub const MOUTH_TICK_STEP: f32 = 0.4;
    /// Mouth phase advance per refresh.
    pub const MOUTH_FRAME_STEP: f32 = 0.25;

    /// Exponential-decay rates per 60 Hz frame.
    pub const PLAYER_MOVING_RATE: f32 = 0.35;
    pub const PLAYER_IDLE_RATE: f32 = 0.2;
    pub const GHOST_MOVING_RATE: f32 = 0.3;
    pub const GHOST_IDLE_RATE: f32 = 0.18;
    /// Upper bound for speed-scaled ghost rates.
    pub const MAX_RATE: f32 = 0.9;

    /// Vulnerable ghosts start flashing when fewer than this many ticks remain.
    pub const VULNERABLE_FLASH_TICKS: u32 = 100;
}

/// Collectible placement densities.
pub mod placement {
    pub const POWER_PELLET_CHANCE: f64 = 0.05;
    pub const PELLET_CHANCE: f64 = 0.8;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_time() {
        let expected_nanos = (1_000_000_000.0 / 60.0) as u64;
        assert_eq!(LOOP_TIME.as_nanos() as u64, expected_nanos);
    }

    #[test]
    fn test_default_grid_dimensions() {
        assert_eq!(VIEWPORT_WIDTH / CELL_SIZE, 20);
        assert_eq!(VIEWPORT_HEIGHT / CELL_SIZE, 15);
    }

    #[test]
    fn test_rates_are_decays() {
        for rate in [
            animation::PLAYER_MOVING_RATE,
            animation::PLAYER_IDLE_RATE,
            animation::GHOST_MOVING_RATE,
            animation::GHOST_IDLE_RATE,
            animation::MAX_RATE,
        ] {
            assert!(rate > 0.0 && rate < 1.0);
        }
    }

    #[test]
    fn test_ghost_hitbox_is_sub_cell() {
        assert!(collider::GHOST_TOLERANCE < 1.0);
        assert!(collider::ENTITY_HALF_WIDTH < 0.5);
    }
}
