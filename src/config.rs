use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::constants::{self, animation, placement};
use crate::entity::item::Densities;
use crate::error::ConfigError;

/// Tunable parameters of the simulation.
///
/// Loaded from defaults merged with `PACMAN_`-prefixed environment variables
/// (for example `PACMAN_FRAMES_PER_TICK=6`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Viewport size in pixels; the grid is `floor(viewport / cell_size)` cells.
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub cell_size: u32,
    /// Display refreshes per logical tick.
    pub frames_per_tick: u32,
    /// Vulnerable mode duration, in logical ticks.
    pub power_duration_ticks: u32,
    pub starting_lives: u8,
    /// Chance per tick that a ghost re-rolls its direction after moving.
    pub redirect_chance: f64,
    pub power_pellet_density: f64,
    pub pellet_density: f64,
    /// Interpolation decay per 60 Hz frame.
    pub player_moving_rate: f32,
    pub player_idle_rate: f32,
    pub ghost_moving_rate: f32,
    pub ghost_idle_rate: f32,
    /// Fixed RNG seed; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport_width: constants::VIEWPORT_WIDTH,
            viewport_height: constants::VIEWPORT_HEIGHT,
            cell_size: constants::CELL_SIZE,
            frames_per_tick: constants::FRAMES_PER_TICK,
            power_duration_ticks: constants::POWER_DURATION_TICKS,
            starting_lives: constants::STARTING_LIVES,
            redirect_chance: constants::GHOST_REDIRECT_CHANCE,
            power_pellet_density: placement::POWER_PELLET_CHANCE,
            pellet_density: placement::PELLET_CHANCE,
            player_moving_rate: animation::PLAYER_MOVING_RATE,
            player_idle_rate: animation::PLAYER_IDLE_RATE,
            ghost_moving_rate: animation::GHOST_MOVING_RATE,
            ghost_idle_rate: animation::GHOST_IDLE_RATE,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads defaults overridden by `PACMAN_*` environment variables, then validates.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Figment::from(Serialized::defaults(GameConfig::default())).merge(Env::prefixed("PACMAN_")))
    }

    /// Extracts and validates a configuration from any figment.
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: GameConfig = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Grid size in cells.
    pub fn grid_size(&self) -> (u32, u32) {
        let cell = self.cell_size.max(1);
        (self.viewport_width / cell, self.viewport_height / cell)
    }

    pub fn densities(&self) -> Densities {
        Densities {
            power_pellet: self.power_pellet_density,
            pellet: self.pellet_density,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::Zero("cell_size"));
        }
        if self.frames_per_tick == 0 {
            return Err(ConfigError::Zero("frames_per_tick"));
        }
        if self.starting_lives == 0 {
            return Err(ConfigError::Zero("starting_lives"));
        }

        let (cols, rows) = self.grid_size();
        if cols < constants::MIN_GRID_SIZE || rows < constants::MIN_GRID_SIZE {
            return Err(ConfigError::GridTooSmall {
                cols,
                rows,
                min: constants::MIN_GRID_SIZE,
            });
        }
        if cols > constants::MAX_GRID_SIZE || rows > constants::MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge {
                cols,
                rows,
                max: constants::MAX_GRID_SIZE,
            });
        }

        for (name, value) in [
            ("redirect_chance", self.redirect_chance),
            ("power_pellet_density", self.power_pellet_density),
            ("pellet_density", self.pellet_density),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::OutOfRange {
                    name,
                    range: "[0, 1]",
                    value,
                });
            }
        }

        for (name, value) in [
            ("player_moving_rate", self.player_moving_rate),
            ("player_idle_rate", self.player_idle_rate),
            ("ghost_moving_rate", self.ghost_moving_rate),
            ("ghost_idle_rate", self.ghost_idle_rate),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::OutOfRange {
                    name,
                    range: "(0, 1]",
                    value: value as f64,
                });
            }
        }

        Ok(())
    }
}
