//! Centralized error types for the simulation.
//!
//! Errors only appear at construction boundaries (configuration, grid parsing,
//! grid generation). A running simulation never fails; invalid states are
//! corrected in place and logged instead.

/// Main error type for the game.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Map parsing error: {0}")]
    MapParse(#[from] ParseError),

    #[error("Map error: {0}")]
    Map(#[from] MapError),
}

/// Errors produced while loading or validating [`crate::config::GameConfig`].
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Grid of {cols}x{rows} cells is too small (minimum {min}x{min})")]
    GridTooSmall { cols: u32, rows: u32, min: u32 },

    #[error("Grid of {cols}x{rows} cells is too large (maximum {max}x{max})")]
    GridTooLarge { cols: u32, rows: u32, max: u32 },

    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error("{name} must be within {range}, got {value}")]
    OutOfRange {
        name: &'static str,
        range: &'static str,
        value: f64,
    },
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        ConfigError::Load(Box::new(error))
    }
}

/// Error type for ASCII grid parsing.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown character in grid: {0}")]
    UnknownCharacter(char),
    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRow { row: usize, found: usize, expected: usize },
    #[error("Grid has no rows")]
    Empty,
}

/// Errors related to grid generation.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum MapError {
    #[error("Grid provider returned {found_cols}x{found_rows}, expected {cols}x{rows}")]
    DimensionMismatch {
        cols: u32,
        rows: u32,
        found_cols: u32,
        found_rows: u32,
    },
    #[error("Cell {0},{1} must be open")]
    ClosedCell(i32, i32),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
