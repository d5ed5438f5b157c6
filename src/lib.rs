//! Grid-based Pac-Man simulation core.

pub mod app;
pub mod config;
pub mod constants;
pub mod direction;
pub mod entity;
pub mod error;
pub mod events;
pub mod formatter;
pub mod game;
pub mod logging;
pub mod map;
pub mod modulation;
pub mod random;
pub mod render;
