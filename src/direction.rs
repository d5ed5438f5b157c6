use glam::IVec2;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// One of the four grid directions an entity can face or move in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in the order used when collecting candidate turns.
    pub const DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn as_ivec2(&self) -> IVec2 {
        (*self).into()
    }

    /// The cell one step from `cell` in this direction.
    pub fn step(&self, cell: IVec2) -> IVec2 {
        cell + self.as_ivec2()
    }
}

impl From<Direction> for IVec2 {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => -IVec2::Y,
            Direction::Down => IVec2::Y,
            Direction::Left => -IVec2::X,
            Direction::Right => IVec2::X,
        }
    }
}
