use glam::IVec2;

use crate::direction::Direction;
use crate::entity::ghost::GhostType;
use crate::entity::item::ItemKind;

/// Commands an input adapter may issue. These are the only external mutators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    MovePlayer(Direction),
    TogglePause,
    Restart,
}

/// Fire-and-forget signals for audio, score display and other listeners.
///
/// Signals describe what happened during a step; they are not part of the simulation
/// state and nothing in the simulation reads them back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    ItemCollected { kind: ItemKind, cell: IVec2 },
    GhostEaten { ghost: GhostType },
    PlayerDied { lives_left: u8 },
    LevelCompleted { level: u32 },
    GameOver { score: u32 },
    Paused,
    Resumed,
    Restarted,
}

/// A subscriber to [`GameEvent`]s.
pub trait GameListener {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> GameListener for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

impl From<Direction> for GameCommand {
    fn from(direction: Direction) -> Self {
        GameCommand::MovePlayer(direction)
    }
}
