//! Player-versus-world collision resolution.
//!
//! Runs right after the player commits a step. Everything is decided on discrete
//! cells; render positions are never consulted.

use tracing::{debug, info};

use crate::constants::collider::GHOST_TOLERANCE;
use crate::constants::score;
use crate::entity::item::ItemKind;
use crate::events::GameEvent;
use crate::game::state::{GameState, Stage};

/// What the caller has to do after a resolution pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Continue,
    /// Both collectible collections are now empty.
    LevelCleared,
    /// The last life was lost; the state is already frozen.
    GameOver,
}

/// Resolves collectibles and then ghosts against the player's current cell.
///
/// Every ghost is evaluated, so two ghosts sharing the player's cell both resolve.
/// Evaluation stops only once the game has ended.
pub fn resolve(state: &mut GameState, power_ticks: u32, events: &mut Vec<GameEvent>) -> Resolution {
    let cleared = collect_item(state, power_ticks, events);

    if resolve_ghosts(state, events) {
        return Resolution::GameOver;
    }

    if cleared {
        Resolution::LevelCleared
    } else {
        Resolution::Continue
    }
}

/// Picks up whatever lies on the player's cell. Returns `true` if that emptied the level.
fn collect_item(state: &mut GameState, power_ticks: u32, events: &mut Vec<GameEvent>) -> bool {
    let cell = state.pacman.body.cell;
    let Some(kind) = state.items.at(cell) else {
        return false;
    };
    if !state.items.take(kind, cell) {
        return false;
    }

    state.score += kind.score();
    debug!(%kind, ?cell, score = state.score, "Collected item");
    events.push(GameEvent::ItemCollected { kind, cell });

    if kind == ItemKind::PowerPellet {
        for ghost in state.ghosts.iter_mut() {
            ghost.frighten(power_ticks);
        }
        debug!(ticks = power_ticks, "Ghosts are vulnerable");
    }

    state.items.is_empty()
}

/// Returns `true` if the game ended.
fn resolve_ghosts(state: &mut GameState, events: &mut Vec<GameEvent>) -> bool {
    for index in 0..state.ghosts.len() {
        let player = state.pacman.body.cell;
        let distance = state.ghosts[index].body.cell_distance(player);
        if distance.x >= GHOST_TOLERANCE || distance.y >= GHOST_TOLERANCE {
            continue;
        }

        if state.ghosts[index].is_vulnerable() {
            let ghost = &mut state.ghosts[index];
            ghost.reset_to_home();
            state.score += score::GHOST;
            debug!(ghost = %ghost.kind, score = state.score, "Ghost eaten");
            events.push(GameEvent::GhostEaten { ghost: ghost.kind });
            continue;
        }

        state.lives = state.lives.saturating_sub(1);
        info!(ghost = %state.ghosts[index].kind, lives = state.lives, "Player caught");
        events.push(GameEvent::PlayerDied { lives_left: state.lives });

        if state.lives == 0 {
            state.stage = Stage::GameOver;
            state.final_score = Some(state.score);
            info!(score = state.score, level = state.level, "Game over");
            events.push(GameEvent::GameOver { score: state.score });
            return true;
        }

        state.reset_positions();
    }
    false
}
