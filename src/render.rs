//! A plain-text renderer for the simulation snapshot.
//!
//! Draws from render positions, so interpolation lag is visible as entities
//! lagging a cell behind their logical position.

use glam::IVec2;
use thousands::Separable;

use crate::entity::ghost::{Ghost, GhostType};
use crate::entity::item::ItemKind;
use crate::game::state::{GameState, Stage};
use crate::map::Cell;

/// Renders the status line followed by the board.
pub fn render(state: &GameState) -> String {
    let mut out = status_line(state);
    out.push('\n');

    let player = state.pacman.body.render.round().as_ivec2();
    for y in 0..state.grid.rows() as i32 {
        for x in 0..state.grid.cols() as i32 {
            let cell = IVec2::new(x, y);
            out.push(glyph(state, cell, player));
        }
        out.push('\n');
    }
    out
}

/// `Score 12,340  Lives 2  Level 3`, with the stage appended when not playing.
pub fn status_line(state: &GameState) -> String {
    let mut line = format!(
        "Score {}  Lives {}  Level {}",
        state.score.separate_with_commas(),
        state.lives,
        state.level
    );
    match state.stage {
        Stage::Playing => {}
        Stage::Paused => line.push_str("  [PAUSED]"),
        Stage::GameOver => {
            let score = state.final_score.unwrap_or(state.score);
            line.push_str(&format!("  [GAME OVER: {}]", score.separate_with_commas()));
        }
    }
    line
}

fn glyph(state: &GameState, cell: IVec2, player: IVec2) -> char {
    if cell == player {
        return if state.pacman.mouth_open { 'C' } else { 'O' };
    }
    if let Some(ghost) = state.ghosts.iter().find(|g| g.body.render.round().as_ivec2() == cell) {
        return ghost_glyph(ghost);
    }
    match state.items.at(cell) {
        Some(ItemKind::Pellet) => return '.',
        Some(ItemKind::PowerPellet) => return 'o',
        None => {}
    }
    match state.grid.get(cell) {
        Some(Cell::Open) => ' ',
        _ => '#',
    }
}

/// Ghost initial, lowercase while vulnerable and `~` while the vulnerable timer flashes.
fn ghost_glyph(ghost: &Ghost) -> char {
    if ghost.is_flashing() {
        return '~';
    }
    let initial = match ghost.kind {
        GhostType::Rose => 'R',
        GhostType::Lilac => 'L',
        GhostType::Mint => 'M',
        GhostType::Peach => 'P',
    };
    if ghost.is_vulnerable() {
        initial.to_ascii_lowercase()
    } else {
        initial
    }
}
