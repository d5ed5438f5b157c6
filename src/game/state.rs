use glam::IVec2;
use smallvec::SmallVec;
use tracing::warn;

use crate::constants::PLAYER_START;
use crate::entity::ghost::{Ghost, GhostType};
use crate::entity::item::Collectibles;
use crate::entity::pacman::Pacman;
use crate::error::MapError;
use crate::map::Grid;

/// The high-level lifecycle stage of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Playing,
    /// Logical ticks and interpolation are frozen; nothing is reset.
    Paused,
    /// Terminal until restarted.
    GameOver,
}

/// The complete simulation state.
///
/// This is also the snapshot handed to renderers: the grid, collectibles, entities,
/// counters and stage are all here, and a renderer only ever borrows it immutably.
#[derive(Debug, Clone)]
pub struct GameState {
    pub grid: Grid,
    pub items: Collectibles,
    pub pacman: Pacman,
    pub ghosts: SmallVec<[Ghost; 4]>,
    pub score: u32,
    pub lives: u8,
    pub level: u32,
    pub stage: Stage,
    /// Score recorded when the game ended.
    pub final_score: Option<u32>,
    /// Logical ticks simulated since the last restart.
    pub ticks: u64,
}

impl GameState {
    /// Builds level-one state on `grid` with the player at its start cell and every
    /// ghost in its home slot.
    ///
    /// Fails if the player start or any home slot is not an open cell.
    pub fn new(grid: Grid, items: Collectibles, lives: u8) -> Result<Self, MapError> {
        check_layout(&grid)?;
        let center = grid.center();
        Ok(Self {
            pacman: Pacman::new(PLAYER_START),
            ghosts: GhostType::ALL.iter().map(|&kind| Ghost::new(kind, center)).collect(),
            grid,
            items,
            score: 0,
            lives,
            level: 1,
            stage: Stage::Playing,
            final_score: None,
            ticks: 0,
        })
    }

    pub fn is_running(&self) -> bool {
        self.stage == Stage::Playing
    }

    pub fn is_paused(&self) -> bool {
        self.stage == Stage::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.stage == Stage::GameOver
    }

    /// Puts the player back at the start and every ghost back home in normal mode.
    /// Score, lives and level are untouched.
    pub fn reset_positions(&mut self) {
        self.pacman.reset(PLAYER_START);
        let center = self.grid.center();
        for ghost in self.ghosts.iter_mut() {
            ghost.rehome(center);
            ghost.reset_to_home();
        }
    }

    /// Corrects any entity whose discrete cell is not open, or whose render position
    /// has drifted into a wall. Returns the number of corrections made.
    pub fn heal_positions(&mut self) -> usize {
        let mut corrections = 0;

        if !self.grid.is_open(self.pacman.body.cell) {
            let fallback = self.fallback_cell(PLAYER_START);
            warn!(cell = ?self.pacman.body.cell, ?fallback, "Player in invalid position, correcting");
            self.pacman.body.teleport(fallback);
            corrections += 1;
        }

        for index in 0..self.ghosts.len() {
            let (cell, home, kind) = {
                let ghost = &self.ghosts[index];
                (ghost.body.cell, ghost.home, ghost.kind)
            };
            if !self.grid.is_open(cell) {
                let fallback = self.fallback_cell(home);
                warn!(ghost = %kind, ?cell, ?fallback, "Ghost in invalid position, correcting");
                self.ghosts[index].body.teleport(fallback);
                corrections += 1;
            }
        }

        if self.pacman.body.settle_render(&self.grid) {
            corrections += 1;
        }
        for ghost in self.ghosts.iter_mut() {
            if ghost.body.settle_render(&self.grid) {
                corrections += 1;
            }
        }

        corrections
    }

    /// `preferred` if it is open, otherwise the first open cell of the grid.
    fn fallback_cell(&self, preferred: IVec2) -> IVec2 {
        if self.grid.is_open(preferred) {
            preferred
        } else {
            self.grid.open_cells().next().unwrap_or(preferred)
        }
    }

    /// Text dump of the grid: `#` wall, `.` open, `P` player, `G` ghost.
    pub fn debug_grid(&self) -> String {
        let mut out = String::with_capacity(((self.grid.cols() + 1) * self.grid.rows()) as usize);
        for y in 0..self.grid.rows() as i32 {
            for x in 0..self.grid.cols() as i32 {
                let cell = IVec2::new(x, y);
                let c = if cell == self.pacman.body.cell {
                    'P'
                } else if self.ghosts.iter().any(|g| g.body.cell == cell) {
                    'G'
                } else if self.grid.is_open(cell) {
                    '.'
                } else {
                    '#'
                };
                out.push(c);
            }
            out.push('\n');
        }
        out
    }
}

/// Checks that the player start and all ghost home slots are open.
pub fn check_layout(grid: &Grid) -> Result<(), MapError> {
    let center = grid.center();
    std::iter::once(PLAYER_START)
        .chain(GhostType::ALL.iter().map(|kind| kind.home(center)))
        .find(|&cell| !grid.is_open(cell))
        .map_or(Ok(()), |cell| Err(MapError::ClosedCell(cell.x, cell.y)))
}
