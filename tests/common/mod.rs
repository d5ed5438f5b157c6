#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use glam::IVec2;
use pacman_engine::config::GameConfig;
use pacman_engine::entity::item::Collectibles;
use pacman_engine::events::GameEvent;
use pacman_engine::game::state::GameState;
use pacman_engine::game::Game;
use pacman_engine::map::builder::CorridorMaze;
use pacman_engine::map::{Cell, Grid};
use pacman_engine::random::RandomSource;

/// A random source that replays scripted answers, then falls back to fixed defaults.
#[derive(Debug, Default, Clone)]
pub struct ScriptedRandom {
    chances: VecDeque<bool>,
    indices: VecDeque<usize>,
    default_chance: bool,
}

impl ScriptedRandom {
    /// Never redirects and always picks the first candidate.
    pub fn never() -> Self {
        Self::default()
    }

    /// Every chance roll succeeds.
    pub fn always() -> Self {
        Self {
            default_chance: true,
            ..Self::default()
        }
    }

    pub fn with_chances(mut self, chances: impl IntoIterator<Item = bool>) -> Self {
        self.chances.extend(chances);
        self
    }

    pub fn with_indices(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.indices.extend(indices);
        self
    }
}

impl RandomSource for ScriptedRandom {
    fn chance(&mut self, _p: f64) -> bool {
        self.chances.pop_front().unwrap_or(self.default_chance)
    }

    fn index(&mut self, len: usize) -> usize {
        self.indices.pop_front().unwrap_or(0).min(len.saturating_sub(1))
    }
}

/// A walled `cols` x `rows` box with an all-open interior.
pub fn open_grid(cols: u32, rows: u32) -> Grid {
    let mut grid = Grid::filled(cols, rows, Cell::Wall);
    for y in 1..rows as i32 - 1 {
        for x in 1..cols as i32 - 1 {
            grid.set(IVec2::new(x, y), Cell::Open);
        }
    }
    grid
}

/// Level-one state on `grid` with no collectibles and three lives.
pub fn bare_state(grid: Grid) -> GameState {
    GameState::new(grid, Collectibles::new(), 3).expect("test grid must fit the start layout")
}

/// Wraps `state` in a game that ticks on every refresh, regenerates with the corridor
/// maze and never rolls a redirect.
pub fn game_from(state: GameState) -> Game {
    let config = GameConfig {
        frames_per_tick: 1,
        ..GameConfig::default()
    };
    Game::from_state(state, config, Box::new(CorridorMaze), Box::new(ScriptedRandom::never())).expect("valid test game")
}

/// Subscribes a recorder and returns the shared log it appends to.
pub fn record_events(game: &mut Game) -> Rc<RefCell<Vec<GameEvent>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    game.subscribe(move |event: &GameEvent| sink.borrow_mut().push(*event));
    log
}

/// Moves every ghost to `cell`, keeping homes untouched.
pub fn park_ghosts(state: &mut GameState, cell: IVec2) {
    for ghost in state.ghosts.iter_mut() {
        ghost.body.teleport(cell);
    }
}
