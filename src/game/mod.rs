//! The simulation context: owns the state and drives both cadences.

pub mod collision;
pub mod state;

use circular_buffer::CircularBuffer;
use tracing::{debug, info, trace, warn};

use crate::config::GameConfig;
use crate::constants::animation::{MAX_RATE, MOUTH_FRAME_STEP};
use crate::constants::{FRAME_SECONDS, PLAYER_START, START_SAFE_RADIUS};
use crate::direction::Direction;
use crate::entity::frame_rate;
use crate::entity::item::Collectibles;
use crate::error::{GameResult, MapError};
use crate::events::{GameCommand, GameEvent, GameListener};
use crate::formatter;
use crate::map::builder::{CorridorMaze, GridProvider};
use crate::map::Grid;
use crate::modulation::TickGate;
use crate::random::{RandomSource, SeededRandom};

use self::collision::Resolution;
use self::state::{check_layout, GameState, Stage};

/// Events kept for [`Game::drain_events`]; the oldest are dropped past this.
const PENDING_EVENTS: usize = 256;

/// The single owner of the simulation.
///
/// An external frame driver calls [`Game::update`] (or [`Game::frame`]) once per display
/// refresh. Input adapters only use [`Game::set_direction`], [`Game::toggle_pause`] and
/// [`Game::restart`]; renderers only borrow [`Game::state`].
pub struct Game {
    state: GameState,
    config: GameConfig,
    gate: TickGate,
    rng: Box<dyn RandomSource>,
    provider: Box<dyn GridProvider>,
    listeners: Vec<Box<dyn GameListener>>,
    pending: CircularBuffer<PENDING_EVENTS, GameEvent>,
}

impl Game {
    /// Creates a game on the corridor maze, seeded from `config.seed`.
    pub fn new(config: GameConfig) -> GameResult<Self> {
        let rng = SeededRandom::from_seed(config.seed);
        Self::with_parts(config, Box::new(CorridorMaze), Box::new(rng))
    }

    /// Creates a game with a custom grid provider and random source.
    pub fn with_parts(config: GameConfig, provider: Box<dyn GridProvider>, mut rng: Box<dyn RandomSource>) -> GameResult<Self> {
        config.validate()?;

        let (cols, rows) = config.grid_size();
        let grid = provider.generate(cols, rows);
        validate_grid(&grid, cols, rows)?;

        let items = Collectibles::populate(&grid, PLAYER_START, START_SAFE_RADIUS, config.densities(), rng.as_mut());
        let state = GameState::new(grid, items, config.starting_lives)?;
        info!(cols, rows, items = state.items.len(), "Game created");

        Ok(Self::assemble(state, config, provider, rng))
    }

    /// Wraps an already prepared state. Later levels keep the state's grid dimensions.
    pub fn from_state(
        state: GameState,
        config: GameConfig,
        provider: Box<dyn GridProvider>,
        rng: Box<dyn RandomSource>,
    ) -> GameResult<Self> {
        config.validate()?;
        check_layout(&state.grid)?;
        Ok(Self::assemble(state, config, provider, rng))
    }

    fn assemble(state: GameState, config: GameConfig, provider: Box<dyn GridProvider>, rng: Box<dyn RandomSource>) -> Self {
        Self {
            gate: TickGate::new(config.frames_per_tick),
            state,
            config,
            rng,
            provider,
            listeners: Vec::new(),
            pending: CircularBuffer::new(),
        }
    }

    /// Read-only snapshot for renderers.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Buffers a turn for the player. Last write wins; ignored after game over.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.state.is_game_over() {
            trace!(%direction, "Ignoring direction after game over");
            return;
        }
        self.state.pacman.desired = direction;
    }

    /// Freezes or resumes ticks and interpolation together. Ignored after game over.
    pub fn toggle_pause(&mut self) {
        let event = match self.state.stage {
            Stage::Playing => {
                self.state.stage = Stage::Paused;
                GameEvent::Paused
            }
            Stage::Paused => {
                self.state.stage = Stage::Playing;
                GameEvent::Resumed
            }
            Stage::GameOver => {
                debug!("Ignoring pause toggle after game over");
                return;
            }
        };
        info!(paused = self.state.is_paused(), "Pause toggled");
        self.dispatch(vec![event]);
    }

    /// Starts over at level one with a fresh grid, full lives and base ghost speed.
    pub fn restart(&mut self) {
        self.state.score = 0;
        self.state.lives = self.config.starting_lives;
        self.state.level = 1;
        self.state.stage = Stage::Playing;
        self.state.final_score = None;
        self.state.ticks = 0;
        for ghost in self.state.ghosts.iter_mut() {
            ghost.reset_speed();
        }
        self.regenerate();
        self.gate.reset();

        info!(lives = self.state.lives, items = self.state.items.len(), "Game restarted");
        self.dispatch(vec![GameEvent::Restarted]);
    }

    /// Applies one input command.
    pub fn command(&mut self, command: GameCommand) {
        match command {
            GameCommand::MovePlayer(direction) => self.set_direction(direction),
            GameCommand::TogglePause => self.toggle_pause(),
            GameCommand::Restart => self.restart(),
        }
    }

    /// One display refresh at the nominal 60 Hz.
    pub fn update(&mut self) {
        self.frame(FRAME_SECONDS);
    }

    /// One display refresh of `dt` seconds.
    ///
    /// Runs a logical tick when the gate opens, then interpolation, then the
    /// position-correction pass. Does nothing while paused or after game over.
    pub fn frame(&mut self, dt: f32) {
        if !self.state.is_running() {
            return;
        }
        if self.gate.next() {
            self.tick();
        }
        self.interpolate(dt);
        self.heal_positions();
    }

    /// Advances the simulation by one logical tick.
    ///
    /// The player moves first and resolves collisions on a successful step, then every
    /// ghost moves. Ghosts stay frozen if the player's step ended the game.
    pub fn tick(&mut self) {
        if !self.state.is_running() {
            return;
        }
        formatter::increment_tick();
        self.state.ticks += 1;

        let mut events = Vec::new();
        if self.state.pacman.step(&self.state.grid) {
            match collision::resolve(&mut self.state, self.config.power_duration_ticks, &mut events) {
                Resolution::Continue | Resolution::GameOver => {}
                Resolution::LevelCleared => self.advance_level(&mut events),
            }
        }

        if !self.state.is_game_over() {
            let redirect_chance = self.config.redirect_chance;
            let GameState { grid, ghosts, .. } = &mut self.state;
            for ghost in ghosts.iter_mut() {
                ghost.step(grid, self.rng.as_mut(), redirect_chance);
            }
        }

        self.heal_positions();
        self.dispatch(events);
    }

    /// Moves every render position toward its discrete cell for a refresh of `dt` seconds.
    ///
    /// Ghost rates scale with their speed, bounded below one. Frozen while paused.
    pub fn interpolate(&mut self, dt: f32) {
        if !self.state.is_running() {
            return;
        }
        let config = &self.config;

        let pacman = &mut self.state.pacman;
        pacman.animate(MOUTH_FRAME_STEP);
        let rate = if pacman.body.moving {
            config.player_moving_rate
        } else {
            config.player_idle_rate
        };
        pacman.body.interpolate(frame_rate(rate, dt));

        for ghost in self.state.ghosts.iter_mut() {
            let base = if ghost.body.moving {
                config.ghost_moving_rate
            } else {
                config.ghost_idle_rate
            };
            let rate = (base * ghost.speed).min(MAX_RATE.max(base));
            ghost.body.interpolate(frame_rate(rate, dt));
        }
    }

    /// Runs the position-correction pass. Returns the number of corrections.
    pub fn heal_positions(&mut self) -> usize {
        self.state.heal_positions()
    }

    /// Registers a listener that sees every event as it is emitted.
    pub fn subscribe<L>(&mut self, listener: L)
    where
        L: GameListener + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Takes every event emitted since the last call, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.pending.drain(..).collect()
    }

    /// Logs the grid with entity markers.
    pub fn dump_grid(&self) {
        debug!("Grid at tick {}:\n{}", self.state.ticks, self.state.debug_grid());
    }

    fn dispatch(&mut self, events: Vec<GameEvent>) {
        for event in events {
            for listener in self.listeners.iter_mut() {
                listener.on_event(&event);
            }
            self.pending.push_back(event);
        }
    }

    fn advance_level(&mut self, events: &mut Vec<GameEvent>) {
        let completed = self.state.level;
        events.push(GameEvent::LevelCompleted { level: completed });

        self.state.level += 1;
        for ghost in self.state.ghosts.iter_mut() {
            ghost.speed_up();
        }
        self.regenerate();

        info!(
            level = self.state.level,
            items = self.state.items.len(),
            score = self.state.score,
            "Level completed"
        );
    }

    /// Replaces the grid and collectibles and puts everyone back at their start.
    fn regenerate(&mut self) {
        let grid = self.next_grid();
        self.state.items = Collectibles::populate(
            &grid,
            PLAYER_START,
            START_SAFE_RADIUS,
            self.config.densities(),
            self.rng.as_mut(),
        );
        self.state.grid = grid;
        self.state.reset_positions();
    }

    /// A fresh grid with the current dimensions, falling back to the corridor maze and
    /// then to the current grid if the provider's output is unusable.
    fn next_grid(&self) -> Grid {
        let (cols, rows) = (self.state.grid.cols(), self.state.grid.rows());

        let grid = self.provider.generate(cols, rows);
        let Err(error) = validate_grid(&grid, cols, rows) else {
            return grid;
        };
        warn!(%error, "Grid provider returned an unusable grid, using the corridor maze");

        let fallback = CorridorMaze.generate(cols, rows);
        if validate_grid(&fallback, cols, rows).is_ok() {
            fallback
        } else {
            warn!(cols, rows, "Corridor maze does not fit, keeping the current grid");
            self.state.grid.clone()
        }
    }
}

/// Checks a provider's grid against the expected size and the fixed start cells.
fn validate_grid(grid: &Grid, cols: u32, rows: u32) -> Result<(), MapError> {
    if grid.cols() != cols || grid.rows() != rows {
        return Err(MapError::DimensionMismatch {
            cols,
            rows,
            found_cols: grid.cols(),
            found_rows: grid.rows(),
        });
    }
    check_layout(grid)
}
