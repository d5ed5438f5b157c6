//! Headless frame driver: runs the simulation at 60 Hz with a random autopilot.

use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::constants::LOOP_TIME;
use crate::direction::Direction;
use crate::events::GameEvent;
use crate::game::Game;
use crate::random::{RandomSource, SeededRandom};
use crate::render;

/// Chance per refresh that the autopilot presses a new direction.
const AUTOPILOT_TURN_CHANCE: f64 = 0.05;

/// Options for the demo loop.
#[derive(Debug, Clone, Copy)]
pub struct DemoOptions {
    /// Stop after this many refreshes.
    pub frame_limit: u64,
    /// Print the board every this many refreshes; zero never prints.
    pub print_every: u64,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            frame_limit: 60 * 60,
            print_every: 30,
        }
    }
}

pub struct App {
    game: Game,
    pilot: SeededRandom,
    options: DemoOptions,
    frames: u64,
    last_frame: Instant,
}

impl App {
    pub fn new(config: GameConfig, options: DemoOptions) -> Result<Self> {
        let pilot = SeededRandom::from_seed(config.seed.map(|seed| seed.wrapping_add(1)));
        let game = Game::new(config)?;
        Ok(Self {
            game,
            pilot,
            options,
            frames: 0,
            last_frame: Instant::now(),
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs one refresh. Returns `false` once the loop should stop.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();

        if self.pilot.chance(AUTOPILOT_TURN_CHANCE) {
            let direction = Direction::DIRECTIONS[self.pilot.index(Direction::DIRECTIONS.len())];
            self.game.set_direction(direction);
        }

        let dt = self.last_frame.elapsed().as_secs_f32();
        self.last_frame = Instant::now();
        self.game.frame(dt);
        self.frames += 1;

        for event in self.game.drain_events() {
            debug!(?event, "Game event");
            if let GameEvent::LevelCompleted { level } = event {
                self.game.dump_grid();
                info!(level, "Autopilot cleared a level");
            }
        }

        if self.options.print_every > 0 && self.frames % self.options.print_every == 0 {
            println!("{}", render::render(self.game.state()));
        }

        if self.game.state().is_game_over() {
            println!("{}", render::status_line(self.game.state()));
            return false;
        }
        if self.frames >= self.options.frame_limit {
            info!(frames = self.frames, "Frame limit reached");
            return false;
        }

        if start.elapsed() < LOOP_TIME {
            let time = LOOP_TIME.saturating_sub(start.elapsed());
            if time != Duration::ZERO {
                spin_sleep::sleep(time);
            }
        } else {
            warn!("Game loop behind schedule by: {:?}", start.elapsed() - LOOP_TIME);
        }

        true
    }
}
