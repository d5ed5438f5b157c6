use glam::IVec2;
use strum_macros::Display;
use tracing::{debug, trace};

use crate::constants::animation::VULNERABLE_FLASH_TICKS;
use crate::constants::speed::{GHOST_BASE, GHOST_LEVEL_STEP, GHOST_MAX};
use crate::direction::Direction;
use crate::entity::Body;
use crate::map::Grid;
use crate::random::RandomSource;

/// The four ghost identities. Each owns a colour, a home slot and a starting facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum GhostType {
    Rose,
    Lilac,
    Mint,
    Peach,
}

impl GhostType {
    pub const ALL: [GhostType; 4] = [GhostType::Rose, GhostType::Lilac, GhostType::Mint, GhostType::Peach];

    /// Body colour as a hex string.
    pub fn color(&self) -> &'static str {
        match self {
            GhostType::Rose => "#E6A8B8",
            GhostType::Lilac => "#B8B8E6",
            GhostType::Mint => "#A8D4C7",
            GhostType::Peach => "#E6C4A8",
        }
    }

    /// Offset of this ghost's home slot from the grid centre.
    pub fn home_offset(&self) -> IVec2 {
        match self {
            GhostType::Rose => IVec2::new(-1, 0),
            GhostType::Lilac => IVec2::ZERO,
            GhostType::Mint => IVec2::new(1, 0),
            GhostType::Peach => IVec2::new(0, -1),
        }
    }

    pub fn initial_facing(&self) -> Direction {
        match self {
            GhostType::Rose => Direction::Up,
            GhostType::Lilac => Direction::Down,
            GhostType::Mint => Direction::Left,
            GhostType::Peach => Direction::Right,
        }
    }

    pub fn home(&self, center: IVec2) -> IVec2 {
        center + self.home_offset()
    }
}

/// The ghost mode state machine.
///
/// `Normal -> Vulnerable` only through a power pellet; `Vulnerable -> Normal` only
/// through timer expiry or being eaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GhostMode {
    Normal,
    Vulnerable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ghost {
    pub kind: GhostType,
    pub body: Body,
    pub mode: GhostMode,
    /// Remaining ticks of the current timed mode.
    pub mode_timer: u32,
    pub home: IVec2,
    /// Presentation speed multiplier; rises with the level.
    pub speed: f32,
}

impl Ghost {
    pub fn new(kind: GhostType, center: IVec2) -> Self {
        let home = kind.home(center);
        Self {
            kind,
            body: Body::new(home, kind.initial_facing()),
            mode: GhostMode::Normal,
            mode_timer: 0,
            home,
            speed: GHOST_BASE,
        }
    }

    pub fn is_vulnerable(&self) -> bool {
        self.mode == GhostMode::Vulnerable
    }

    /// Vulnerable and close to expiring.
    pub fn is_flashing(&self) -> bool {
        self.is_vulnerable() && self.mode_timer <= VULNERABLE_FLASH_TICKS
    }

    pub fn color(&self) -> &'static str {
        self.kind.color()
    }

    /// Enters vulnerable mode with a full timer. An existing timer is overwritten, not extended.
    pub fn frighten(&mut self, ticks: u32) {
        self.mode = GhostMode::Vulnerable;
        self.mode_timer = ticks;
    }

    /// Back to normal mode with no timer.
    pub fn calm(&mut self) {
        self.mode = GhostMode::Normal;
        self.mode_timer = 0;
    }

    /// Returns to the home slot in normal mode.
    pub fn reset_to_home(&mut self) {
        self.body.teleport(self.home);
        self.body.moving = false;
        self.calm();
    }

    /// Moves the home slot, used when a new grid with a different centre arrives.
    pub fn rehome(&mut self, center: IVec2) {
        self.home = self.kind.home(center);
    }

    /// Raises speed by one level step, bounded.
    pub fn speed_up(&mut self) {
        self.speed = (self.speed + GHOST_LEVEL_STEP).min(GHOST_MAX);
    }

    pub fn reset_speed(&mut self) {
        self.speed = GHOST_BASE;
    }

    /// Counts the mode timer down. Returns `true` if vulnerable mode just expired.
    pub fn tick_mode(&mut self) -> bool {
        if self.mode_timer == 0 {
            return false;
        }
        self.mode_timer -= 1;
        if self.mode_timer == 0 && self.mode == GhostMode::Vulnerable {
            self.mode = GhostMode::Normal;
            debug!(ghost = %self.kind, "Vulnerable mode expired");
            return true;
        }
        false
    }

    /// Runs one logical tick: mode timer, then straight-line wandering with random turns.
    ///
    /// The ghost keeps going straight while it can. When blocked, or with probability
    /// `redirect_chance` even after a successful step, it picks a uniformly random
    /// direction among those leading to an open cell. With no open neighbour it stays put.
    /// `moving` records whether the step was committed; a redirect only changes facing.
    pub fn step(&mut self, grid: &Grid, rng: &mut dyn RandomSource, redirect_chance: f64) -> bool {
        self.tick_mode();

        let moved = self.body.try_advance(grid);
        if !moved || rng.chance(redirect_chance) {
            let options = grid.open_directions(self.body.cell);
            if options.is_empty() {
                trace!(ghost = %self.kind, cell = ?self.body.cell, "Ghost has no open direction");
            } else {
                let choice = options[rng.index(options.len()).min(options.len() - 1)];
                trace!(ghost = %self.kind, from = %self.body.facing, to = %choice, "Ghost redirected");
                self.body.facing = choice;
            }
        }

        self.body.moving = moved;
        moved
    }
}
