//! Ticker module - fixed-tick gravity driver
//!
//! The engine never schedules itself. A front end calls [`Ticker::step`] once
//! per tick: every `gravity_ticks`-th tick the piece falls one row (locking it
//! when it cannot), and every tick ends with the game-over check.

use rand::Rng;

use crate::game::Game;
use crate::types::GRAVITY_TICKS;

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing locked; the game goes on
    Running,
    /// A piece locked, clearing `lines` rows
    Locked { lines: u32 },
    /// The game is over; stop driving it
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Ticker {
    gravity_ticks: u32,
    tick: u64,
}

impl Ticker {
    /// Gravity every `gravity_ticks` ticks (0 is treated as 1)
    pub fn new(gravity_ticks: u32) -> Self {
        Self {
            gravity_ticks: gravity_ticks.max(1),
            tick: 0,
        }
    }

    /// Ticks stepped so far
    pub fn ticks(&self) -> u64 {
        self.tick
    }

    /// Advance the game by one tick
    pub fn step<R: Rng>(&mut self, game: &mut Game<R>) -> TickOutcome {
        if game.is_over() {
            return TickOutcome::GameOver;
        }

        self.tick += 1;

        let mut outcome = TickOutcome::Running;
        if self.tick % u64::from(self.gravity_ticks) == 0 && !game.try_move_down() {
            let lines = game.fix_current_mino();
            outcome = TickOutcome::Locked { lines };
        }

        if game.try_game_over_process() {
            return TickOutcome::GameOver;
        }
        outcome
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(GRAVITY_TICKS)
    }
}
