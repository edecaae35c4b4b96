//! Terminal Tetris runner (default binary).
//!
//! Drives the engine at a fixed tick: key presses become commands between
//! ticks, [`Ticker`] applies gravity and the game-over check on every tick, and
//! the board is redrawn through the framebuffer renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use mino_tetris::core::{Game, GameSnapshot, TickOutcome, Ticker};
use mino_tetris::input::{command_for_key, should_quit};
use mino_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use mino_tetris::{logging, RunConfig};

fn main() -> Result<()> {
    let config = RunConfig::from_env();
    logging::init(&config)?;
    info!("starting with {:?}", config);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &RunConfig) -> Result<()> {
    let mut game = Game::with_rng(config.rng());
    let mut ticker = Ticker::new(config.gravity_ticks);

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = config.tick_duration();
    let mut last_tick = Instant::now();
    let mut over = false;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.present(&fb)?;

        // Input with timeout until next tick.
        let timeout = if over {
            tick_duration
        } else {
            tick_duration
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::ZERO)
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if !over {
                        if let Some(command) = command_for_key(key) {
                            game.apply_command(command);
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick. After game over the final frame stays up until quit.
        if !over && last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            over = ticker.step(&mut game) == TickOutcome::GameOver;
        }
    }
}
