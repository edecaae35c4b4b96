//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the falling-block simulation: board state, piece
//! spawning, movement and rotation legality, gravity, line clearing and
//! game-over detection. It has **no dependencies** on terminals or I/O, and
//! every piece of state lives in one explicit [`Game`] value.
//!
//! # Module Structure
//!
//! - [`position`]: integer coordinates with translate/rotate transforms
//! - [`mino`]: the seven shapes plus the `Wall`/`Empty` sentinels, colors, rotation
//! - [`rng`]: 7-bag randomizer over any `rand::Rng`
//! - [`board`]: 12x22 walled grid with collision, placement and line clearing
//! - [`game`]: the engine state machine and the ghost projection
//! - [`ticker`]: fixed-tick gravity driver
//! - [`snapshot`]: per-frame copy of the state for renderers
//!
//! # Game Rules
//!
//! - **Boundary**: the board carries its own walls on the left, right and bottom; the top is open
//! - **Spawn**: every piece appears with its pivot at `(6, 1)`
//! - **Rotation**: offsets rotate about the pivot; no wall kicks, a blocked rotation just fails
//! - **Hard drop**: moves the piece to its landing spot but does not lock it
//! - **Line clear**: any row without an `Empty` cell is removed unless it is pure wall
//! - **Score**: the number of lines cleared
//! - **Game over**: the freshly spawned piece does not fit; the board freezes to wall
//!
//! # Example
//!
//! ```
//! use mino_tetris_core::{Game, Ticker, TickOutcome};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut game = Game::with_rng(StdRng::seed_from_u64(12345));
//!
//! game.try_move_left();
//! game.try_rotate_right();
//! game.drop_hard();
//!
//! // Grounded: the next gravity tick locks the piece.
//! let mut ticker = Ticker::new(1);
//! assert_eq!(ticker.step(&mut game), TickOutcome::Locked { lines: 0 });
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod game;
pub mod mino;
pub mod position;
pub mod rng;
pub mod snapshot;
pub mod ticker;

pub use mino_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game::{Game, MinoState, SPAWN_POSITION};
pub use mino::{default_color, default_offsets, Mino, Offsets};
pub use position::Position;
pub use rng::PieceBag;
pub use snapshot::GameSnapshot;
pub use ticker::{TickOutcome, Ticker};
