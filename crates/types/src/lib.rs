//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! from the engine, the renderer and the input layer alike.
//!
//! # Board Dimensions
//!
//! The board embeds its own boundary:
//!
//! - **Width**: 12 columns (a 10-column playfield plus one wall column per side)
//! - **Height**: 22 rows (a 20-row playfield, one open spare row on top, one wall row at the bottom)
//! - **Spawn position**: `(BOARD_WIDTH / 2, 1)` for every piece
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 33 | Fixed tick interval (~30 Hz) |
//! | `GRAVITY_TICKS` | 6 | Ticks between two gravity steps |
//!
//! # Examples
//!
//! ```
//! use mino_tetris_types::{Command, MinoKind, Rgba, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert!(MinoKind::T.is_playable());
//! assert!(!MinoKind::Wall.is_playable());
//! assert_ne!(Command::RotateLeft, Command::RotateRight);
//!
//! let ghost = Rgba::opaque(0, 255, 255).translucent();
//! assert_eq!(ghost.a, 64);
//!
//! assert_eq!(BOARD_WIDTH, 12);
//! assert_eq!(BOARD_HEIGHT, 22);
//! ```

/// Board width in cells, including the two wall columns
pub const BOARD_WIDTH: u8 = 12;

/// Board height in cells, including the bottom wall row
pub const BOARD_HEIGHT: u8 = 22;

/// Fixed tick interval in milliseconds (33ms ≈ 30 Hz)
pub const TICK_MS: u32 = 33;

/// Number of ticks between two gravity steps
pub const GRAVITY_TICKS: u32 = 6;

/// Alpha applied to the ghost piece color (64/256 = 25% opacity)
pub const GHOST_ALPHA: u8 = 64;

/// Cell state tag and piece type.
///
/// The seven playable shapes come first. Two sentinels complete the set:
/// - **Wall**: boundary cells and everything frozen at game over
/// - **Empty**: background; never placed as a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MinoKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
    Wall,
    #[default]
    Empty,
}

impl MinoKind {
    /// The seven shapes handed out by the randomizer, in canonical order
    pub const PLAYABLE: [MinoKind; 7] = [
        MinoKind::I,
        MinoKind::O,
        MinoKind::T,
        MinoKind::S,
        MinoKind::Z,
        MinoKind::J,
        MinoKind::L,
    ];

    /// True for the seven tetromino shapes, false for the sentinels
    pub fn is_playable(&self) -> bool {
        !matches!(self, MinoKind::Wall | MinoKind::Empty)
    }
}

/// Player commands accepted by the engine
///
/// These are what the input layer produces from key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Shift the active piece one cell left
    MoveLeft,
    /// Shift the active piece one cell right
    MoveRight,
    /// Shift the active piece one cell down
    MoveDown,
    /// Rotate the offsets 90° counter-clockwise about the pivot
    RotateLeft,
    /// Rotate the offsets 90° clockwise about the pivot
    RotateRight,
    /// Move the active piece to its landing position without locking it
    HardDrop,
}

/// Display color of a mino: 8-bit RGB plus alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully opaque color
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Same color components with a different alpha
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// The ghost-piece variant of this color
    pub const fn translucent(self) -> Self {
        self.with_alpha(GHOST_ALPHA)
    }

    pub const fn is_opaque(&self) -> bool {
        self.a == 255
    }
}
