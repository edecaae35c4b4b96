//! Terminal "game renderer" module.
//!
//! Renders a [`core::GameSnapshot`] into a framebuffer of styled characters and
//! flushes that framebuffer to the terminal. The engine itself stays free of
//! any I/O.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use mino_tetris_core as core;
pub use mino_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
