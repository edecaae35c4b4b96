//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto engine [`crate::types::Command`]s. Every
//! key press is one discrete command; there is no auto-repeat handling beyond
//! what the terminal itself delivers.

pub mod map;

pub use mino_tetris_types as types;

pub use map::{command_for_key, should_quit};
