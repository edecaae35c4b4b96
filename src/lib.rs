//! Mino Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates under `mino_tetris::{core,input,term,types}`
//! and hosts the run configuration and logging setup used by the binary.

pub mod config;
pub mod logging;

pub use mino_tetris_core as core;
pub use mino_tetris_input as input;
pub use mino_tetris_term as term;
pub use mino_tetris_types as types;

pub use config::RunConfig;
