use crate::board::Grid;
use crate::game::MinoState;
use crate::types::{MinoKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Grid,
    pub active: MinoState,
    pub ghost: MinoState,
    pub score: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[MinoKind::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: MinoState::default(),
            ghost: MinoState::default(),
            score: 0,
            game_over: false,
        }
    }
}
