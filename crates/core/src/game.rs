//! Game module - the engine state machine
//!
//! Ties the board, the active piece and the bag together. A piece is spawned,
//! moved and rotated by player commands and gravity, locked into the board when
//! it can fall no further, and replaced by the next one. Completed rows are
//! cleared after each lock and counted into the score. When a freshly spawned
//! piece does not fit, the board freezes and the game is over.

use log::{debug, info, trace};
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::board::Board;
use crate::mino::{default_color, Mino};
use crate::position::Position;
use crate::rng::PieceBag;
use crate::snapshot::GameSnapshot;
use crate::types::{Command, MinoKind, BOARD_WIDTH};

/// Pivot of every freshly spawned piece: horizontal center, second row
pub const SPAWN_POSITION: Position = Position::new(BOARD_WIDTH as i8 / 2, 1);

/// Active falling piece and the board position of its pivot
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MinoState {
    pub mino: Mino,
    pub position: Position,
}

impl MinoState {
    /// `mino` at the spawn position
    pub fn spawn(mino: Mino) -> Self {
        Self {
            mino,
            position: SPAWN_POSITION,
        }
    }

    /// Absolute board cells covered by the piece
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.mino
            .offsets()
            .iter()
            .map(move |&offset| self.position + offset)
    }
}

impl Default for MinoState {
    fn default() -> Self {
        Self::spawn(Mino::new(MinoKind::Empty))
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game<R = ThreadRng> {
    board: Board,
    active: MinoState,
    bag: PieceBag<R>,
    /// Total lines cleared
    score: u32,
    game_over: bool,
}

impl Game<ThreadRng> {
    /// New game shuffled by the thread-local generator
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Default for Game<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Game<R> {
    /// New game on a walled, empty board
    pub fn with_rng(rng: R) -> Self {
        Self::from_board(Board::with_boundary(), rng)
    }

    /// New game on a prepared board, for scripted setups
    pub fn from_board(board: Board, rng: R) -> Self {
        let mut bag = PieceBag::with_rng(rng);
        let active = MinoState::spawn(Mino::new(bag.draw()));

        Self {
            board,
            active,
            bag,
            score: 0,
            game_over: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &MinoState {
        &self.active
    }

    /// Lines cleared so far
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Replace the active piece with the next one from the bag.
    ///
    /// Placement is not validated here; the game-over check does that.
    fn spawn_next(&mut self) {
        let kind = self.bag.draw();
        self.active = MinoState::spawn(Mino::new(kind));
        trace!("spawned {:?} at {:?}", kind, self.active.position);
    }

    fn try_move(&mut self, delta: Position) -> bool {
        let candidate = self.active.position + delta;
        if !self.board.can_place(candidate, &self.active.mino) {
            return false;
        }
        self.active.position = candidate;
        true
    }

    pub fn try_move_left(&mut self) -> bool {
        self.try_move(Position::new(-1, 0))
    }

    pub fn try_move_right(&mut self) -> bool {
        self.try_move(Position::new(1, 0))
    }

    /// One row down; this is also the gravity step
    pub fn try_move_down(&mut self) -> bool {
        self.try_move(Position::new(0, 1))
    }

    /// Rotate in place; fails outright on collision (no wall kicks)
    fn try_rotate(&mut self, clockwise: bool) -> bool {
        let rotated = if clockwise {
            self.active.mino.rotated_cw()
        } else {
            self.active.mino.rotated_ccw()
        };

        if !self.board.can_place(self.active.position, &rotated) {
            return false;
        }
        self.active.mino = rotated;
        true
    }

    pub fn try_rotate_left(&mut self) -> bool {
        self.try_rotate(false)
    }

    pub fn try_rotate_right(&mut self) -> bool {
        self.try_rotate(true)
    }

    /// Lowest position the active piece can fall to from where it is
    pub fn ghost_position(&self) -> Position {
        let mut position = self.active.position;
        loop {
            let below = position.increment_y();
            if !self.board.can_place(below, &self.active.mino) {
                return position;
            }
            position = below;
        }
    }

    /// Translucent copy of the active piece at its landing position
    pub fn ghost(&self) -> MinoState {
        MinoState {
            mino: self.active.mino.ghost(),
            position: self.ghost_position(),
        }
    }

    /// Move the active piece straight to its landing position.
    ///
    /// The piece is not locked; gravity or [`Game::fix_current_mino`] does that.
    pub fn drop_hard(&mut self) {
        self.active.position = self.ghost_position();
    }

    /// Lock the active piece, spawn the next one, then clear completed rows.
    ///
    /// Returns the number of rows cleared, which is also added to the score.
    pub fn fix_current_mino(&mut self) -> u32 {
        let locked_kind = self.active.mino.kind();
        let locked_at = self.active.position;

        self.board.place(locked_at, &self.active.mino);
        self.spawn_next();

        let lines = self.board.clear_lines().len() as u32;
        self.score += lines;

        debug!(
            "locked {:?} at {:?}, cleared {} line(s), score {}",
            locked_kind, locked_at, lines, self.score
        );
        lines
    }

    /// End the game if the active piece does not fit where it stands.
    ///
    /// On game over every occupied cell turns into `Wall`, the active piece
    /// takes the wall color, and `true` is returned. Otherwise nothing changes.
    pub fn try_game_over_process(&mut self) -> bool {
        if self.board.can_place(self.active.position, &self.active.mino) {
            return false;
        }

        self.board.freeze();
        self.active.mino.set_color(default_color(MinoKind::Wall));
        self.game_over = true;

        info!("game over with {} line(s) cleared", self.score);
        true
    }

    /// Dispatch a player command. `HardDrop` always succeeds.
    pub fn apply_command(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.try_move_left(),
            Command::MoveRight => self.try_move_right(),
            Command::MoveDown => self.try_move_down(),
            Command::RotateLeft => self.try_rotate_left(),
            Command::RotateRight => self.try_rotate_right(),
            Command::HardDrop => {
                self.drop_hard();
                true
            }
        }
    }

    /// Refill `out` with the current state, reusing its storage
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active.clone_from(&self.active);
        out.ghost = self.ghost();
        out.score = self.score;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_active(&mut self, active: MinoState) {
        self.active = active;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mino::default_offsets;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn game() -> Game<StdRng> {
        Game::with_rng(StdRng::seed_from_u64(12345))
    }

    fn game_with(kind: MinoKind) -> Game<StdRng> {
        let mut g = game();
        g.set_active(MinoState::spawn(Mino::new(kind)));
        g
    }

    #[test]
    fn test_new_game_spawns_at_center() {
        let g = game();
        assert_eq!(g.active().position, Position::new(6, 1));
        assert!(g.active().mino.kind().is_playable());
        assert_eq!(g.score(), 0);
        assert!(!g.is_over());
        assert_eq!(*g.board(), Board::with_boundary());
    }

    #[test]
    fn test_try_move() {
        let mut g = game_with(MinoKind::T);

        assert!(g.try_move_left());
        assert_eq!(g.active().position, Position::new(5, 1));
        assert!(g.try_move_right());
        assert!(g.try_move_right());
        assert_eq!(g.active().position, Position::new(7, 1));
        assert!(g.try_move_down());
        assert_eq!(g.active().position, Position::new(7, 2));
    }

    #[test]
    fn test_try_move_collision() {
        let mut g = game_with(MinoKind::I);

        // Vertical I: columns 1..=10 are open, column 0 is wall.
        while g.try_move_left() {}
        assert_eq!(g.active().position.x, 1);
        assert!(!g.try_move_left());
        assert_eq!(g.active().position.x, 1);

        while g.try_move_right() {}
        assert_eq!(g.active().position.x, 10);
    }

    #[test]
    fn test_try_move_blocked_by_stack() {
        let mut g = game_with(MinoKind::I);
        g.board_mut().set(6, 5, MinoKind::O);

        // The I occupies rows 0..=3; one more step would hit (6, 5).
        assert!(g.try_move_down());
        assert!(!g.try_move_down());
        assert_eq!(g.active().position, Position::new(6, 2));
    }

    #[test]
    fn test_try_rotate() {
        let mut g = game_with(MinoKind::T);
        g.try_move_down();

        assert!(g.try_rotate_right());
        assert_eq!(g.active().mino, Mino::new(MinoKind::T).rotated_cw());
        assert!(g.try_rotate_left());
        assert_eq!(g.active().mino, Mino::new(MinoKind::T));
        // Rotation never moves the pivot.
        assert_eq!(g.active().position, Position::new(6, 2));
    }

    #[test]
    fn test_rotate_left_against_left_wall_fails() {
        let mut g = game_with(MinoKind::I);
        g.try_move_down();
        while g.try_move_left() {}
        let before = g.active().clone();

        // Counter-clockwise, offset (0, -1) becomes (-1, 0): the wall column.
        assert!(!g.try_rotate_left());
        assert_eq!(*g.active(), before);
        assert_eq!(g.active().mino.offsets(), default_offsets(MinoKind::I).as_slice());
    }

    #[test]
    fn test_rotate_right_out_of_bounds_fails() {
        let mut g = game_with(MinoKind::I);
        g.try_move_down();
        while g.try_move_left() {}
        let before = g.active().clone();

        // Clockwise, offset (0, 2) becomes (-2, 0): outside the board.
        assert!(!g.try_rotate_right());
        assert_eq!(*g.active(), before);
    }

    #[test]
    fn test_ghost_position() {
        let g = game_with(MinoKind::I);
        // Bottom cell (offset y = 2) rests on row 20, above the wall row.
        assert_eq!(g.ghost_position(), Position::new(6, 18));

        let ghost = g.ghost();
        assert_eq!(ghost.mino.kind(), MinoKind::I);
        assert_eq!(ghost.mino.color(), default_color(MinoKind::I).translucent());
    }

    #[test]
    fn test_drop_hard_does_not_lock() {
        let mut g = game_with(MinoKind::O);
        g.drop_hard();

        assert_eq!(g.active().position, g.ghost_position());
        assert!(!g.try_move_down());
        assert_eq!(g.board().count_blocks(), 0);
        assert_eq!(g.active().mino.kind(), MinoKind::O);
    }

    #[test]
    fn test_fix_vertical_i() {
        let mut g = game_with(MinoKind::I);
        while g.try_move_down() {}
        assert_eq!(g.fix_current_mino(), 0);

        for y in 17..=20 {
            assert_eq!(g.board().get(6, y), Some(MinoKind::I));
        }
        assert_eq!(g.board().count_blocks(), 4);
        assert_eq!(g.score(), 0);
    }

    #[test]
    fn test_fix_spawns_fresh_piece() {
        let mut g = game_with(MinoKind::J);
        g.try_rotate_right();
        g.drop_hard();
        g.fix_current_mino();

        let active = g.active();
        assert_eq!(active.position, SPAWN_POSITION);
        assert_eq!(active.mino, Mino::new(active.mino.kind()));
    }

    #[test]
    fn test_fix_clears_completed_row() {
        let mut g = game_with(MinoKind::I);
        // Row 20 full except column 6.
        for x in 1..=10 {
            if x != 6 {
                g.board_mut().set(x, 20, MinoKind::T);
            }
        }
        g.board_mut().set(2, 19, MinoKind::S);

        g.drop_hard();
        assert_eq!(g.fix_current_mino(), 1);
        assert_eq!(g.score(), 1);

        // The I's upper three cells and the S shifted down one row.
        for y in 18..=20 {
            assert_eq!(g.board().get(6, y), Some(MinoKind::I));
        }
        assert_eq!(g.board().get(6, 17), Some(MinoKind::Empty));
        assert_eq!(g.board().get(2, 20), Some(MinoKind::S));
        assert_eq!(g.board().count_blocks(), 4);
    }

    #[test]
    fn test_game_over_when_spawn_blocked() {
        let mut g = game();
        assert!(!g.try_game_over_process());

        for x in 1..=10 {
            for y in 0..=3 {
                g.board_mut().set(x, y, MinoKind::Z);
            }
        }
        g.board_mut().set(3, 15, MinoKind::L);

        assert!(g.try_game_over_process());
        assert!(g.is_over());
        assert!(g.board().cells().iter().all(|&c| c == MinoKind::Wall || c == MinoKind::Empty));
        assert_eq!(g.board().get(3, 15), Some(MinoKind::Wall));
        assert_eq!(g.active().mino.color(), default_color(MinoKind::Wall));
    }

    #[test]
    fn test_game_over_check_without_collision_is_pure() {
        let mut g = game();
        let board = g.board().clone();
        let active = g.active().clone();

        assert!(!g.try_game_over_process());
        assert_eq!(*g.board(), board);
        assert_eq!(*g.active(), active);
    }

    #[test]
    fn test_apply_command() {
        let mut g = game_with(MinoKind::T);
        assert!(g.apply_command(Command::MoveLeft));
        assert!(g.apply_command(Command::MoveDown));
        assert_eq!(g.active().position, Position::new(5, 2));
        assert!(g.apply_command(Command::RotateRight));
        assert!(g.apply_command(Command::HardDrop));
        assert_eq!(g.active().position, g.ghost_position());
    }

    #[test]
    fn test_snapshot() {
        let mut g = game_with(MinoKind::S);
        g.board_mut().set(4, 20, MinoKind::L);

        let snap = g.snapshot();
        assert_eq!(snap.board[20][4], MinoKind::L);
        assert_eq!(snap.active, *g.active());
        assert_eq!(snap.ghost, g.ghost());
        assert_eq!(snap.score, 0);
        assert!(!snap.game_over);
    }

    #[test]
    fn test_mino_state_cells() {
        let state = MinoState::spawn(Mino::new(MinoKind::I));
        let cells: Vec<_> = state.cells().collect();
        assert_eq!(
            cells,
            vec![
                Position::new(6, 0),
                Position::new(6, 1),
                Position::new(6, 2),
                Position::new(6, 3)
            ]
        );
    }
}
