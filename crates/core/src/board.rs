//! Board module - manages the game grid
//!
//! The board is a 12x22 grid of [`MinoKind`] cells stored as a flat row-major
//! array. The outermost columns and the bottom row hold `Wall` cells once the
//! boundary is painted; the top row stays open so that an overflowing stack is
//! caught by a failed placement instead of by geometry.
//! Coordinates: (x, y) where x ranges 0..11 (left to right), y ranges 0..21 (top to bottom)

use arrayvec::ArrayVec;

use crate::mino::Mino;
use crate::position::Position;
use crate::types::{MinoKind, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Total number of cells on the board
const BOARD_SIZE: usize = WIDTH * HEIGHT;

/// Row indices removed by one [`Board::clear_lines`] call
pub type ClearedRows = ArrayVec<usize, HEIGHT>;

/// Row-major copy of the board for renderers
pub type Grid = [[MinoKind; WIDTH]; HEIGHT];

/// The game board - 12 columns x 22 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    cells: [MinoKind; BOARD_SIZE],
}

impl Board {
    /// Create a board with every cell `Empty` (no boundary)
    pub fn new() -> Self {
        Self {
            cells: [MinoKind::Empty; BOARD_SIZE],
        }
    }

    /// Create an empty board with its U-shaped wall painted
    pub fn with_boundary() -> Self {
        let mut board = Self::new();
        board.paint_boundary();
        board
    }

    /// Paint the bottom row and both side columns as `Wall` in one placement
    pub fn paint_boundary(&mut self) {
        let w = BOARD_WIDTH as i8;
        let h = BOARD_HEIGHT as i8;

        let bottom = (0..w).map(|x| Position::new(x, h - 1));
        let left = (0..h).map(|y| Position::new(0, y));
        let right = (0..h).map(|y| Position::new(w - 1, y));
        let boundary: Vec<Position> = bottom.chain(left).chain(right).collect();

        self.place_cells(Position::ORIGIN, &boundary, MinoKind::Wall);
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<MinoKind> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, kind: MinoKind) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = kind;
                true
            }
            None => false,
        }
    }

    /// In bounds and `Empty`
    pub fn is_free(&self, at: Position) -> bool {
        matches!(self.get(at.x, at.y), Some(MinoKind::Empty))
    }

    /// Whether every cell of `mino`, shifted to `at`, is in bounds and `Empty`
    pub fn can_place(&self, at: Position, mino: &Mino) -> bool {
        mino.offsets().iter().all(|&offset| self.is_free(at + offset))
    }

    /// Write the mino's kind into each of its cells at `at`.
    ///
    /// No collision check: callers validate with [`Board::can_place`] first.
    pub fn place(&mut self, at: Position, mino: &Mino) {
        self.place_cells(at, mino.offsets(), mino.kind());
    }

    /// Write `kind` into every `at + offset`, skipping cells outside the board
    pub fn place_cells(&mut self, at: Position, offsets: &[Position], kind: MinoKind) {
        for &offset in offsets {
            let p = at + offset;
            self.set(p.x, p.y, kind);
        }
    }

    /// Cells of row `y`, left to right
    pub fn row(&self, y: usize) -> &[MinoKind] {
        let start = y * WIDTH;
        &self.cells[start..start + WIDTH]
    }

    /// A row is kept if it still has a hole or is pure wall.
    pub fn is_row_kept(&self, y: usize) -> bool {
        let row = self.row(y);
        row.contains(&MinoKind::Empty) || row.iter().all(|&c| c == MinoKind::Wall)
    }

    /// Remove every completed row and return the removed indices (bottom to top).
    ///
    /// Rows above a removed row move down; each removed row is replaced by an
    /// open row at the top whose outermost cells are `Wall`, so the side
    /// boundary survives the shift. Two-pointer compaction, no allocation.
    pub fn clear_lines(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut write_y = HEIGHT;

        for read_y in (0..HEIGHT).rev() {
            if !self.is_row_kept(read_y) {
                cleared.push(read_y);
                continue;
            }

            write_y -= 1;
            if write_y != read_y {
                let src = read_y * WIDTH;
                self.cells.copy_within(src..src + WIDTH, write_y * WIDTH);
            }
        }

        for y in 0..write_y {
            self.fill_boundary_row(y);
        }

        cleared
    }

    fn fill_boundary_row(&mut self, y: usize) {
        let start = y * WIDTH;
        let row = &mut self.cells[start..start + WIDTH];
        row.fill(MinoKind::Empty);
        row[0] = MinoKind::Wall;
        row[WIDTH - 1] = MinoKind::Wall;
    }

    /// Turn every occupied cell into `Wall`
    pub fn freeze(&mut self) {
        for cell in self.cells.iter_mut().filter(|c| **c != MinoKind::Empty) {
            *cell = MinoKind::Wall;
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[MinoKind] {
        &self.cells
    }

    /// Copy the cells into a row-major grid
    pub fn write_grid(&self, out: &mut Grid) {
        for (y, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(self.row(y));
        }
    }

    /// Number of cells holding a playable piece kind
    pub fn count_blocks(&self) -> usize {
        self.cells.iter().filter(|c| c.is_playable()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
