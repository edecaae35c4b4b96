//! Mino module - piece shapes, colors and rotation
//!
//! Every piece is a set of offsets relative to its pivot. Rotation rotates each
//! offset about the pivot, so shapes whose offsets are not centered on the pivot
//! turn lopsided, and the O piece (which does not cover its own pivot) shifts
//! sideways instead of spinning in place. There are no wall kicks.

use arrayvec::ArrayVec;

use crate::position::Position;
use crate::types::{MinoKind, Rgba};

/// Pivot-relative cells of a piece (at most 4)
pub type Offsets = ArrayVec<Position, 4>;

/// A piece value: kind, offsets and display color
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mino {
    kind: MinoKind,
    offsets: Offsets,
    color: Rgba,
}

impl Mino {
    /// Piece with the spawn offsets and color of `kind`
    pub fn new(kind: MinoKind) -> Self {
        Self {
            kind,
            offsets: default_offsets(kind),
            color: default_color(kind),
        }
    }

    /// Piece with explicit offsets and color (rotated pieces, ghosts)
    pub fn with_parts(kind: MinoKind, offsets: Offsets, color: Rgba) -> Self {
        Self {
            kind,
            offsets,
            color,
        }
    }

    pub fn kind(&self) -> MinoKind {
        self.kind
    }

    pub fn offsets(&self) -> &[Position] {
        &self.offsets
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    /// Same piece turned 90° clockwise about its pivot
    pub fn rotated_cw(&self) -> Self {
        self.map_offsets(Position::rotate_cw)
    }

    /// Same piece turned 90° counter-clockwise about its pivot
    pub fn rotated_ccw(&self) -> Self {
        self.map_offsets(Position::rotate_ccw)
    }

    /// Translucent copy used to preview the landing spot
    pub fn ghost(&self) -> Self {
        Self::with_parts(self.kind, self.offsets.clone(), self.color.translucent())
    }

    pub(crate) fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    fn map_offsets(&self, f: impl Fn(Position) -> Position) -> Self {
        let offsets = self.offsets.iter().map(|&p| f(p)).collect();
        Self::with_parts(self.kind, offsets, self.color)
    }
}

/// Spawn offsets for each kind; `Wall` and `Empty` have none
pub fn default_offsets(kind: MinoKind) -> Offsets {
    let cells: [(i8, i8); 4] = match kind {
        MinoKind::I => [(0, -1), (0, 0), (0, 1), (0, 2)],
        MinoKind::O => [(1, 0), (2, 0), (1, 1), (2, 1)],
        MinoKind::T => [(-1, 0), (0, 0), (1, 0), (0, -1)],
        MinoKind::S => [(-1, 0), (0, 0), (0, -1), (1, -1)],
        MinoKind::Z => [(-1, -1), (0, -1), (0, 0), (1, 0)],
        MinoKind::J => [(-1, -1), (-1, 0), (0, 0), (1, 0)],
        MinoKind::L => [(1, -1), (-1, 0), (0, 0), (1, 0)],
        MinoKind::Wall | MinoKind::Empty => return Offsets::new(),
    };
    cells.into_iter().map(Position::from).collect()
}

/// Display color for each kind
pub fn default_color(kind: MinoKind) -> Rgba {
    match kind {
        MinoKind::I => Rgba::opaque(0, 255, 255),
        MinoKind::O => Rgba::opaque(255, 255, 0),
        MinoKind::T => Rgba::opaque(128, 0, 128),
        MinoKind::S => Rgba::opaque(0, 255, 0),
        MinoKind::Z => Rgba::opaque(255, 0, 0),
        MinoKind::J => Rgba::opaque(0, 0, 255),
        MinoKind::L => Rgba::opaque(255, 165, 0),
        MinoKind::Wall => Rgba::opaque(128, 128, 128),
        MinoKind::Empty => Rgba::opaque(0, 0, 0),
    }
}
