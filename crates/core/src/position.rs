//! Position module - integer 2D coordinates and their transforms
//!
//! Coordinates follow the board: x grows to the right, y grows downwards.
//! Rotation is always about the origin, which for a piece offset is its pivot.

use std::ops::Add;

/// A board coordinate or a pivot-relative offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const ORIGIN: Position = Position::new(0, 0);

    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Componentwise sum
    #[inline]
    pub const fn translate(self, by: Position) -> Self {
        Self::new(self.x + by.x, self.y + by.y)
    }

    /// 90° clockwise on screen (y down): `(x, y) -> (-y, x)`
    #[inline]
    pub const fn rotate_cw(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// 90° counter-clockwise on screen (y down): `(x, y) -> (y, -x)`
    #[inline]
    pub const fn rotate_ccw(self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// One row further down
    #[inline]
    pub const fn increment_y(self) -> Self {
        Self::new(self.x, self.y + 1)
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        self.translate(rhs)
    }
}

impl From<(i8, i8)> for Position {
    fn from((x, y): (i8, i8)) -> Self {
        Self::new(x, y)
    }
}
