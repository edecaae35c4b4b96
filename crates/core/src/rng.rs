//! RNG module - 7-bag random piece generation
//!
//! Each bag holds one of each playable kind (I, O, T, S, Z, J, L), shuffled.
//! Pieces are handed out in bag order; an exhausted bag is replaced by a fresh
//! shuffle. Every 7 consecutive draws from a bag boundary therefore contain each
//! kind exactly once, but the last piece of one bag may repeat as the first of
//! the next.
//!
//! The shuffle source is any [`rand::Rng`]. Games use the thread-local
//! generator; tests inject a seeded one.

use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::MinoKind;

/// Number of kinds in one bag
pub const BAG_SIZE: usize = MinoKind::PLAYABLE.len();

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct PieceBag<R = ThreadRng> {
    /// Current bag of pieces
    bag: [MinoKind; BAG_SIZE],
    /// Index of the next piece to hand out
    bag_index: usize,
    rng: R,
}

impl PieceBag<ThreadRng> {
    /// Bag shuffled by the thread-local generator
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Default for PieceBag<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PieceBag<R> {
    /// Bag shuffled by the given generator
    pub fn with_rng(rng: R) -> Self {
        let mut bag = Self {
            bag: MinoKind::PLAYABLE,
            bag_index: 0,
            rng,
        };
        bag.refill();
        bag
    }

    fn refill(&mut self) {
        self.bag = MinoKind::PLAYABLE;
        self.bag.shuffle(&mut self.rng);
        self.bag_index = 0;
    }

    /// Draw the next piece, reshuffling first if the bag is used up
    pub fn draw(&mut self) -> MinoKind {
        if self.bag_index >= BAG_SIZE {
            self.refill();
        }

        let kind = self.bag[self.bag_index];
        self.bag_index += 1;
        kind
    }

    /// Pieces still left in the current bag, in draw order
    #[cfg(test)]
    fn remaining(&self) -> &[MinoKind] {
        &self.bag[self.bag_index..]
    }
}

/// Endless: `next` always yields a piece.
impl<R: Rng> Iterator for PieceBag<R> {
    type Item = MinoKind;

    fn next(&mut self) -> Option<MinoKind> {
        Some(self.draw())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
