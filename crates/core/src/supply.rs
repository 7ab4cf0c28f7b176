//! Supply module - look-ahead queue of upcoming pieces
//!
//! Every entry is an independent uniform draw over the seven kinds, so repeats are
//! possible. The buffer never drops below [`MIN_SUPPLY_LEN`] entries once a draw or peek
//! has happened.
//!
//! Seeded supplies produce identical sequences, which keeps tests deterministic.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{PieceKind, MIN_SUPPLY_LEN};

/// Uniform random piece generator with a look-ahead buffer
#[derive(Debug, Clone)]
pub struct PieceSupply {
    /// Upcoming pieces, head first
    buffer: VecDeque<PieceKind>,
    rng: StdRng,
}

impl PieceSupply {
    /// Create a supply seeded from the operating system
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Create a supply with a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        let mut supply = Self {
            buffer: VecDeque::with_capacity(MIN_SUPPLY_LEN),
            rng,
        };
        supply.top_up(MIN_SUPPLY_LEN);
        supply
    }

    fn draw(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.random_range(0..PieceKind::ALL.len())]
    }

    /// Append uniform draws until the buffer holds at least `len` pieces
    fn top_up(&mut self, len: usize) {
        while self.buffer.len() < len {
            let kind = self.draw();
            self.buffer.push_back(kind);
        }
    }

    /// Remove and return the head of the queue
    pub fn take_next(&mut self) -> PieceKind {
        self.top_up(MIN_SUPPLY_LEN);
        let kind = match self.buffer.pop_front() {
            Some(kind) => kind,
            None => self.draw(),
        };
        self.top_up(MIN_SUPPLY_LEN);
        kind
    }

    /// First `count` upcoming pieces, without consuming them
    pub fn peek_next(&mut self, count: usize) -> Vec<PieceKind> {
        self.top_up(count.max(MIN_SUPPLY_LEN));
        self.buffer.iter().take(count).copied().collect()
    }

    /// Queue specific kinds ahead of the random draws, in order.
    ///
    /// Used to set up deterministic openings; later pieces are random again.
    pub fn prime<I: IntoIterator<Item = PieceKind>>(&mut self, kinds: I) {
        let kinds: Vec<PieceKind> = kinds.into_iter().collect();
        for kind in kinds.into_iter().rev() {
            self.buffer.push_front(kind);
        }
    }

    /// Number of buffered pieces
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Default for PieceSupply {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supply_deterministic_with_seed() {
        let mut a = PieceSupply::with_seed(12345);
        let mut b = PieceSupply::with_seed(12345);

        for _ in 0..100 {
            assert_eq!(a.take_next(), b.take_next());
        }
    }

    #[test]
    fn test_supply_initial_buffer() {
        let supply = PieceSupply::with_seed(1);
        assert_eq!(supply.len(), MIN_SUPPLY_LEN);
    }

    #[test]
    fn test_peek_matches_take() {
        let mut supply = PieceSupply::with_seed(7);
        let preview = supply.peek_next(5);
        assert_eq!(preview.len(), 5);
        assert!(supply.len() >= 5);

        for expected in preview {
            assert_eq!(supply.take_next(), expected);
        }
    }

    #[test]
    fn test_peek_zero_still_keeps_minimum() {
        let mut supply = PieceSupply::with_seed(7);
        assert!(supply.peek_next(0).is_empty());
        assert!(supply.len() >= MIN_SUPPLY_LEN);
    }

    #[test]
    fn test_buffer_never_below_minimum_after_take() {
        let mut supply = PieceSupply::with_seed(3);
        for _ in 0..50 {
            supply.take_next();
            assert!(supply.len() >= MIN_SUPPLY_LEN);
        }
    }

    #[test]
    fn test_prime_comes_first() {
        let mut supply = PieceSupply::with_seed(3);
        supply.prime([PieceKind::O, PieceKind::I]);
        assert_eq!(supply.take_next(), PieceKind::O);
        assert_eq!(supply.take_next(), PieceKind::I);
    }

    #[test]
    fn test_all_kinds_eventually_drawn() {
        let mut supply = PieceSupply::with_seed(99);
        let mut seen = Vec::new();
        for _ in 0..500 {
            let kind = supply.take_next();
            if !seen.contains(&kind) {
                seen.push(kind);
            }
        }
        assert_eq!(seen.len(), 7);
    }
}
