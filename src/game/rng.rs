//! Seeded random number source.
//!
//! Every random decision in the core (tile hazards, spawn picks, alien and
//! asteroid movement choices) draws from one `GameRng`, so a fixed seed
//! reproduces a whole run.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::game::error::GameError;
use crate::game::types::{Direction, Position};

#[derive(Debug, Clone)]
pub struct GameRng(Pcg32);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self(Pcg32::seed_from_u64(seed))
    }

    /// One fresh draw against a per-cell probability.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.0.random::<f64>() <= probability
    }

    /// Uniform index into `[0, len)`. A zero-length pool has nothing left to
    /// hand out, which is fatal to whatever spawn sequence asked.
    pub fn index(&mut self, len: usize) -> Result<usize, GameError> {
        if len == 0 {
            return Err(GameError::NoSpawnAvailable);
        }
        Ok(self.0.random_range(0..len))
    }

    /// Uniform pick from the spawn pool, leaving the pool intact.
    pub fn pick(&mut self, spawns: &[Position]) -> Result<Position, GameError> {
        Ok(spawns[self.index(spawns.len())?])
    }

    /// Uniform pick that also claims the tile, so no later spawn lands on it.
    pub fn claim(&mut self, spawns: &mut Vec<Position>) -> Result<Position, GameError> {
        let i = self.index(spawns.len())?;
        Ok(spawns.remove(i))
    }

    /// Uniform draw among the four movement directions.
    pub fn direction(&mut self) -> Direction {
        const DIRECTIONS: [Direction; 4] = [
            Direction::Right,
            Direction::Left,
            Direction::Down,
            Direction::Up,
        ];
        DIRECTIONS[self.0.random_range(0..DIRECTIONS.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = GameRng::new(12345);
        let mut b = GameRng::new(12345);
        for _ in 0..100 {
            assert_eq!(a.index(1000), b.index(1000));
        }
    }

    #[test]
    fn index_stays_in_range() {
        let mut rng = GameRng::new(1);
        for _ in 0..200 {
            assert!(rng.index(7).unwrap() < 7);
        }
    }

    #[test]
    fn empty_pool_is_an_error() {
        let mut rng = GameRng::new(1);
        assert_eq!(rng.index(0), Err(GameError::NoSpawnAvailable));
        assert_eq!(rng.pick(&[]), Err(GameError::NoSpawnAvailable));
    }

    #[test]
    fn claim_removes_the_picked_tile() {
        let mut rng = GameRng::new(1);
        let mut spawns = vec![
            Position { x: 0, y: 0 },
            Position { x: 1, y: 0 },
            Position { x: 2, y: 0 },
        ];
        let picked = rng.claim(&mut spawns).unwrap();
        assert_eq!(spawns.len(), 2);
        assert!(!spawns.contains(&picked));
    }
}
