//! Error types for the simulation core.
//!
//! Nothing here is retried: an exhausted spawn pool is fatal to level
//! generation, and an out-of-bounds coordinate means a movement computation
//! skipped its validation.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A spawn draw was requested while no open tile remained in the pool.
    #[error("no open tile available to spawn on")]
    NoSpawnAvailable,

    /// A computed coordinate fell outside the level grid.
    #[error("coordinate ({x}, {y}) is outside the level grid")]
    OutOfBounds { x: usize, y: usize },
}
