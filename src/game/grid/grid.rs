use serde::{Deserialize, Serialize};

use crate::config::game::{BLACK_HOLE_CHANCE, GRID_HEIGHT, GRID_WIDTH, PULSAR_CHANCE};
use crate::game::error::GameError;
use crate::game::rng::GameRng;
use crate::game::types::{Position, TileKind};

/// The current level's tile array: `GRID_HEIGHT` rows of `GRID_WIDTH` tiles,
/// indexed `[y][x]`. Regenerated from scratch for every level and mutated in
/// place only by the pulsar toggles; never resized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    tiles: Vec<Vec<TileKind>>,
}

impl Grid {
    /// Generate a fresh level.
    ///
    /// Every cell starts open. A first pass rolls each cell against the black
    /// hole chance, a second pass rolls each cell against the pulsar chance.
    /// The pulsar pass sees whatever the black hole pass wrote, so a pulsar
    /// can overwrite a black hole but never the other way round. Both passes
    /// scan row-major, one draw per cell, so a seed reproduces the grid
    /// exactly.
    pub fn generate(rng: &mut GameRng) -> Self {
        let mut tiles = vec![vec![TileKind::Open; GRID_WIDTH]; GRID_HEIGHT];
        for row in tiles.iter_mut() {
            for tile in row.iter_mut() {
                if rng.chance(BLACK_HOLE_CHANCE) {
                    *tile = TileKind::BlackHole;
                }
            }
        }
        for row in tiles.iter_mut() {
            for tile in row.iter_mut() {
                if rng.chance(PULSAR_CHANCE) {
                    *tile = TileKind::PulsarInactive;
                }
            }
        }
        Grid { tiles }
    }

    /// Build a grid from explicit rows. `tiles` must be `GRID_HEIGHT` rows of
    /// `GRID_WIDTH` entries.
    pub fn from_tiles(tiles: Vec<Vec<TileKind>>) -> Self {
        debug_assert_eq!(tiles.len(), GRID_HEIGHT);
        debug_assert!(tiles.iter().all(|row| row.len() == GRID_WIDTH));
        Grid { tiles }
    }

    pub fn in_bounds(pos: Position) -> bool {
        pos.x < GRID_WIDTH && pos.y < GRID_HEIGHT
    }

    /// Tile kind at `pos`, validated against the grid bounds.
    pub fn kind_at(&self, pos: Position) -> Result<TileKind, GameError> {
        if !Self::in_bounds(pos) {
            return Err(GameError::OutOfBounds { x: pos.x, y: pos.y });
        }
        Ok(self.tiles[pos.y][pos.x])
    }

    pub fn is_open(&self, pos: Position) -> bool {
        Self::in_bounds(pos) && !self.tiles[pos.y][pos.x].is_hazard()
    }

    /// All open coordinates in row-major scan order. This is the spawn pool
    /// for a level; it is rebuilt from the grid, never merged with a stale
    /// pool.
    pub fn open_positions(&self) -> Vec<Position> {
        let mut spawns = Vec::new();
        for (y, row) in self.tiles.iter().enumerate() {
            for (x, tile) in row.iter().enumerate() {
                if *tile == TileKind::Open {
                    spawns.push(Position { x, y });
                }
            }
        }
        spawns
    }

    /// Switch every dormant pulsar on.
    pub fn activate_pulsars(&mut self) {
        for row in self.tiles.iter_mut() {
            for tile in row.iter_mut() {
                if *tile == TileKind::PulsarInactive {
                    *tile = TileKind::PulsarActive;
                }
            }
        }
    }

    /// Switch every active pulsar off.
    pub fn deactivate_pulsars(&mut self) {
        for row in self.tiles.iter_mut() {
            for tile in row.iter_mut() {
                if *tile == TileKind::PulsarActive {
                    *tile = TileKind::PulsarInactive;
                }
            }
        }
    }

    pub fn rows(&self) -> &[Vec<TileKind>] {
        &self.tiles
    }
}
