//! Read-only snapshots handed to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::config::game::{ALIEN_COUNT, ASTEROID_COUNT};
use crate::game::types::{Alien, Asteroid, GamePhase, Player, TileKind};

/// Immutable copy of the visible game state, published after startup and
/// after every completed turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Tile kinds, row-major: `tiles[y][x]`.
    pub tiles: Vec<Vec<TileKind>>,
    pub player: Player,
    pub aliens: [Option<Alien>; ALIEN_COUNT],
    pub asteroids: [Option<Asteroid>; ASTEROID_COUNT],
    pub points: i32,
    pub cleared: u32,
    pub turn_number: u32,
    pub phase: GamePhase,
}

/// Consumer of snapshots. The engine pushes one after startup and after each
/// completed turn; the sink has no other way back into the simulation than
/// the engine's four movement calls.
pub trait PresentationSink {
    fn publish(&mut self, snapshot: &Snapshot);
}
