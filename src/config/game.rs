//! Game configuration constants.
//!
//! This module defines the main gameplay parameters such as grid dimensions,
//! hazard generation chances, roster sizes, and turn cadences.

/// Width of the level grid, measured in tiles.
pub const GRID_WIDTH: usize = 25;

/// Height of the level grid, measured in tiles.
pub const GRID_HEIGHT: usize = 18;

/// Per-cell chance of a black hole replacing open space during level
/// generation. 1.0 is 100%, 0.0 is 0%.
pub const BLACK_HOLE_CHANCE: f64 = 0.07;

/// Per-cell chance of a dormant pulsar being written during the second
/// generation pass. Evaluated on the tile's then-current kind, so a pulsar
/// can land on top of a black hole.
pub const PULSAR_CHANCE: f64 = 0.03;

/// Number of alien slots per level.
pub const ALIEN_COUNT: usize = 3;

/// Number of asteroid slots per level.
pub const ASTEROID_COUNT: usize = 10;

/// Hull strength the player starts the game with.
pub const STARTING_HULL: i32 = 10;

/// Strength value stored on every alien.
pub const ALIEN_STRENGTH: u32 = 5;

/// Hull damage dealt by an alien sharing the player's tile.
pub const ALIEN_CONTACT_DAMAGE: i32 = 2;

/// Base hull damage per active pulsar tile near the player. Each cleared
/// level adds one on top.
pub const PULSAR_BASE_DAMAGE: i32 = 2;

/// Asteroids the player must collect to clear the current level.
pub const POINTS_TO_CLEAR: i32 = 5;

/// Length of the pulsar activation cycle, in turns. Pulsars switch on when
/// the turn number is a multiple of this.
pub const PULSAR_CYCLE: u32 = 20;

/// Offset within the pulsar cycle at which active pulsars switch off again.
pub const PULSAR_OFF_PHASE: u32 = 5;

/// Length of the asteroid movement cycle, in turns.
pub const ASTEROID_MOVE_CYCLE: u32 = 10;

/// Offset within the asteroid cycle on which asteroids drift.
pub const ASTEROID_MOVE_PHASE: u32 = 5;

/// Seed the demo binary runs with.
pub const DEFAULT_SEED: u64 = 911;
