use serde::{Deserialize, Serialize};

use crate::config::game::{ALIEN_STRENGTH, GRID_HEIGHT, GRID_WIDTH, STARTING_HULL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    /// One step in `direction`, or `None` when the step leaves the grid.
    pub fn stepped(self, direction: Direction) -> Option<Position> {
        match direction {
            Direction::Up => (self.y > 0).then(|| Position { x: self.x, y: self.y - 1 }),
            Direction::Down => {
                (self.y < GRID_HEIGHT - 1).then(|| Position { x: self.x, y: self.y + 1 })
            }
            Direction::Left => (self.x > 0).then(|| Position { x: self.x - 1, y: self.y }),
            Direction::Right => {
                (self.x < GRID_WIDTH - 1).then(|| Position { x: self.x + 1, y: self.y })
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Kind of a single grid cell. Open space is the only tile entities can rest
/// on; black holes block the player and destroy drifting asteroids; pulsars
/// alternate between dormant and active and burn the player at close range
/// while active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileKind {
    Open,
    BlackHole,
    PulsarActive,
    PulsarInactive,
}

impl TileKind {
    /// Everything except open space keeps asteroids (and non-wrapping
    /// players) out.
    pub fn is_hazard(self) -> bool {
        self != TileKind::Open
    }
}

/// Where the simulation stands. `LevelCleared` is passed through during a
/// level transition; `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    LevelCleared,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Position,
    /// Health counter. Uncapped on the way down; below 1 the game ends.
    pub hull: i32,
}

impl Player {
    pub fn new(pos: Position) -> Self {
        Self {
            pos,
            hull: STARTING_HULL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alien {
    pub pos: Position,
    pub strength: u32,
}

impl Alien {
    pub fn new(pos: Position) -> Self {
        Self {
            pos,
            strength: ALIEN_STRENGTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asteroid {
    pub pos: Position,
    /// The direction this asteroid drifts in on movement turns.
    pub direction: Direction,
}

impl Asteroid {
    pub fn new(pos: Position, direction: Direction) -> Self {
        Self { pos, direction }
    }
}
