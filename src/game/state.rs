use log::info;

use crate::config::game::{
    ALIEN_COUNT, ASTEROID_COUNT, ASTEROID_MOVE_CYCLE, ASTEROID_MOVE_PHASE, POINTS_TO_CLEAR,
    PULSAR_CYCLE, PULSAR_OFF_PHASE,
};
use crate::game::entities::{place_player, spawn_aliens, spawn_asteroids, spawn_player};
use crate::game::error::GameError;
use crate::game::grid::Grid;
use crate::game::rng::GameRng;
use crate::game::snapshot::Snapshot;
use crate::game::systems::{move_aliens, move_asteroids, move_player, pulsar_damage};
use crate::game::types::{Alien, Asteroid, Direction, GamePhase, Player, Position};

/// Complete simulation state for one run: the level grid, its spawn pool, the
/// entity rosters, the score counters, and the seeded random source behind
/// every random decision. All mutation happens in place, synchronously, one
/// turn at a time.
#[derive(Debug, Clone)]
pub struct GameState {
    pub grid: Grid,
    /// Open coordinates still available to claiming spawn operations.
    /// Rebuilt at every level start, drained as tiles are claimed.
    pub spawns: Vec<Position>,
    pub player: Player,
    /// Fixed alien roster; `None` slots are inert for the level.
    pub aliens: [Option<Alien>; ALIEN_COUNT],
    /// Fixed asteroid roster; `None` slots were collected and are skipped.
    pub asteroids: [Option<Asteroid>; ASTEROID_COUNT],
    /// Asteroids collected this level. Goes negative when aliens undo the
    /// player's work faster than they collect.
    pub points: i32,
    /// Levels completed so far. Feeds pulsar damage scaling.
    pub cleared: u32,
    /// Drives the pulsar and asteroid cadences. Never reset.
    pub turn_number: u32,
    pub phase: GamePhase,
    pub rng: GameRng,
}

impl GameState {
    /// Start a game: generate the first level and place every entity.
    pub fn new(seed: u64) -> Result<Self, GameError> {
        let mut rng = GameRng::new(seed);
        let grid = Grid::generate(&mut rng);
        let mut spawns = grid.open_positions();
        let asteroids = spawn_asteroids(&mut spawns, &mut rng)?;
        let aliens = spawn_aliens(&spawns, &mut rng)?;
        let player = spawn_player(&mut spawns, &mut rng)?;
        Ok(GameState {
            grid,
            spawns,
            player,
            aliens,
            asteroids,
            points: 0,
            cleared: 0,
            turn_number: 1,
            phase: GamePhase::Playing,
            rng,
        })
    }

    /// Apply one movement request. Collection, and the level transition a
    /// final collection triggers, resolve inside this call.
    pub fn apply_player_action(&mut self, direction: Direction) -> Result<(), GameError> {
        if self.phase != GamePhase::Playing {
            return Ok(());
        }
        move_player(self, direction)?;
        Ok(())
    }

    /// Advance one turn after the player has acted: hazard cycling, entity
    /// movement, damage, then the loss and level-clear checks, in that order.
    pub fn next_turn(&mut self) -> Result<GamePhase, GameError> {
        if self.phase != GamePhase::Playing {
            return Ok(self.phase);
        }

        if self.turn_number % PULSAR_CYCLE == 0 {
            self.grid.activate_pulsars();
        }
        if self.turn_number % PULSAR_CYCLE == PULSAR_OFF_PHASE {
            self.grid.deactivate_pulsars();
        }
        if self.turn_number % ASTEROID_MOVE_CYCLE == ASTEROID_MOVE_PHASE {
            move_asteroids(self)?;
        }
        move_aliens(self)?;
        pulsar_damage(self)?;

        if self.player.hull < 1 {
            info!("hull depleted on turn {}", self.turn_number);
            self.phase = GamePhase::GameOver;
            return Ok(self.phase);
        }
        if self.points >= POINTS_TO_CLEAR {
            self.new_level()?;
        }
        self.turn_number += 1;
        Ok(self.phase)
    }

    /// Swap in a freshly generated level. The player (and their hull) and the
    /// running turn counter carry over; everything else is rebuilt.
    pub fn new_level(&mut self) -> Result<(), GameError> {
        self.phase = GamePhase::LevelCleared;
        self.cleared += 1;
        self.points = 0;
        self.grid = Grid::generate(&mut self.rng);
        self.spawns = self.grid.open_positions();
        self.asteroids = spawn_asteroids(&mut self.spawns, &mut self.rng)?;
        self.aliens = spawn_aliens(&self.spawns, &mut self.rng)?;
        place_player(&mut self.player, &mut self.spawns, &mut self.rng)?;
        info!("level cleared, {} so far", self.cleared);
        self.phase = GamePhase::Playing;
        Ok(())
    }

    /// Read-only copy of everything a presentation layer needs to draw.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tiles: self.grid.rows().to_vec(),
            player: self.player,
            aliens: self.aliens,
            asteroids: self.asteroids,
            points: self.points,
            cleared: self.cleared,
            turn_number: self.turn_number,
            phase: self.phase,
        }
    }
}
