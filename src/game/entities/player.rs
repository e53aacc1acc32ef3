//! Player spawning and level placement.

use log::warn;

use crate::game::error::GameError;
use crate::game::rng::GameRng;
use crate::game::types::{Player, Position};

/// Spawn the player on a random open tile, claiming it from the pool.
pub fn spawn_player(spawns: &mut Vec<Position>, rng: &mut GameRng) -> Result<Player, GameError> {
    if spawns.is_empty() {
        warn!("no open tile left to place the player");
    }
    let pos = rng.claim(spawns)?;
    Ok(Player::new(pos))
}

/// Reposition the surviving player on a freshly generated level. Hull
/// strength carries over; only the coordinate changes.
pub fn place_player(
    player: &mut Player,
    spawns: &mut Vec<Position>,
    rng: &mut GameRng,
) -> Result<(), GameError> {
    if spawns.is_empty() {
        warn!("no open tile left to place the player");
    }
    player.pos = rng.claim(spawns)?;
    Ok(())
}
