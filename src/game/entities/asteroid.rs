//! Asteroid spawning.

use log::warn;

use crate::config::game::ASTEROID_COUNT;
use crate::game::error::GameError;
use crate::game::rng::GameRng;
use crate::game::types::{Asteroid, Position};

/// Place the full roster of asteroids, claiming one pool tile each so no two
/// asteroids start on the same coordinate. Each asteroid gets a random drift
/// direction it keeps for the rest of the level.
pub fn spawn_asteroids(
    spawns: &mut Vec<Position>,
    rng: &mut GameRng,
) -> Result<[Option<Asteroid>; ASTEROID_COUNT], GameError> {
    let mut asteroids = [None; ASTEROID_COUNT];
    for slot in asteroids.iter_mut() {
        if spawns.is_empty() {
            warn!("spawn pool exhausted while placing asteroids");
        }
        let pos = rng.claim(spawns)?;
        let direction = rng.direction();
        *slot = Some(Asteroid::new(pos, direction));
    }
    Ok(asteroids)
}
