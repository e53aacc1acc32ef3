//! Alien spawning.

use crate::config::game::ALIEN_COUNT;
use crate::game::error::GameError;
use crate::game::rng::GameRng;
use crate::game::types::{Alien, Position};

/// Place the full roster of aliens on random open tiles.
///
/// Alien placement reads the pool without shrinking it: two aliens may share
/// a tile, and a later claiming spawn may still take a tile an alien stands
/// on.
pub fn spawn_aliens(
    spawns: &[Position],
    rng: &mut GameRng,
) -> Result<[Option<Alien>; ALIEN_COUNT], GameError> {
    let mut aliens = [None; ALIEN_COUNT];
    for slot in aliens.iter_mut() {
        let pos = rng.pick(spawns)?;
        *slot = Some(Alien::new(pos));
    }
    Ok(aliens)
}
