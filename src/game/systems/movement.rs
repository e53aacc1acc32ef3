//! Movement systems for the player, aliens, and asteroids.
//!
//! The three movers handle grid edges differently on purpose: the player
//! wraps unconditionally, aliens get teleported off edges by an override that
//! runs after their gated step, and asteroids never wrap at all.

use crate::config::game::{
    ALIEN_CONTACT_DAMAGE, ALIEN_COUNT, ASTEROID_COUNT, GRID_HEIGHT, GRID_WIDTH, POINTS_TO_CLEAR,
};
use crate::game::error::GameError;
use crate::game::state::GameState;
use crate::game::systems::rules::collect_asteroid;
use crate::game::types::{Asteroid, Direction, Position, TileKind};

/// Move the player one tile, resolving wraparound, collection, and the tile
/// openness gate. Returns whether an asteroid was collected.
pub fn move_player(state: &mut GameState, direction: Direction) -> Result<bool, GameError> {
    let Position { x, y } = state.player.pos;

    // Stepping past an edge wraps to the opposite edge and always lands,
    // whatever the destination tile holds. Non-wrap steps are gated below.
    let (candidate, wrapped) = match direction {
        Direction::Left if x == 0 => (Position { x: GRID_WIDTH - 1, y }, true),
        Direction::Left => (Position { x: x - 1, y }, false),
        Direction::Right if x == GRID_WIDTH - 1 => (Position { x: 0, y }, true),
        Direction::Right => (Position { x: x + 1, y }, false),
        Direction::Up if y == 0 => (Position { x, y: GRID_HEIGHT - 1 }, true),
        Direction::Up => (Position { x, y: y - 1 }, false),
        Direction::Down if y == GRID_HEIGHT - 1 => (Position { x, y: 0 }, true),
        Direction::Down => (Position { x, y: y + 1 }, false),
    };

    let collected = collect_asteroid(state, candidate);
    if collected && state.points >= POINTS_TO_CLEAR {
        // The final collection swaps in a whole new level before this call
        // returns; the candidate coordinate belongs to the old grid and must
        // not be applied to the freshly placed player.
        state.new_level()?;
        return Ok(true);
    }

    if wrapped || collected || state.grid.kind_at(candidate)? == TileKind::Open {
        state.player.pos = candidate;
    }
    Ok(collected)
}

/// Move every live alien, then apply contact damage and asteroid bumps.
pub fn move_aliens(state: &mut GameState) -> Result<(), GameError> {
    for k in 0..ALIEN_COUNT {
        if state.aliens[k].is_some() {
            move_alien(state, k)?;
        }
    }
    Ok(())
}

/// One alien's turn: a random gated step, the edge override, then contact
/// checks at the final coordinate.
fn move_alien(state: &mut GameState, k: usize) -> Result<(), GameError> {
    let Some(mut alien) = state.aliens[k] else {
        return Ok(());
    };
    let Position { mut x, mut y } = alien.pos;

    // The step itself only lands on an open tile and never wraps.
    match state.rng.direction() {
        Direction::Right if x < GRID_WIDTH - 1 && state.grid.is_open(Position { x: x + 1, y }) => {
            x += 1;
        }
        Direction::Left if x > 0 && state.grid.is_open(Position { x: x - 1, y }) => {
            x -= 1;
        }
        Direction::Down if y < GRID_HEIGHT - 1 && state.grid.is_open(Position { x, y: y + 1 }) => {
            y += 1;
        }
        Direction::Up if y > 0 && state.grid.is_open(Position { x, y: y - 1 }) => {
            y -= 1;
        }
        _ => {}
    }

    // Edge override: an alien standing on an edge after its step teleports to
    // the opposite edge, open tile or not, whether or not the step landed.
    // High edge is checked first; the checks are mutually exclusive per axis.
    if x == GRID_WIDTH - 1 {
        x = 0;
    } else if x == 0 {
        x = GRID_WIDTH - 1;
    }
    if y == GRID_HEIGHT - 1 {
        y = 0;
    } else if y == 0 {
        y = GRID_HEIGHT - 1;
    }

    alien.pos = Position { x, y };
    state.aliens[k] = Some(alien);

    // Contact damage at the alien's final coordinate.
    if alien.pos == state.player.pos {
        state.player.hull -= ALIEN_CONTACT_DAMAGE;
    }

    // An alien plowing through an asteroid knocks it to a fresh pool tile and
    // costs the player a point. The asteroid itself survives.
    for a in 0..ASTEROID_COUNT {
        let Some(asteroid) = state.asteroids[a] else {
            continue;
        };
        if asteroid.pos == alien.pos {
            state.points -= 1;
            let pos = state.rng.pick(&state.spawns)?;
            state.asteroids[a] = Some(Asteroid { pos, ..asteroid });
        }
    }
    Ok(())
}

/// Move every live asteroid one tile along its stored direction. A step that
/// leaves the grid or lands on any hazardous tile relocates the asteroid to a
/// fresh pool draw instead; its direction is unchanged either way.
pub fn move_asteroids(state: &mut GameState) -> Result<(), GameError> {
    for k in 0..ASTEROID_COUNT {
        let Some(asteroid) = state.asteroids[k] else {
            continue;
        };
        let pos = match asteroid.pos.stepped(asteroid.direction) {
            Some(next) if state.grid.is_open(next) => next,
            _ => state.rng.pick(&state.spawns)?,
        };
        state.asteroids[k] = Some(Asteroid { pos, ..asteroid });
    }
    Ok(())
}
