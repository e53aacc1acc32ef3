//! Turn rules: asteroid collection and pulsar proximity damage.

use crate::config::game::{GRID_HEIGHT, GRID_WIDTH, PULSAR_BASE_DAMAGE};
use crate::game::error::GameError;
use crate::game::state::GameState;
use crate::game::types::{Position, TileKind};

/// Check the coordinate the player is moving onto against every live
/// asteroid. A match collects the asteroid: the slot empties, the player
/// scores a point, and the now-vacated tile may be moved onto.
pub fn collect_asteroid(state: &mut GameState, candidate: Position) -> bool {
    for slot in state.asteroids.iter_mut() {
        if let Some(asteroid) = slot {
            if asteroid.pos == candidate {
                *slot = None;
                state.points += 1;
                return true;
            }
        }
    }
    false
}

/// Damage the player for every active pulsar in the 3x3 neighborhood around
/// them. The neighborhood is clipped at the grid edges, not wrapped. Each
/// active tile deals the base damage plus one per cleared level, and hits
/// from multiple tiles stack.
pub fn pulsar_damage(state: &mut GameState) -> Result<(), GameError> {
    let Position { x, y } = state.player.pos;
    let x0 = x.saturating_sub(1);
    let y0 = y.saturating_sub(1);
    let x1 = (x + 1).min(GRID_WIDTH - 1);
    let y1 = (y + 1).min(GRID_HEIGHT - 1);

    for ny in y0..=y1 {
        for nx in x0..=x1 {
            if state.grid.kind_at(Position { x: nx, y: ny })? == TileKind::PulsarActive {
                state.player.hull -= PULSAR_BASE_DAMAGE + state.cleared as i32;
            }
        }
    }
    Ok(())
}
