//! Game rendering system (terminal).
//!
//! A presentation sink that prints every published snapshot for the demo
//! loop.

use crate::game::snapshot::{PresentationSink, Snapshot};
use crate::game::types::TileKind;

/// Prints each snapshot to stdout as it is published.
pub struct TerminalSink;

impl PresentationSink for TerminalSink {
    fn publish(&mut self, snapshot: &Snapshot) {
        print_grid(snapshot);
        print_status(snapshot);
    }
}

/// Print the grid with entities drawn over their tiles.
pub fn print_grid(snapshot: &Snapshot) {
    for (y, row) in snapshot.tiles.iter().enumerate() {
        for (x, tile) in row.iter().enumerate() {
            let mut symbol = match tile {
                TileKind::Open => " .",
                TileKind::BlackHole => "()",
                TileKind::PulsarActive => "**",
                TileKind::PulsarInactive => "::",
            };

            // Player over alien over asteroid over tile.
            if snapshot.player.pos.x == x && snapshot.player.pos.y == y {
                symbol = "P ";
            } else if snapshot
                .aliens
                .iter()
                .flatten()
                .any(|a| a.pos.x == x && a.pos.y == y)
            {
                symbol = "A ";
            } else if snapshot
                .asteroids
                .iter()
                .flatten()
                .any(|a| a.pos.x == x && a.pos.y == y)
            {
                symbol = "o ";
            }

            print!("{:<3}", symbol);
        }
        println!();
    }
}

/// Print the turn counter and score line.
pub fn print_status(snapshot: &Snapshot) {
    println!("--- Turn {} ---", snapshot.turn_number);
    println!("Hull: {}", snapshot.player.hull);
    println!(
        "Points: {}  Levels cleared: {}",
        snapshot.points, snapshot.cleared
    );
    println!();
}
