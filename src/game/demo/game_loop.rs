//! Standalone game loop for local play.
//!
//! This module provides an interactive loop for playing the game in the
//! terminal.

use std::io::{self, Write};

use crate::config::game::DEFAULT_SEED;
use crate::game::demo::render::TerminalSink;
use crate::game::engine::Engine;
use crate::game::error::GameError;
use crate::game::types::{Direction, GamePhase};

/// Prompt the user for a movement direction.
fn get_player_input() -> Option<Direction> {
    print!("Enter direction (← ↑ ↓ →), then press Enter: ");
    io::stdout().flush().unwrap();

    let mut input = String::new();
    io::stdin().read_line(&mut input).unwrap();

    match input.trim() {
        "\x1b[D" => Some(Direction::Left),
        "\x1b[C" => Some(Direction::Right),
        "\x1b[A" => Some(Direction::Up),
        "\x1b[B" => Some(Direction::Down),
        _ => None,
    }
}

/// Run the demo game until the hull gives out.
pub fn run_game_loop() -> Result<(), GameError> {
    let mut engine = Engine::new(DEFAULT_SEED, TerminalSink)?;

    println!("Game start!");
    loop {
        let Some(direction) = get_player_input() else {
            continue;
        };
        let phase = match direction {
            Direction::Left => engine.move_left()?,
            Direction::Right => engine.move_right()?,
            Direction::Up => engine.move_up()?,
            Direction::Down => engine.move_down()?,
        };
        if phase == GamePhase::GameOver {
            println!("Hull breached. Game over!");
            break;
        }
    }
    Ok(())
}
