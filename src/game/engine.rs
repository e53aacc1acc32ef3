//! The simulation engine: four discrete turn requests in, snapshots out.

use crate::game::error::GameError;
use crate::game::snapshot::PresentationSink;
use crate::game::state::GameState;
use crate::game::types::{Direction, GamePhase};

/// Owns the game state and a presentation sink. Each movement request runs
/// exactly one synchronous turn to completion and publishes the resulting
/// snapshot; once the game is over, further requests are ignored.
pub struct Engine<S: PresentationSink> {
    state: GameState,
    sink: S,
}

impl<S: PresentationSink> Engine<S> {
    /// Start a game from a seed and publish the initial snapshot.
    pub fn new(seed: u64, sink: S) -> Result<Self, GameError> {
        Ok(Self::from_state(GameState::new(seed)?, sink))
    }

    /// Wrap an already-built state, publishing its snapshot as the starting
    /// point.
    pub fn from_state(state: GameState, mut sink: S) -> Self {
        sink.publish(&state.snapshot());
        Engine { state, sink }
    }

    pub fn move_left(&mut self) -> Result<GamePhase, GameError> {
        self.turn(Direction::Left)
    }

    pub fn move_right(&mut self) -> Result<GamePhase, GameError> {
        self.turn(Direction::Right)
    }

    pub fn move_up(&mut self) -> Result<GamePhase, GameError> {
        self.turn(Direction::Up)
    }

    pub fn move_down(&mut self) -> Result<GamePhase, GameError> {
        self.turn(Direction::Down)
    }

    fn turn(&mut self, direction: Direction) -> Result<GamePhase, GameError> {
        if self.state.phase != GamePhase::Playing {
            return Ok(self.state.phase);
        }
        self.state.apply_player_action(direction)?;
        let phase = self.state.next_turn()?;
        self.sink.publish(&self.state.snapshot());
        Ok(phase)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
