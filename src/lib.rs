//! Turn-based simulation core for a grid arcade game.
//!
//! The crate owns level generation, entity spawning, per-turn movement and
//! collision resolution, hazard cycling, and win/loss evaluation. Rendering
//! and input capture live outside: a front end drives
//! [`game::engine::Engine`] through its four movement calls and draws the
//! [`game::snapshot::Snapshot`] values the engine publishes back.

pub mod config;
pub mod game;
