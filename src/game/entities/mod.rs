//! Game entities module.
//!
//! Spawning logic for the player, aliens, and asteroids. Every placement
//! draws from the level's spawn pool of open tiles; operations that claim
//! their tile remove it from the pool so nothing else starts there.

pub mod alien;
pub mod asteroid;
pub mod player;

pub use alien::*;
pub use asteroid::*;
pub use player::*;
