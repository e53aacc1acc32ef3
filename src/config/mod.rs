//! Main configuration module.
//!
//! Re-exports the gameplay constants submodule.
pub mod game;
