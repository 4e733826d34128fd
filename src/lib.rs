//! Fighter Fury: a fleet shooter.
//!
//! Core modules:
//! - `geometry`: float positions and the integer rects derived from them
//! - `entities`: projectiles, enemy units, the player craft
//! - `fleet`: grid construction and edge-triggered redirection
//! - `stats`: score, lives, level and the difficulty curve
//! - `compute`: the round controller (per-tick update, collisions, life loss)
//! - `input`: platform-neutral input events
//! - `settings`: static configuration

pub mod compute;
pub mod entities;
pub mod fleet;
pub mod geometry;
pub mod input;
pub mod settings;
pub mod stats;

pub use compute::{GameEvent, GameState};
pub use settings::{ConfigError, Orientation, Settings};
