//! Configuration errors
//!
//! The simulation itself has no failure modes. Everything that can go wrong
//! is caught here, before a session starts.

use thiserror::Error;

/// A fatal problem with the session configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Arena width or height is zero, negative or not finite.
    #[error("invalid arena dimensions: {width} x {height}")]
    InvalidArena { width: f32, height: f32 },

    #[error("tick period must be greater than zero")]
    ZeroTickPeriod,

    #[error("hazard period must be greater than zero")]
    ZeroHazardPeriod,

    #[error("player radius must be positive and finite, got {0}")]
    InvalidRadius(f32),

    /// Acceleration or deceleration is negative or not finite.
    #[error("invalid {name}: {value}")]
    InvalidRate { name: &'static str, value: f32 },

    /// Spawn point does not lie inside the arena.
    #[error("spawn point for player {player} ({x}, {y}) is outside the arena")]
    SpawnOutOfBounds { player: usize, x: f32, y: f32 },

    /// The same key code is bound to more than one action.
    #[error("key code {0} is bound more than once")]
    DuplicateBinding(u32),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
