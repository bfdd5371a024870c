//! Laser Arena - a two-player arena with roaming laser hazards
//!
//! Core modules:
//! - `sim`: Deterministic simulation (input, hazards, physics, collisions)
//! - `session`: Single-threaded scheduler driving the simulation in logical time
//! - `config`: Session configuration and validation
//! - `error`: Configuration errors

pub mod config;
pub mod error;
pub mod session;
pub mod sim;

pub use config::{ArenaConfig, KeyBindings};
pub use error::ConfigError;
pub use session::{Session, SessionObserver, StepOutput, TickSource};

/// Default tuning constants
pub mod consts {
    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 1280.0;
    pub const ARENA_HEIGHT: f32 = 720.0;

    /// Velocity gained per tick for each held direction key
    pub const ACCELERATION: f32 = 2.0;
    /// Velocity lost per tick on each axis (friction), never crossing zero
    pub const DECELERATION: f32 = 1.0;

    /// Fixed simulation tick period
    pub const TICK_PERIOD_MS: u64 = 10;
    /// A new laser replaces the old one at this cadence
    pub const HAZARD_PERIOD_MS: u64 = 250;

    /// Player circle radius
    pub const PLAYER_RADIUS: f32 = 20.0;

    /// Both players start here
    pub const SPAWN_X: f32 = 400.0;
    pub const SPAWN_Y: f32 = 400.0;

    /// Hazard RNG seed used when none is configured
    pub const DEFAULT_SEED: u64 = 0x1a5e_4a12;

    /// Player 0: arrow keys (up, down, left, right)
    pub const PLAYER_0_KEYS: [u32; 4] = [38, 40, 37, 39];
    /// Player 1: W, S, A, D
    pub const PLAYER_1_KEYS: [u32; 4] = [87, 83, 65, 68];
}
