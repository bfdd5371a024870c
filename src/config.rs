//! Session configuration
//!
//! Fixed at session start. Loaded from JSON (any missing field falls back to
//! the defaults in [`crate::consts`]) and validated before the first tick.

use std::collections::HashSet;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Key codes for each player, in up, down, left, right order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub players: [[u32; 4]; 2],
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            players: [PLAYER_0_KEYS, PLAYER_1_KEYS],
        }
    }
}

impl KeyBindings {
    /// Every bound code, player 0 first
    pub fn codes(&self) -> impl Iterator<Item = u32> + '_ {
        self.players.iter().flatten().copied()
    }
}

/// Everything a session needs to know up front
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: f32,
    pub height: f32,

    // === Physics (per tick) ===
    pub acceleration: f32,
    pub deceleration: f32,
    pub player_radius: f32,

    // === Timing ===
    pub tick_period_ms: u64,
    pub hazard_period_ms: u64,

    /// Starting positions, indexed by player
    pub spawn: [Vec2; 2],
    /// Hazard RNG seed
    pub seed: u64,
    pub bindings: KeyBindings,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,

            acceleration: ACCELERATION,
            deceleration: DECELERATION,
            player_radius: PLAYER_RADIUS,

            tick_period_ms: TICK_PERIOD_MS,
            hazard_period_ms: HAZARD_PERIOD_MS,

            spawn: [Vec2::new(SPAWN_X, SPAWN_Y); 2],
            seed: DEFAULT_SEED,
            bindings: KeyBindings::default(),
        }
    }
}

impl ArenaConfig {
    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Arena extent as a vector (width, height)
    #[inline]
    pub fn arena(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Reject anything that would make the physics undefined
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dimension_ok = |d: f32| d.is_finite() && d > 0.0;
        if !dimension_ok(self.width) || !dimension_ok(self.height) {
            return Err(ConfigError::InvalidArena {
                width: self.width,
                height: self.height,
            });
        }

        if self.tick_period_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        if self.hazard_period_ms == 0 {
            return Err(ConfigError::ZeroHazardPeriod);
        }

        if !self.player_radius.is_finite() || self.player_radius <= 0.0 {
            return Err(ConfigError::InvalidRadius(self.player_radius));
        }

        for (name, value) in [
            ("acceleration", self.acceleration),
            ("deceleration", self.deceleration),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidRate { name, value });
            }
        }

        for (player, p) in self.spawn.iter().enumerate() {
            let inside = (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y);
            if !inside {
                return Err(ConfigError::SpawnOutOfBounds {
                    player,
                    x: p.x,
                    y: p.y,
                });
            }
        }

        let mut seen = HashSet::new();
        for code in self.bindings.codes() {
            if !seen.insert(code) {
                return Err(ConfigError::DuplicateBinding(code));
            }
        }

        Ok(())
    }
}
