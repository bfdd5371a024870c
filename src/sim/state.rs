//! Game state and core simulation types
//!
//! A `GameState` is a snapshot: the engine derives the next one from the
//! previous one and never mutates a published value.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::ArenaConfig;

/// Number of players in a session
pub const PLAYER_COUNT: usize = 2;

/// A circular avatar
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
}

impl Player {
    /// A player at rest
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
        }
    }
}

/// A laser: a segment between two points on the arena boundary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub p1: Vec2,
    pub p2: Vec2,
}

impl Hazard {
    pub fn new(p1: Vec2, p2: Vec2) -> Self {
        Self { p1, p2 }
    }
}

/// Complete game state for one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Indexed by player; index 0 and 1 keep their key sets for the session
    pub players: [Player; PLAYER_COUNT],
    /// The active laser, if one has spawned yet
    pub hazard: Option<Hazard>,
    /// Death count per player
    pub deaths: [u32; PLAYER_COUNT],
    /// Transitions applied so far
    pub time_ticks: u64,
}

impl GameState {
    /// Initial state: players at rest on their spawn points, no laser
    pub fn new(config: &ArenaConfig) -> Self {
        Self {
            players: config.spawn.map(Player::at),
            hazard: None,
            deaths: [0; PLAYER_COUNT],
            time_ticks: 0,
        }
    }

    /// Serialize for an external renderer
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_from_config() {
        let config = ArenaConfig::default();
        let state = GameState::new(&config);
        assert_eq!(state.players[0], Player::at(Vec2::new(400.0, 400.0)));
        assert_eq!(state.players[1].vel, Vec2::ZERO);
        assert!(state.hazard.is_none());
        assert_eq!(state.deaths, [0, 0]);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_json_snapshot_shape() {
        let mut state = GameState::new(&ArenaConfig::default());
        state.hazard = Some(Hazard::new(Vec2::new(0.0, 300.0), Vec2::new(1280.0, 300.0)));

        let json = state.to_json().expect("serializable");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["players"].as_array().map(|p| p.len()), Some(2));
        assert_eq!(value["hazard"]["p2"][0], 1280.0);
        assert_eq!(value["deaths"][1], 0);

        let back: GameState = serde_json::from_str(&json).expect("round trip");
        assert_eq!(back, state);
    }
}
