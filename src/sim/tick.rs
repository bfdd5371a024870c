//! Fixed timestep simulation tick
//!
//! One transition per tick pulse: accelerate, decelerate, integrate with a
//! per-axis wall check, then take the latest laser.

use glam::Vec2;

use super::input::HeldInput;
use super::state::{GameState, Hazard, Player};

/// Physics constants for a session, lifted out of the config once
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Physics {
    pub acceleration: f32,
    pub deceleration: f32,
    /// Arena extent; positions live in [0, arena.x] x [0, arena.y]
    pub arena: Vec2,
}

impl From<&crate::config::ArenaConfig> for Physics {
    fn from(config: &crate::config::ArenaConfig) -> Self {
        Self {
            acceleration: config.acceleration,
            deceleration: config.deceleration,
            arena: config.arena(),
        }
    }
}

/// Add one unit of acceleration per held direction, in fixed order
pub fn accelerate(player: Player, index: usize, input: &HeldInput, acceleration: f32) -> Player {
    let vel = input
        .directions(index)
        .fold(player.vel, |vel, dir| vel + dir.unit() * acceleration);
    Player { vel, ..player }
}

/// Move one velocity component toward zero without crossing it
#[inline]
pub fn decelerate_axis(v: f32, deceleration: f32) -> f32 {
    if v.abs() <= deceleration {
        0.0
    } else {
        v - deceleration.copysign(v)
    }
}

/// Friction on both axes
pub fn decelerate(player: Player, deceleration: f32) -> Player {
    let vel = Vec2::new(
        decelerate_axis(player.vel.x, deceleration),
        decelerate_axis(player.vel.y, deceleration),
    );
    Player { vel, ..player }
}

/// Move by velocity; an axis whose new coordinate would leave the arena
/// keeps its old coordinate. Velocity is untouched.
pub fn integrate(player: Player, arena: Vec2) -> Player {
    let candidate = player.pos + player.vel;
    let x = if (0.0..=arena.x).contains(&candidate.x) {
        candidate.x
    } else {
        player.pos.x
    };
    let y = if (0.0..=arena.y).contains(&candidate.y) {
        candidate.y
    } else {
        player.pos.y
    };
    Player {
        pos: Vec2::new(x, y),
        ..player
    }
}

/// Advance the game state by one tick
///
/// `input` and `hazard` are the values observed at the pulse. The previous
/// state is left untouched.
pub fn tick(
    state: &GameState,
    input: &HeldInput,
    hazard: Option<Hazard>,
    physics: &Physics,
) -> GameState {
    let mut players = state.players;
    for (index, player) in players.iter_mut().enumerate() {
        let moved = accelerate(*player, index, input, physics.acceleration);
        let moved = decelerate(moved, physics.deceleration);
        *player = integrate(moved, physics.arena);
    }

    GameState {
        players,
        hazard,
        deaths: state.deaths,
        time_ticks: state.time_ticks + 1,
    }
}
