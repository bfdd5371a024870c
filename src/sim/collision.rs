//! Collision detection between players and the laser
//!
//! Both tests are strict: touching exactly at the threshold is a miss.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GameState, Hazard};

/// Raised by the notifier after each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Notification {
    /// The two players overlap
    Collision,
    /// A player touched the laser
    Death { player: usize },
}

/// Two circles of `radius` overlap
#[inline]
pub fn circles_overlap(a: Vec2, b: Vec2, radius: f32) -> bool {
    a.distance(b) < 2.0 * radius
}

/// Shortest distance from `point` to the segment `a`-`b`
pub fn segment_distance(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let line_vec = b - a;
    let line_len_sq = line_vec.length_squared();

    if line_len_sq == 0.0 {
        return point.distance(a); // Degenerate segment
    }

    let t = ((point - a).dot(line_vec) / line_len_sq).clamp(0.0, 1.0);
    let closest = a + line_vec * t;
    point.distance(closest)
}

/// A circle at `center` crosses the laser
#[inline]
pub fn circle_hits_segment(center: Vec2, radius: f32, hazard: &Hazard) -> bool {
    segment_distance(center, hazard.p1, hazard.p2) < radius
}

/// Checks a freshly produced state and records deaths
#[derive(Debug, Clone, Copy)]
pub struct CollisionNotifier {
    radius: f32,
}

impl CollisionNotifier {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }

    /// Notifications for `state`: at most one collision, then one death per
    /// player touching the laser in player order
    pub fn detect(&self, state: &GameState) -> Vec<Notification> {
        let [a, b] = &state.players;
        let mut notifications = Vec::new();

        if circles_overlap(a.pos, b.pos, self.radius) {
            notifications.push(Notification::Collision);
        }

        if let Some(hazard) = &state.hazard {
            for (player, p) in state.players.iter().enumerate() {
                if circle_hits_segment(p.pos, self.radius, hazard) {
                    notifications.push(Notification::Death { player });
                }
            }
        }

        notifications
    }

    /// Detect, then count each death into the returned state
    pub fn notify(&self, mut state: GameState) -> (GameState, Vec<Notification>) {
        let notifications = self.detect(&state);
        for notification in &notifications {
            match *notification {
                Notification::Death { player } => {
                    state.deaths[player] = state.deaths[player].saturating_add(1);
                    log::info!("Player {} died (total {})", player, state.deaths[player]);
                }
                Notification::Collision => log::info!("Players collided"),
            }
        }
        (state, notifications)
    }
}
