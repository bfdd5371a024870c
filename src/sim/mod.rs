//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One transition per tick pulse
//! - Seeded RNG only
//! - Fixed iteration order (player index, then direction order)
//! - No rendering, timing or platform dependencies

pub mod collision;
pub mod hazard;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::{
    CollisionNotifier, Notification, circle_hits_segment, circles_overlap, segment_distance,
};
pub use hazard::{HazardGenerator, build_hazard};
pub use input::{
    Action, Direction, HeldInput, InputAggregator, KeyCode, KeyEdge, KeyEvent, KeyMap,
};
pub use state::{GameState, Hazard, PLAYER_COUNT, Player};
pub use tick::{Physics, accelerate, decelerate, decelerate_axis, integrate, tick};
