//! Keyboard input aggregation
//!
//! Raw key edges come in one at a time; the engine only ever sees a
//! [`HeldInput`] snapshot taken at tick time.

use std::collections::{BTreeSet, HashMap};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::PLAYER_COUNT;
use crate::config::KeyBindings;

/// A normalized key code
pub type KeyCode = u32;

/// Press or release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyEdge {
    Down,
    Up,
}

/// A single key edge from the input feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub edge: KeyEdge,
}

impl KeyEvent {
    pub const fn down(code: KeyCode) -> Self {
        Self {
            code,
            edge: KeyEdge::Down,
        }
    }

    pub const fn up(code: KeyCode) -> Self {
        Self {
            code,
            edge: KeyEdge::Up,
        }
    }
}

/// Logical movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Fixed application order; also the order of codes in [`KeyBindings`]
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector in screen coordinates (+Y is down)
    #[inline]
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::NEG_Y,
            Direction::Down => Vec2::Y,
            Direction::Left => Vec2::NEG_X,
            Direction::Right => Vec2::X,
        }
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// What a bound key does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Action {
    pub player: usize,
    pub direction: Direction,
}

/// Static code -> action table, built once from the bindings
#[derive(Debug, Clone)]
pub struct KeyMap {
    actions: HashMap<KeyCode, Action>,
}

impl KeyMap {
    pub fn new(bindings: &KeyBindings) -> Self {
        let mut actions = HashMap::new();
        for (player, codes) in bindings.players.iter().enumerate() {
            for (direction, &code) in Direction::ALL.into_iter().zip(codes) {
                actions.insert(code, Action { player, direction });
            }
        }
        Self { actions }
    }

    /// `None` for codes that are not movement keys
    #[inline]
    pub fn resolve(&self, code: KeyCode) -> Option<Action> {
        self.actions.get(&code).copied()
    }
}

/// Which directions each player is holding at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeldInput {
    held: [[bool; 4]; PLAYER_COUNT],
}

impl HeldInput {
    /// Nothing held
    pub fn none() -> Self {
        Self::default()
    }

    /// Mark a direction as held. Out-of-range player indices are ignored.
    pub fn with(mut self, player: usize, direction: Direction) -> Self {
        if let Some(row) = self.held.get_mut(player) {
            row[direction.index()] = true;
        }
        self
    }

    /// `false` for out-of-range player indices
    #[inline]
    pub fn is_held(&self, player: usize, direction: Direction) -> bool {
        self.held
            .get(player)
            .is_some_and(|row| row[direction.index()])
    }

    /// Held directions for one player, in [`Direction::ALL`] order
    pub fn directions(&self, player: usize) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .into_iter()
            .filter(move |&d| self.is_held(player, d))
    }
}

/// Tracks which movement keys are currently down
#[derive(Debug, Clone)]
pub struct InputAggregator {
    keymap: KeyMap,
    held: BTreeSet<KeyCode>,
}

impl InputAggregator {
    pub fn new(bindings: &KeyBindings) -> Self {
        Self {
            keymap: KeyMap::new(bindings),
            held: BTreeSet::new(),
        }
    }

    /// Apply one edge. Unrecognized codes are dropped; returns whether the
    /// held set changed.
    pub fn apply(&mut self, event: KeyEvent) -> bool {
        if self.keymap.resolve(event.code).is_none() {
            log::trace!("Ignoring unbound key {}", event.code);
            return false;
        }
        match event.edge {
            KeyEdge::Down => self.held.insert(event.code),
            KeyEdge::Up => self.held.remove(&event.code),
        }
    }

    /// Currently held codes, ascending
    pub fn held_codes(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.held.iter().copied()
    }

    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// Snapshot the held set, partitioned per player
    pub fn snapshot(&self) -> HeldInput {
        self.held
            .iter()
            .filter_map(|&code| self.keymap.resolve(code))
            .fold(HeldInput::none(), |input, action| {
                input.with(action.player, action.direction)
            })
    }
}
