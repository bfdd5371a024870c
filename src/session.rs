//! Session scheduler
//!
//! Owns the leaves (input, laser generator, tick source) and the current
//! state. Everything runs on the caller's thread: `advance_to` fires due
//! timer pulses one at a time in timestamp order, and each tick reads the
//! input and laser exactly as they stand at that pulse.

use crate::config::ArenaConfig;
use crate::error::ConfigError;
use crate::sim::{
    CollisionNotifier, GameState, Hazard, HazardGenerator, InputAggregator, KeyEvent,
    Notification, Physics, tick,
};

/// Fixed-cadence pulse in logical milliseconds
///
/// The first pulse fires one full period after start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSource {
    period_ms: u64,
    next_due_ms: u64,
}

impl TickSource {
    /// `None` for a zero period, which would pulse forever at one instant
    pub fn new(period_ms: u64) -> Option<Self> {
        (period_ms > 0).then_some(Self {
            period_ms,
            next_due_ms: period_ms,
        })
    }

    #[inline]
    pub fn next_due(&self) -> u64 {
        self.next_due_ms
    }

    /// Whether a pulse is due at or before `now_ms`
    #[inline]
    pub fn is_due(&self, now_ms: u64) -> bool {
        self.next_due_ms <= now_ms
    }

    /// Consume the next pulse if due, returning its timestamp
    pub fn poll(&mut self, now_ms: u64) -> Option<u64> {
        if !self.is_due(now_ms) {
            return None;
        }
        let at = self.next_due_ms;
        self.next_due_ms += self.period_ms;
        Some(at)
    }
}

/// Output of one tick
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutput {
    /// The published snapshot, deaths from this tick included
    pub state: GameState,
    pub notifications: Vec<Notification>,
}

/// Renderers and scorekeepers hook in here
pub trait SessionObserver {
    fn on_state(&mut self, _state: &GameState) {}
    fn on_notification(&mut self, _notification: Notification) {}
}

/// A running two-player session
pub struct Session {
    config: ArenaConfig,
    physics: Physics,
    notifier: CollisionNotifier,

    input: InputAggregator,
    hazards: HazardGenerator,
    ticks: TickSource,
    hazard_clock: TickSource,

    state: GameState,
    now_ms: u64,
    running: bool,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl Session {
    /// Validate `config` and set up players on their spawn points
    pub fn new(config: ArenaConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let ticks = TickSource::new(config.tick_period_ms).ok_or(ConfigError::ZeroTickPeriod)?;
        let hazard_clock =
            TickSource::new(config.hazard_period_ms).ok_or(ConfigError::ZeroHazardPeriod)?;

        log::info!(
            "Session starting: arena {}x{}, tick {}ms, laser every {}ms, seed {}",
            config.width,
            config.height,
            config.tick_period_ms,
            config.hazard_period_ms,
            config.seed
        );

        Ok(Self {
            physics: Physics::from(&config),
            notifier: CollisionNotifier::new(config.player_radius),
            input: InputAggregator::new(&config.bindings),
            hazards: HazardGenerator::new(config.seed, config.arena()),
            ticks,
            hazard_clock,
            state: GameState::new(&config),
            now_ms: 0,
            running: true,
            observers: Vec::new(),
            config,
        })
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Latest published snapshot
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Logical time reached so far
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn add_observer(&mut self, observer: Box<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    /// Apply a key edge at the current logical time
    pub fn handle_key(&mut self, event: KeyEvent) -> bool {
        if !self.running {
            return false;
        }
        self.input.apply(event)
    }

    /// Run pulses up to `at_ms`, then apply a key edge
    pub fn handle_key_at(&mut self, at_ms: u64, event: KeyEvent) -> Vec<StepOutput> {
        let outputs = self.advance_to(at_ms);
        self.handle_key(event);
        outputs
    }

    /// Replace the generator's current laser until its next pulse
    pub fn set_hazard(&mut self, hazard: Option<Hazard>) {
        self.hazards.set(hazard);
    }

    /// Fire every pulse due up to and including `now_ms`
    ///
    /// A laser pulse sharing a timestamp with a tick goes first, so that
    /// tick already sees the new laser.
    pub fn advance_to(&mut self, now_ms: u64) -> Vec<StepOutput> {
        let mut outputs = Vec::new();
        if !self.running || now_ms < self.now_ms {
            return outputs;
        }

        loop {
            let hazard_due = self.hazard_clock.is_due(now_ms);
            let tick_due = self.ticks.is_due(now_ms);

            if hazard_due && (!tick_due || self.hazard_clock.next_due() <= self.ticks.next_due())
            {
                if let Some(at) = self.hazard_clock.poll(now_ms) {
                    self.now_ms = at;
                    self.hazards.spawn();
                }
            } else if let Some(at) = self.ticks.poll(now_ms) {
                self.now_ms = at;
                outputs.push(self.transition());
            } else {
                break;
            }
        }

        self.now_ms = now_ms;
        outputs
    }

    /// One transition from the current snapshot, outside the clock.
    /// `None` once the session has been shut down.
    pub fn step(&mut self) -> Option<StepOutput> {
        if !self.running {
            return None;
        }
        Some(self.transition())
    }

    fn transition(&mut self) -> StepOutput {
        let input = self.input.snapshot();
        let hazard = self.hazards.current();

        let next = tick(&self.state, &input, hazard, &self.physics);
        let (next, notifications) = self.notifier.notify(next);

        log::debug!(
            "tick {} @{}ms: p0 ({:.1}, {:.1}) p1 ({:.1}, {:.1}), {} notification(s)",
            next.time_ticks,
            self.now_ms,
            next.players[0].pos.x,
            next.players[0].pos.y,
            next.players[1].pos.x,
            next.players[1].pos.y,
            notifications.len()
        );

        for observer in &mut self.observers {
            observer.on_state(&next);
            for notification in &notifications {
                observer.on_notification(*notification);
            }
        }

        self.state = next.clone();
        StepOutput {
            state: next,
            notifications,
        }
    }

    /// Stop the session; further pulses, steps and key edges are ignored
    pub fn shutdown(&mut self) {
        if self.running {
            log::info!(
                "Session stopped at {}ms after {} ticks, deaths {:?}",
                self.now_ms,
                self.state.time_ticks,
                self.state.deaths
            );
        }
        self.running = false;
        self.input.release_all();
        self.observers.clear();
    }
}
