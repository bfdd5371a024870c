//! Laser hazard generation
//!
//! One candidate point per arena side, two of the four picked uniformly
//! without replacement. Seeded, so a session replays identically.

use glam::Vec2;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::Hazard;

/// Build a laser spanning two different sides of a `size.x` by `size.y` arena
pub fn build_hazard<R: Rng + ?Sized>(rng: &mut R, size: Vec2) -> Hazard {
    loop {
        let candidates = [
            Vec2::new(0.0, rng.random_range(0.0..=size.y)),
            Vec2::new(rng.random_range(0.0..=size.x), 0.0),
            Vec2::new(rng.random_range(0.0..=size.x), size.y),
            Vec2::new(size.x, rng.random_range(0.0..=size.y)),
        ];
        let picked = index::sample(rng, candidates.len(), 2);
        if let Some(hazard) = distinct_pair(candidates[picked.index(0)], candidates[picked.index(1)])
        {
            return hazard;
        }
    }
}

/// Two sides meeting at a corner can both land on it; such a pair is redrawn
#[inline]
fn distinct_pair(p1: Vec2, p2: Vec2) -> Option<Hazard> {
    (p1 != p2).then(|| Hazard::new(p1, p2))
}

/// Produces a fresh laser on every pulse, keeping only the newest
#[derive(Debug, Clone)]
pub struct HazardGenerator {
    rng: Pcg32,
    arena: Vec2,
    current: Option<Hazard>,
    spawned: u64,
}

impl HazardGenerator {
    pub fn new(seed: u64, arena: Vec2) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            arena,
            current: None,
            spawned: 0,
        }
    }

    /// Replace the current laser with a new random one
    pub fn spawn(&mut self) -> Hazard {
        let hazard = build_hazard(&mut self.rng, self.arena);
        self.spawned += 1;
        log::trace!(
            "Laser #{} from ({:.1}, {:.1}) to ({:.1}, {:.1})",
            self.spawned,
            hazard.p1.x,
            hazard.p1.y,
            hazard.p2.x,
            hazard.p2.y
        );
        self.current = Some(hazard);
        hazard
    }

    /// Overwrite the current laser (scripted sessions)
    pub fn set(&mut self, hazard: Option<Hazard>) {
        self.current = hazard;
    }

    /// Latest laser, `None` before the first pulse
    #[inline]
    pub fn current(&self) -> Option<Hazard> {
        self.current
    }

    /// Number of random lasers produced so far
    pub fn spawned(&self) -> u64 {
        self.spawned
    }
}
