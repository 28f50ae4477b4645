//! Seeded scripted player for headless matches

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::presentation::InputEvent;

/// Per-tick probability of pressing each key
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutopilotProfile {
    pub spawn_chance: f64,
    pub fire_chance: f64,
    pub level_up_chance: f64,
}

impl AutopilotProfile {
    /// Probabilities are clamped to `0.0..=1.0`; non-finite values become zero.
    pub fn new(spawn_chance: f64, fire_chance: f64, level_up_chance: f64) -> Self {
        Self {
            spawn_chance: sanitize(spawn_chance),
            fire_chance: sanitize(fire_chance),
            level_up_chance: sanitize(level_up_chance),
        }
    }
}

impl Default for AutopilotProfile {
    fn default() -> Self {
        Self::new(0.05, 0.01, 0.005)
    }
}

fn sanitize(chance: f64) -> f64 {
    if chance.is_finite() {
        chance.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: ChaCha8Rng,
    profile: AutopilotProfile,
}

impl Autopilot {
    pub fn with_seed(profile: AutopilotProfile, seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            profile,
        }
    }

    /// Keys pressed this tick. Never quits.
    pub fn next_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        if self.rng.gen_bool(self.profile.level_up_chance) {
            events.push(InputEvent::LevelUpRequested);
        }
        if self.rng.gen_bool(self.profile.spawn_chance) {
            events.push(InputEvent::SpawnFriendlyRequested);
        }
        if self.rng.gen_bool(self.profile.fire_chance) {
            events.push(InputEvent::FireProjectileRequested);
        }
        events
    }
}
