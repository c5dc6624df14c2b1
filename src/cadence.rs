//! Irregular spawn cadence shared by the lifecycle controllers.
//!
//! Not a fixed-period emitter: after every firing the next interval is
//! redrawn uniformly in `[0.1 × base, base]`, so spawns cluster sometimes and
//! spread out other times.

use rand::Rng;

/// Spawn-timing state: fires immediately on the first poll, then whenever the
/// current interval has elapsed since the last firing.
#[derive(Debug, Clone)]
pub struct SpawnCadence {
    last_fired: Option<f32>,
    interval: f32,
}

impl SpawnCadence {
    pub fn new(base_interval: f32) -> Self {
        Self {
            last_fired: None,
            interval: base_interval,
        }
    }

    /// Returns true when a firing is due at `now`, resetting the timestamp
    /// and redrawing the next interval from `base`.
    pub fn fire(&mut self, now: f32, base: f32, rng: &mut impl Rng) -> bool {
        let due = match self.last_fired {
            None => true,
            Some(t) => now - t > self.interval,
        };
        if due {
            self.last_fired = Some(now);
            self.interval = rng.gen_range(base * 0.1..=base);
        }
        due
    }

    pub fn current_interval(&self) -> f32 {
        self.interval
    }
}
