//! Wall-clock enemy spawner.

use glam::Vec3;
use rand::Rng;
use std::time::Duration;

use crate::config::GameConfig;

/// Fixed-period spawn schedule, independent of frame rate.
///
/// The schedule is measured from process start and is never reset, so it
/// keeps its cadence across restarts.
#[derive(Debug, Clone)]
pub struct Spawner {
    interval: Duration,
    next_due: Duration,
    half_width: f32,
    spawn_z: f32,
    spawn_height: f32,
}

impl Spawner {
    pub fn new(config: &GameConfig) -> Self {
        let interval = config.spawn_interval();
        debug_assert!(!interval.is_zero(), "spawn interval must be non-zero");
        Self {
            interval,
            next_due: interval,
            half_width: config.spawn_half_width,
            spawn_z: config.spawn_z,
            spawn_height: config.spawn_height,
        }
    }

    /// Time at which the next enemy is due.
    pub fn next_due(&self) -> Duration {
        self.next_due
    }

    /// Count the interval boundaries passed by `now` and advance past them.
    pub fn take_due(&mut self, now: Duration) -> u32 {
        let mut due = 0;
        while now >= self.next_due {
            due += 1;
            self.next_due += self.interval;
        }
        due
    }

    /// A fresh spawn point on the spawn line, x uniform in `[-w, w)`.
    pub fn spawn_position<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        let x = rng.random_range(-self.half_width..self.half_width);
        Vec3::new(x, self.spawn_height, self.spawn_z)
    }
}
