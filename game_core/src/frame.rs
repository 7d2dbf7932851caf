//! Frame pacing for refresh-driven hosts
//!
//! The host calls back once per display refresh. `FrameClock` converts
//! those timestamps into whole fixed-length ticks and `LoopControl` makes
//! sure a stopped loop never runs a stale callback.

use crate::params::Params;

/// Fixed-timestep accumulator
#[derive(Debug, Clone)]
pub struct FrameClock {
    tick_ms: f64,
    max_ticks: u32,
    last_ms: Option<f64>,
    accumulator: f64,
}

impl FrameClock {
    pub fn new(tick_ms: f64, max_ticks: u32) -> Self {
        Self {
            tick_ms,
            max_ticks,
            last_ms: None,
            accumulator: 0.0,
        }
    }

    /// Number of ticks to run for a refresh at `now_ms`
    ///
    /// The first refresh after a (re)start runs exactly one tick. Backlog
    /// beyond `max_ticks` is dropped rather than replayed.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let Some(last_ms) = self.last_ms.replace(now_ms) else {
            self.accumulator = 0.0;
            return 1;
        };

        self.accumulator += (now_ms - last_ms).max(0.0);
        let due = (self.accumulator / self.tick_ms).floor();
        if due >= self.max_ticks as f64 {
            self.accumulator = 0.0;
            return self.max_ticks;
        }

        self.accumulator -= due * self.tick_ms;
        due as u32
    }

    /// Forget the previous timestamp (after the loop was stopped)
    pub fn reset(&mut self) {
        self.last_ms = None;
        self.accumulator = 0.0;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(Params::TICK_MS, Params::MAX_TICKS_PER_FRAME)
    }
}

/// Arming state of a refresh-driven loop
///
/// Every start and stop bumps the generation. A scheduled callback carries
/// the generation it was armed with and must bail out when it no longer
/// matches.
#[derive(Debug, Clone, Default)]
pub struct LoopControl {
    generation: u64,
    armed: bool,
}

impl LoopControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the loop; `None` if it is already armed
    pub fn start(&mut self) -> Option<u64> {
        if self.armed {
            return None;
        }
        self.armed = true;
        self.generation += 1;
        Some(self.generation)
    }

    pub fn stop(&mut self) {
        if self.armed {
            self.armed = false;
            self.generation += 1;
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Whether a callback armed with `token` may still run
    pub fn is_current(&self, token: u64) -> bool {
        self.armed && self.generation == token
    }
}
