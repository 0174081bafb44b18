#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
use web_time::{Duration, Instant};

/// Default cap on a single frame step reported by [`Timer`].
pub const DEFAULT_MAX_FRAME_STEP: Duration = Duration::from_millis(100);

/// Wall-clock frame timer producing the `dt` fed to `Stage::update`.
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    last_tick: Instant,
    max_step: Duration,
    /// Clamped step of the last tick.
    pub delta: Duration,
    /// Sum of clamped steps, i.e. simulated time.
    pub elapsed: Duration,
    pub frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_step(DEFAULT_MAX_FRAME_STEP)
    }

    #[must_use]
    pub fn with_max_step(max_step: Duration) -> Self {
        Self {
            last_tick: Instant::now(),
            max_step,
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Measures the time since the previous tick. Call once per frame.
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.advance(now - self.last_tick);
        self.last_tick = now;
    }

    fn advance(&mut self, step: Duration) {
        if step > self.max_step {
            log::debug!("Frame step of {step:?} clamped to {:?}", self.max_step);
        }
        self.delta = step.min(self.max_step);
        self.elapsed += self.delta;
        self.frame_count += 1;
    }

    #[must_use]
    pub fn dt_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DelayState {
    Pending,
    Fired,
    Cancelled,
}

/// Single-shot, cancellable delay measured in frame time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Delay {
    remaining: f32,
    state: DelayState,
}

impl Delay {
    #[must_use]
    pub fn new(seconds: f32) -> Self {
        Self {
            remaining: seconds.max(0.0),
            state: DelayState::Pending,
        }
    }

    /// Advances the delay by `dt`.
    ///
    /// Returns the part of `dt` left over after expiry, exactly once, on the
    /// tick where the delay elapses. A zero delay fires on its first tick.
    pub fn tick(&mut self, dt: f32) -> Option<f32> {
        if self.state != DelayState::Pending {
            return None;
        }
        self.remaining -= dt.max(0.0);
        if self.remaining > 0.0 {
            return None;
        }
        self.state = DelayState::Fired;
        Some(-self.remaining)
    }

    pub fn cancel(&mut self) {
        if self.state == DelayState::Pending {
            self.state = DelayState::Cancelled;
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.state == DelayState::Pending
    }

    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.state == DelayState::Fired
    }

    /// Seconds left before expiry, zero once fired or cancelled.
    #[must_use]
    pub fn remaining(&self) -> f32 {
        if self.is_pending() {
            self.remaining
        } else {
            0.0
        }
    }
}
