//! Camera Flight
//!
//! [`CameraFlightSequencer`] moves the camera to a target once, after a
//! delay, when a trigger fires. It owns the at-most-once guard and the delay;
//! the interpolation itself belongs to its [`Tweener`].
//!
//! # Timeline
//!
//! ```text
//! arm / trigger ──▶ delay ──▶ tween start ──▶ tween end ──▶ on_complete
//! ```
//!
//! Each step happens at most once per arming, strictly in this order. Time
//! left over in the frame where the delay expires is handed to the tween, so
//! with `delay = 0.5` and `duration = 1.5` the callback fires on the frame
//! where accumulated time reaches `2.0`.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::tween::{Easing, TweenEngine, TweenId, Tweener};
use crate::utils::time::Delay;

/// Timing of a flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightOptions {
    pub duration: f32,
    pub delay: f32,
    pub easing: Easing,
}

impl Default for FlightOptions {
    fn default() -> Self {
        Self {
            duration: 1.5,
            delay: 0.5,
            easing: Easing::default(),
        }
    }
}

/// Parameters of the flight most recently armed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFlightState {
    pub has_flown: bool,
    pub target: Vec3,
    pub duration: f32,
    pub delay: f32,
    pub easing: Easing,
}

impl Default for CameraFlightState {
    fn default() -> Self {
        let options = FlightOptions::default();
        Self {
            has_flown: false,
            target: Vec3::ZERO,
            duration: options.duration,
            delay: options.delay,
            easing: options.easing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlightPhase {
    Idle,
    Waiting(Delay),
    Flying(TweenId),
    Landed,
}

pub type FlightCallback = Box<dyn FnOnce()>;

pub struct CameraFlightSequencer<T: Tweener = TweenEngine> {
    tweener: T,
    state: CameraFlightState,
    phase: FlightPhase,
    plan: Option<(Vec3, FlightOptions)>,
    on_complete: Option<FlightCallback>,
    torn_down: bool,
}

impl<T: Tweener> CameraFlightSequencer<T> {
    #[must_use]
    pub fn new(tweener: T) -> Self {
        Self {
            tweener,
            state: CameraFlightState::default(),
            phase: FlightPhase::Idle,
            plan: None,
            on_complete: None,
            torn_down: false,
        }
    }

    /// Presets the flight armed by [`set_trigger`](Self::set_trigger).
    #[must_use]
    pub fn with_plan(mut self, target: Vec3, options: FlightOptions) -> Self {
        self.plan = Some((target, options));
        self
    }

    /// Schedules the flight. Ignored if a flight was already armed since the
    /// last [`reset`](Self::reset).
    ///
    /// Passing `None` keeps a callback registered earlier through
    /// [`on_complete`](Self::on_complete).
    ///
    /// Returns `true` if this call armed the flight.
    pub fn arm(
        &mut self,
        target: Vec3,
        options: FlightOptions,
        on_complete: Option<FlightCallback>,
    ) -> bool {
        if self.torn_down {
            return false;
        }
        if self.state.has_flown {
            log::debug!("Camera flight already armed, request ignored");
            return false;
        }

        self.state = CameraFlightState {
            has_flown: true,
            target,
            duration: options.duration,
            delay: options.delay,
            easing: options.easing,
        };
        self.phase = FlightPhase::Waiting(Delay::new(options.delay));
        if on_complete.is_some() {
            self.on_complete = on_complete;
        }
        log::info!(
            "Camera flight to {target} armed (delay {}s, duration {}s, {})",
            options.delay,
            options.duration,
            options.easing
        );
        true
    }

    /// Feeds the external trigger signal. A `true` signal arms the preset
    /// plan; `false` and repeated `true` signals do nothing.
    pub fn set_trigger(&mut self, trigger: bool) -> bool {
        if !trigger {
            return false;
        }
        let Some((target, options)) = self.plan else {
            log::warn!("Camera flight triggered without a plan");
            return false;
        };
        self.arm(target, options, None)
    }

    /// Registers a callback for the end of the flight, replacing the one
    /// passed to [`arm`](Self::arm).
    pub fn on_complete(&mut self, callback: impl FnOnce() + 'static) {
        if !self.torn_down {
            self.on_complete = Some(Box::new(callback));
        }
    }

    /// Advances the pending delay or the running tween and writes the
    /// interpolated position into `camera_position`.
    ///
    /// Returns `true` on the frame where the flight lands.
    pub fn on_frame_tick(&mut self, dt: f32, camera_position: &mut Vec3) -> bool {
        if self.torn_down {
            return false;
        }

        let budget = match &mut self.phase {
            FlightPhase::Waiting(delay) => match delay.tick(dt) {
                Some(overflow) => overflow,
                None => return false,
            },
            FlightPhase::Flying(_) => dt,
            FlightPhase::Idle | FlightPhase::Landed => return false,
        };

        let tween = if let FlightPhase::Flying(id) = self.phase {
            id
        } else {
            let id = self.tweener.interpolate(
                *camera_position,
                self.state.target,
                self.state.duration,
                self.state.easing,
            );
            self.phase = FlightPhase::Flying(id);
            log::info!("Camera flight started from {camera_position}");
            id
        };

        let samples = self.tweener.update(budget);
        let Some(sample) = samples.iter().find(|s| s.id == tween) else {
            return false;
        };

        *camera_position = sample.value;
        if !sample.finished {
            return false;
        }

        self.phase = FlightPhase::Landed;
        log::info!("Camera flight landed at {}", sample.value);
        if let Some(callback) = self.on_complete.take() {
            callback();
        }
        true
    }

    fn cancel_pending(&mut self) {
        match &mut self.phase {
            FlightPhase::Waiting(delay) => delay.cancel(),
            FlightPhase::Flying(id) => {
                self.tweener.cancel(*id);
            }
            FlightPhase::Idle | FlightPhase::Landed => {}
        }
        self.phase = FlightPhase::Idle;
        self.on_complete = None;
    }

    /// Clears the guard so the sequencer can be armed again. A pending or
    /// running flight is cancelled.
    pub fn reset(&mut self) {
        self.cancel_pending();
        self.state.has_flown = false;
    }

    /// Discards any pending work. Nothing fires after teardown.
    pub fn teardown(&mut self) {
        self.cancel_pending();
        self.torn_down = true;
    }

    #[must_use]
    pub fn has_flown(&self) -> bool {
        self.state.has_flown
    }

    #[must_use]
    pub fn state(&self) -> &CameraFlightState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> FlightPhase {
        self.phase
    }

    #[must_use]
    pub fn tweener(&self) -> &T {
        &self.tweener
    }
}
