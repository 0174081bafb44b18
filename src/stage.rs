//! Stage
//!
//! [`Stage`] composes the choreography of the fly-through scene:
//!
//! 1. A click anywhere starts the gate animation.
//! 2. When the gate animation completes, the camera flight is triggered.
//! 3. After the flight delay, the camera position is tweened to the target.
//! 4. Independently, the wizard idles and attacks on request.
//!
//! The host owns the real camera and renderer. Each frame it calls
//! [`Stage::update`] and copies [`Stage::camera_position`] into its camera.
//!
//! # Frame order
//!
//! Within one update the flight is advanced *before* the gate is ticked, so
//! a flight armed by this frame's gate completion starts counting its delay
//! on the next frame.

use glam::{Vec2, Vec3};
use smallvec::SmallVec;

use crate::animation::blender::{BlendPhase, DualAnimationBlender};
use crate::animation::clip::AnimationClip;
use crate::animation::mixer::AnimationMixer;
use crate::animation::rig::AnimationRig;
use crate::animation::tracker::PlaybackTracker;
use crate::camera::flight::{CameraFlightSequencer, FlightPhase};
use crate::config::SceneConfig;
use crate::input::PointerInput;
use crate::tween::{TweenEngine, Tweener};

/// Choreography milestones, reported by the update that reached them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageEvent {
    GateStarted,
    GateOpened,
    FlightStarted,
    FlightLanded,
    AttackStarted,
    AttackFinished,
}

impl StageEvent {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GateStarted => "gate_started",
            Self::GateOpened => "gate_opened",
            Self::FlightStarted => "flight_started",
            Self::FlightLanded => "flight_landed",
            Self::AttackStarted => "attack_started",
            Self::AttackFinished => "attack_finished",
        }
    }
}

pub type StageEvents = SmallVec<[StageEvent; 4]>;

pub struct Stage<R: AnimationRig = AnimationMixer, T: Tweener = TweenEngine> {
    pointer: PointerInput,
    gate: PlaybackTracker<R>,
    flight: CameraFlightSequencer<T>,
    wizard: Option<DualAnimationBlender<R>>,
    camera_position: Vec3,
    elapsed: f32,
    // Milestones reached outside of `update`, reported by the next update
    pending: StageEvents,
    torn_down: bool,
}

impl Stage {
    /// Builds a stage on in-crate mixers from already decoded clip lists.
    #[must_use]
    pub fn from_clips(
        config: &SceneConfig,
        gate_clips: Vec<AnimationClip>,
        wizard_clips: Vec<AnimationClip>,
    ) -> Self {
        let wizard_rig = config
            .wizard
            .enabled
            .then(|| AnimationMixer::from_clips(wizard_clips));
        Self::new(
            config,
            AnimationMixer::from_clips(gate_clips),
            wizard_rig,
            TweenEngine::new(),
        )
    }
}

impl<R: AnimationRig, T: Tweener> Stage<R, T> {
    pub fn new(config: &SceneConfig, gate_rig: R, wizard_rig: Option<R>, tweener: T) -> Self {
        let mut pointer = PointerInput::new();
        let mut gate = PlaybackTracker::new(gate_rig, config.gate.playback.clone());
        gate.attach_input(&mut pointer);

        let flight = CameraFlightSequencer::new(tweener)
            .with_plan(config.flight.target, config.flight.options);

        let wizard = wizard_rig.map(|rig| {
            DualAnimationBlender::new(
                rig,
                &config.wizard.idle_clip,
                &config.wizard.attack_clip,
                config.wizard.time_scale,
            )
        });

        let mut pending = StageEvents::new();
        if gate.session().has_started {
            pending.push(StageEvent::GateStarted);
        }

        log::info!("Stage ready, camera at {}", config.camera.position);
        Self {
            pointer,
            gate,
            flight,
            wizard,
            camera_position: config.camera.position,
            elapsed: 0.0,
            pending,
            torn_down: false,
        }
    }

    /// Delivers a click anywhere in the viewport.
    ///
    /// Returns `true` if the click started the gate animation.
    pub fn handle_click(&mut self, position: Vec2) -> bool {
        if self.torn_down {
            return false;
        }
        self.pointer.dispatch_click(position);
        let started = self.gate.handle_clicks(&mut self.pointer);
        if started {
            self.pending.push(StageEvent::GateStarted);
        }
        started
    }

    /// Feeds a native window event. Returns `true` if it started the gate
    /// animation.
    #[cfg(feature = "winit")]
    pub fn handle_window_event(&mut self, event: &winit::event::WindowEvent) -> bool {
        if self.torn_down
            || !crate::input::winit_adapter::process_window_event(&mut self.pointer, event)
        {
            return false;
        }
        let started = self.gate.handle_clicks(&mut self.pointer);
        if started {
            self.pending.push(StageEvent::GateStarted);
        }
        started
    }

    /// Triggers the wizard's attack. Returns `true` if an attack started.
    pub fn trigger_attack(&mut self) -> bool {
        if self.torn_down {
            return false;
        }
        let started = self
            .wizard
            .as_mut()
            .is_some_and(|wizard| wizard.play_attack_animation());
        if started {
            self.pending.push(StageEvent::AttackStarted);
        }
        started
    }

    /// Advances the whole scene by `dt` seconds.
    pub fn update(&mut self, dt: f32) -> StageEvents {
        if self.torn_down {
            return StageEvents::new();
        }
        let mut events = std::mem::take(&mut self.pending);
        self.elapsed += dt;

        let was_waiting = matches!(self.flight.phase(), FlightPhase::Waiting(_));
        if self.flight.on_frame_tick(dt, &mut self.camera_position) {
            if was_waiting {
                events.push(StageEvent::FlightStarted);
            }
            events.push(StageEvent::FlightLanded);
        } else if was_waiting && matches!(self.flight.phase(), FlightPhase::Flying(_)) {
            events.push(StageEvent::FlightStarted);
        }

        if self.gate.on_frame_tick(dt) {
            events.push(StageEvent::GateOpened);
            self.flight.set_trigger(true);
        }

        if let Some(wizard) = self.wizard.as_mut() {
            let was_attacking = wizard.phase() == BlendPhase::Attacking;
            wizard.on_frame_tick(dt);
            if was_attacking && wizard.phase() == BlendPhase::Idle {
                events.push(StageEvent::AttackFinished);
            }
        }

        for event in &events {
            log::debug!("t={:.3}s {}", self.elapsed, event.as_str());
        }
        events
    }

    /// Unmounts the scene: the click subscription is released and pending
    /// flight work is discarded.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.gate.teardown(&mut self.pointer);
        self.flight.teardown();
        self.pending.clear();
        self.torn_down = true;
        log::info!("Stage torn down");
    }

    #[must_use]
    pub fn camera_position(&self) -> Vec3 {
        self.camera_position
    }

    /// Seconds of scene time simulated so far.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    #[must_use]
    pub fn gate(&self) -> &PlaybackTracker<R> {
        &self.gate
    }

    #[must_use]
    pub fn flight(&self) -> &CameraFlightSequencer<T> {
        &self.flight
    }

    #[must_use]
    pub fn wizard(&self) -> Option<&DualAnimationBlender<R>> {
        self.wizard.as_ref()
    }

    #[must_use]
    pub fn pointer(&self) -> &PointerInput {
        &self.pointer
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}
