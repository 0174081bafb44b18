//! Playback Tracker
//!
//! [`PlaybackTracker`] drives a single clip of a model: it picks the clip,
//! configures looping and speed, starts it automatically or on the first
//! click, and reports exactly once when a play-once clip has finished.
//!
//! # Lifecycle
//!
//! 1. [`PlaybackTracker::new`] selects and configures the clip. With
//!    [`StartPolicy::Auto`] playback starts right away.
//! 2. With [`StartPolicy::Manual`], [`attach_input`](PlaybackTracker::attach_input)
//!    subscribes to the pointer. The host forwards clicks through
//!    [`handle_clicks`](PlaybackTracker::handle_clicks).
//! 3. The host calls [`on_frame_tick`](PlaybackTracker::on_frame_tick) once
//!    per rendered frame.
//! 4. [`teardown`](PlaybackTracker::teardown) detaches the pointer and
//!    drops the completion callback; later ticks and clicks do nothing.
//!
//! # Example
//!
//! ```rust,ignore
//! let config = PlaybackConfig {
//!     start: StartPolicy::Manual,
//!     ..PlaybackConfig::default()
//! };
//! let mut gate = PlaybackTracker::new(mixer, config);
//! gate.attach_input(&mut pointer);
//! gate.on_complete(|| log::info!("gate open"));
//!
//! pointer.click();
//! gate.handle_clicks(&mut pointer);
//! gate.on_frame_tick(dt);
//! ```

use serde::{Deserialize, Serialize};

use crate::animation::action::LoopMode;
use crate::animation::mixer::AnimationMixer;
use crate::animation::rig::AnimationRig;
use crate::input::{ClickSubscription, PointerInput};

// ============================================================================
// Configuration
// ============================================================================

/// Which clip of the rig the tracker drives.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipSelection {
    /// The first clip in load order.
    #[default]
    FirstAvailable,
    /// A clip by name, falling back to the first clip when absent.
    Named(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackLoop {
    RepeatForever,
    /// Play once and hold the last frame.
    #[default]
    PlayOnceAndClamp,
}

/// When playback begins. A single enum so automatic and click-to-start can
/// never both be enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartPolicy {
    /// Start as soon as the clip is configured.
    #[default]
    Auto,
    /// Start on the next activate signal (a click anywhere).
    Manual,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    pub selection: ClipSelection,
    pub looping: PlaybackLoop,
    pub time_scale: f32,
    pub start: StartPolicy,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            selection: ClipSelection::FirstAvailable,
            looping: PlaybackLoop::PlayOnceAndClamp,
            time_scale: 1.0,
            start: StartPolicy::Auto,
        }
    }
}

// ============================================================================
// Session
// ============================================================================

/// Runtime state of one mounted tracker.
///
/// `has_completed` implies `has_started`, and `has_started` is set at most
/// once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackSession<A> {
    pub has_started: bool,
    pub has_completed: bool,
    pub clip: Option<A>,
}

impl<A> Default for PlaybackSession<A> {
    fn default() -> Self {
        Self {
            has_started: false,
            has_completed: false,
            clip: None,
        }
    }
}

pub type CompletionCallback = Box<dyn FnOnce()>;

// ============================================================================
// Tracker
// ============================================================================

pub struct PlaybackTracker<R: AnimationRig = AnimationMixer> {
    rig: R,
    config: PlaybackConfig,
    session: PlaybackSession<R::Action>,
    mounted: bool,
    click_subscription: Option<ClickSubscription>,
    on_complete: Option<CompletionCallback>,
}

impl<R: AnimationRig> PlaybackTracker<R> {
    /// Mounts a tracker on `rig` and applies `config`.
    pub fn new(rig: R, config: PlaybackConfig) -> Self {
        let mut tracker = Self {
            rig,
            config: config.clone(),
            session: PlaybackSession::default(),
            mounted: true,
            click_subscription: None,
            on_complete: None,
        };
        tracker.configure(config);
        tracker
    }

    /// Selects and configures the clip. Does nothing once playback started.
    pub fn configure(&mut self, config: PlaybackConfig) {
        if self.session.has_started || !self.mounted {
            log::debug!("Playback already started, configuration ignored");
            return;
        }
        self.config = config;

        let clip = self.select_clip();
        self.session.clip = clip;
        let Some(clip) = clip else {
            log::warn!("Model has no animation clips, playback disabled");
            return;
        };

        self.rig.set_time_scale(clip, self.config.time_scale);
        self.rig.reset(clip);
        match self.config.looping {
            PlaybackLoop::RepeatForever => {
                self.rig.set_loop_mode(clip, LoopMode::Repeat);
                self.rig.set_clamp_when_finished(clip, false);
            }
            PlaybackLoop::PlayOnceAndClamp => {
                self.rig.set_loop_mode(clip, LoopMode::Once);
                self.rig.set_clamp_when_finished(clip, true);
            }
        }

        if self.config.start == StartPolicy::Auto {
            self.start(clip);
        }
    }

    fn select_clip(&self) -> Option<R::Action> {
        match &self.config.selection {
            ClipSelection::FirstAvailable => self.rig.first_action(),
            ClipSelection::Named(name) => self.rig.find_action(name).or_else(|| {
                let fallback = self.rig.first_action();
                if fallback.is_some() {
                    log::warn!("Animation clip '{name}' not found, using the first clip");
                }
                fallback
            }),
        }
    }

    fn start(&mut self, clip: R::Action) {
        self.rig.play(clip);
        self.session.has_started = true;
        log::info!("Animation playback started ({:?})", self.config.start);
    }

    /// Registers `callback` to run once when the clip finishes.
    /// Replaces a previously registered callback.
    pub fn on_complete(&mut self, callback: impl FnOnce() + 'static) {
        if self.mounted {
            self.on_complete = Some(Box::new(callback));
        }
    }

    /// Subscribes to clicks if this tracker still waits for a manual start.
    /// A tracker without a clip never subscribes.
    pub fn attach_input(&mut self, input: &mut PointerInput) {
        if !self.mounted
            || self.config.start != StartPolicy::Manual
            || self.session.has_started
            || self.session.clip.is_none()
            || self.click_subscription.is_some()
        {
            return;
        }
        self.click_subscription = Some(input.subscribe());
    }

    /// Drains this tracker's pending clicks; any click activates it.
    ///
    /// The click subscription is released once playback has started.
    pub fn handle_clicks(&mut self, input: &mut PointerInput) -> bool {
        let Some(subscription) = self.click_subscription else {
            return false;
        };
        if input.take_clicks(subscription) == 0 {
            return false;
        }

        let started = self.activate();
        if self.session.has_started {
            input.unsubscribe(subscription);
            self.click_subscription = None;
        }
        started
    }

    /// Starts a manual-start clip. Returns `true` only on the call that
    /// actually started playback.
    pub fn activate(&mut self) -> bool {
        if !self.mounted
            || self.config.start != StartPolicy::Manual
            || self.session.has_started
        {
            return false;
        }
        let Some(clip) = self.session.clip else {
            return false;
        };
        self.start(clip);
        true
    }

    /// Advances the rig and checks for completion.
    ///
    /// Returns `true` on the single frame where completion is detected.
    pub fn on_frame_tick(&mut self, dt: f32) -> bool {
        if !self.mounted {
            return false;
        }

        self.rig.update(dt);

        if !self.session.has_started || self.session.has_completed {
            return false;
        }
        let Some(clip) = self.session.clip else {
            return false;
        };
        if self.rig.is_running(clip) {
            return false;
        }

        self.session.has_completed = true;
        log::info!("Animation playback completed");
        if let Some(callback) = self.on_complete.take() {
            callback();
        }
        true
    }

    /// Unmounts the tracker: releases the click subscription and discards
    /// the completion callback.
    pub fn teardown(&mut self, input: &mut PointerInput) {
        if let Some(subscription) = self.click_subscription.take() {
            input.unsubscribe(subscription);
        }
        self.on_complete = None;
        self.mounted = false;
    }

    #[must_use]
    pub fn session(&self) -> &PlaybackSession<R::Action> {
        &self.session
    }

    #[must_use]
    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[must_use]
    pub fn click_subscription(&self) -> Option<ClickSubscription> {
        self.click_subscription
    }

    #[must_use]
    pub fn rig(&self) -> &R {
        &self.rig
    }

    pub fn rig_mut(&mut self) -> &mut R {
        &mut self.rig
    }
}
