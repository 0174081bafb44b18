//! Idle / Attack Blending
//!
//! [`DualAnimationBlender`] runs a two-state machine on one character:
//!
//! ```text
//!            play_attack_animation()
//!   ┌──────┐ ─────────────────────────▶ ┌───────────┐
//!   │ Idle │                            │ Attacking │
//!   └──────┘ ◀───────────────────────── └───────────┘
//!              attack clip finished
//! ```
//!
//! Both transitions are cross-fades of [`CROSS_FADE_DURATION`]. Each attack
//! registers exactly one finished subscription and removes it when the
//! attack ends, so repeated attacks never accumulate listeners.

use crate::animation::action::LoopMode;
use crate::animation::mixer::AnimationMixer;
use crate::animation::rig::{AnimationRig, SubscriptionId};

/// Cross-fade window used by both transitions, in mixer seconds.
pub const CROSS_FADE_DURATION: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendPhase {
    Idle,
    Attacking,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendState<A> {
    pub is_attacking: bool,
    pub idle: Option<A>,
    pub attack: Option<A>,
    pub time_scale: f32,
}

pub struct DualAnimationBlender<R: AnimationRig = AnimationMixer> {
    rig: R,
    state: BlendState<R::Action>,
    finished_subscription: Option<SubscriptionId>,
}

impl<R: AnimationRig> DualAnimationBlender<R> {
    /// Binds the idle and attack clips by name and starts idling.
    ///
    /// Missing clips are tolerated: without an idle clip nothing plays, and
    /// without either clip attacks are ignored.
    pub fn new(rig: R, idle_name: &str, attack_name: &str, time_scale: f32) -> Self {
        let idle = rig.find_action(idle_name);
        let attack = rig.find_action(attack_name);
        if idle.is_none() {
            log::warn!("Idle animation '{idle_name}' not found");
        }
        if attack.is_none() {
            log::warn!("Attack animation '{attack_name}' not found");
        }

        let mut blender = Self {
            rig,
            state: BlendState {
                is_attacking: false,
                idle,
                attack,
                time_scale,
            },
            finished_subscription: None,
        };
        blender.enter_idle();
        blender
    }

    fn enter_idle(&mut self) {
        let Some(idle) = self.state.idle else {
            return;
        };
        self.rig.set_time_scale(idle, self.state.time_scale);
        self.rig.set_loop_mode(idle, LoopMode::Repeat);
        self.rig.play(idle);
    }

    /// Cross-fades from idle into a single play-through of the attack clip.
    ///
    /// Returns `false` when an attack is already running or a clip is
    /// missing; the request is dropped, not queued.
    pub fn play_attack_animation(&mut self) -> bool {
        if self.state.is_attacking {
            log::debug!("Attack already in progress, trigger dropped");
            return false;
        }
        let (Some(idle), Some(attack)) = (self.state.idle, self.state.attack) else {
            return false;
        };

        self.state.is_attacking = true;

        self.rig.fade_out(idle, CROSS_FADE_DURATION);

        self.rig.reset(attack);
        self.rig.set_loop_mode(attack, LoopMode::Once);
        self.rig.set_clamp_when_finished(attack, true);
        self.rig.set_time_scale(attack, self.state.time_scale);
        self.rig.fade_in(attack, CROSS_FADE_DURATION);
        self.rig.play(attack);

        self.finished_subscription = Some(self.rig.subscribe_finished(attack));
        log::info!("Idle -> Attacking");
        true
    }

    /// Advances the rig; returns to idle when the attack finished.
    pub fn on_frame_tick(&mut self, dt: f32) {
        let fired = self.rig.update(dt);

        let Some(subscription) = self.finished_subscription else {
            return;
        };
        if fired.contains(&subscription) {
            self.finish_attack(subscription);
        }
    }

    fn finish_attack(&mut self, subscription: SubscriptionId) {
        let (Some(idle), Some(attack)) = (self.state.idle, self.state.attack) else {
            return;
        };

        self.rig.fade_out(attack, CROSS_FADE_DURATION);
        self.rig.reset(idle);
        self.rig.fade_in(idle, CROSS_FADE_DURATION);
        self.rig.play(idle);

        self.state.is_attacking = false;
        self.rig.unsubscribe_finished(subscription);
        self.finished_subscription = None;
        log::info!("Attacking -> Idle");
    }

    #[must_use]
    pub fn phase(&self) -> BlendPhase {
        if self.state.is_attacking {
            BlendPhase::Attacking
        } else {
            BlendPhase::Idle
        }
    }

    #[must_use]
    pub fn state(&self) -> &BlendState<R::Action> {
        &self.state
    }

    #[must_use]
    pub fn rig(&self) -> &R {
        &self.rig
    }

    pub fn rig_mut(&mut self) -> &mut R {
        &mut self.rig
    }
}
