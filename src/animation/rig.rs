//! Animation Rig Abstraction
//!
//! [`AnimationRig`] is the narrow surface the choreography components need
//! from a skeletal rig: look clips up, drive their playback flags, fade their
//! weights, and learn when a play-once clip has finished.
//!
//! [`AnimationMixer`](super::AnimationMixer) is the in-crate implementation.
//! Tests and alternative engines can provide their own.
//!
//! # Finished Events
//!
//! Finished notifications are explicit subscriptions. A caller subscribes to
//! one action and receives a [`SubscriptionId`]; [`AnimationRig::update`]
//! reports the ids whose action finished during that step. The same id is
//! required to unsubscribe, so a listener registered for one play-through
//! cannot silently outlive it.

use std::fmt::Debug;

use slotmap::new_key_type;
use smallvec::SmallVec;

use crate::animation::action::LoopMode;

new_key_type! {
    /// Handle of a finished-event subscription.
    pub struct SubscriptionId;
}

/// Subscriptions that fired during one rig update.
pub type FiredSubscriptions = SmallVec<[SubscriptionId; 4]>;

pub trait AnimationRig {
    /// Non-owning, copyable handle to one clip's playback state.
    type Action: Copy + Eq + Debug;

    /// Looks a clip up by name.
    fn find_action(&self, name: &str) -> Option<Self::Action>;

    /// The first clip in load order.
    fn first_action(&self) -> Option<Self::Action>;

    /// Number of clips bound to the rig.
    fn action_count(&self) -> usize;

    fn play(&mut self, action: Self::Action);
    fn pause(&mut self, action: Self::Action);
    fn reset(&mut self, action: Self::Action);

    fn set_loop_mode(&mut self, action: Self::Action, mode: LoopMode);
    fn set_clamp_when_finished(&mut self, action: Self::Action, clamp: bool);
    fn set_time_scale(&mut self, action: Self::Action, time_scale: f32);

    /// True while the action's playhead is advancing.
    fn is_running(&self, action: Self::Action) -> bool;

    fn fade_in(&mut self, action: Self::Action, duration: f32);
    fn fade_out(&mut self, action: Self::Action, duration: f32);

    /// Registers interest in `action` finishing.
    fn subscribe_finished(&mut self, action: Self::Action) -> SubscriptionId;

    /// Removes a subscription. Returns `false` if it was already gone.
    fn unsubscribe_finished(&mut self, subscription: SubscriptionId) -> bool;

    /// Number of live finished subscriptions.
    fn subscription_count(&self) -> usize;

    /// Advances every scheduled action by `dt` seconds and reports the
    /// subscriptions whose action finished during this step.
    fn update(&mut self, dt: f32) -> FiredSubscriptions;
}
