use std::sync::Arc;

use rustc_hash::FxHashMap;
use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;

use crate::animation::action::{AnimationAction, LoopMode};
use crate::animation::clip::AnimationClip;
use crate::animation::rig::{AnimationRig, FiredSubscriptions, SubscriptionId};

new_key_type! {
    /// Handle of an action owned by an [`AnimationMixer`].
    pub struct ActionHandle;
}

/// Per-model runtime that owns one action per clip and advances them all.
#[derive(Debug, Default)]
pub struct AnimationMixer {
    actions: SlotMap<ActionHandle, AnimationAction>,
    // Load order, used for "first available" lookups
    order: Vec<ActionHandle>,
    by_name: FxHashMap<String, ActionHandle>,
    subscriptions: SlotMap<SubscriptionId, ActionHandle>,
}

impl AnimationMixer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a mixer with one action per clip, preserving order.
    pub fn from_clips<I>(clips: I) -> Self
    where
        I: IntoIterator<Item = AnimationClip>,
    {
        let mut mixer = Self::new();
        for clip in clips {
            mixer.add_clip(Arc::new(clip));
        }
        mixer
    }

    /// Creates an action for `clip`. A clip whose name is already bound
    /// returns the existing handle.
    pub fn add_clip(&mut self, clip: Arc<AnimationClip>) -> ActionHandle {
        if let Some(&handle) = self.by_name.get(&clip.name) {
            log::warn!("Duplicate animation clip '{}' ignored", clip.name);
            return handle;
        }

        let name = clip.name.clone();
        let handle = self.actions.insert(AnimationAction::new(clip));
        self.order.push(handle);
        self.by_name.insert(name, handle);
        handle
    }

    #[must_use]
    pub fn action(&self, handle: ActionHandle) -> Option<&AnimationAction> {
        self.actions.get(handle)
    }

    pub fn action_mut(&mut self, handle: ActionHandle) -> Option<&mut AnimationAction> {
        self.actions.get_mut(handle)
    }

    /// Clip names in load order.
    pub fn clip_names(&self) -> impl Iterator<Item = &str> {
        self.order
            .iter()
            .filter_map(|&handle| self.actions.get(handle))
            .map(AnimationAction::name)
    }

    fn with_action(&mut self, handle: ActionHandle, f: impl FnOnce(&mut AnimationAction)) {
        if let Some(action) = self.actions.get_mut(handle) {
            f(action);
        }
    }
}

impl AnimationRig for AnimationMixer {
    type Action = ActionHandle;

    fn find_action(&self, name: &str) -> Option<ActionHandle> {
        self.by_name.get(name).copied()
    }

    fn first_action(&self) -> Option<ActionHandle> {
        self.order.first().copied()
    }

    fn action_count(&self) -> usize {
        self.actions.len()
    }

    fn play(&mut self, action: ActionHandle) {
        self.with_action(action, AnimationAction::play);
    }

    fn pause(&mut self, action: ActionHandle) {
        self.with_action(action, |a| a.paused = true);
    }

    fn reset(&mut self, action: ActionHandle) {
        self.with_action(action, AnimationAction::reset);
    }

    fn set_loop_mode(&mut self, action: ActionHandle, mode: LoopMode) {
        self.with_action(action, |a| a.loop_mode = mode);
    }

    fn set_clamp_when_finished(&mut self, action: ActionHandle, clamp: bool) {
        self.with_action(action, |a| a.clamp_when_finished = clamp);
    }

    fn set_time_scale(&mut self, action: ActionHandle, time_scale: f32) {
        self.with_action(action, |a| a.time_scale = time_scale);
    }

    fn is_running(&self, action: ActionHandle) -> bool {
        self.actions.get(action).is_some_and(AnimationAction::is_running)
    }

    fn fade_in(&mut self, action: ActionHandle, duration: f32) {
        self.with_action(action, |a| a.fade_in(duration));
    }

    fn fade_out(&mut self, action: ActionHandle, duration: f32) {
        self.with_action(action, |a| a.fade_out(duration));
    }

    fn subscribe_finished(&mut self, action: ActionHandle) -> SubscriptionId {
        self.subscriptions.insert(action)
    }

    fn unsubscribe_finished(&mut self, subscription: SubscriptionId) -> bool {
        self.subscriptions.remove(subscription).is_some()
    }

    fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    fn update(&mut self, dt: f32) -> FiredSubscriptions {
        let mut finished: SmallVec<[ActionHandle; 4]> = SmallVec::new();

        for &handle in &self.order {
            if let Some(action) = self.actions.get_mut(handle)
                && action.update(dt)
            {
                log::debug!("Animation '{}' finished", action.name());
                finished.push(handle);
            }
        }

        if finished.is_empty() {
            return FiredSubscriptions::new();
        }

        self.subscriptions
            .iter()
            .filter(|&(_, action)| finished.contains(action))
            .map(|(id, _)| id)
            .collect()
    }
}
