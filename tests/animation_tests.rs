//! Animation System Tests
//!
//! Tests for:
//! - AnimationMixer clip registration and lookup
//! - AnimationAction loop modes (Once, Repeat, PingPong) driven through the mixer
//! - Weight fades and their effect on enabled/running state
//! - Finished-event subscriptions

use gateflight::animation::action::LoopMode;
use gateflight::animation::clip::AnimationClip;
use gateflight::animation::mixer::{ActionHandle, AnimationMixer};
use gateflight::animation::rig::AnimationRig;

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn single_clip_mixer(duration: f32) -> (AnimationMixer, ActionHandle) {
    let mixer = AnimationMixer::from_clips([AnimationClip::new("test", duration)]);
    let handle = mixer.first_action().unwrap();
    (mixer, handle)
}

// ============================================================================
// AnimationMixer: Registration
// ============================================================================

#[test]
fn mixer_preserves_load_order() {
    let mixer = AnimationMixer::from_clips([
        AnimationClip::new("Open", 2.0),
        AnimationClip::new("Idle", 1.0),
        AnimationClip::new("Attack", 1.5),
    ]);

    let names: Vec<&str> = mixer.clip_names().collect();
    assert_eq!(names, ["Open", "Idle", "Attack"]);
    assert_eq!(mixer.first_action(), mixer.find_action("Open"));
    assert_eq!(mixer.action_count(), 3);
}

#[test]
fn mixer_duplicate_clip_returns_existing_action() {
    let mut mixer = AnimationMixer::new();
    let first = mixer.add_clip(AnimationClip::new("Idle", 1.0).into());
    let second = mixer.add_clip(AnimationClip::new("Idle", 4.0).into());

    assert_eq!(first, second);
    assert_eq!(mixer.action_count(), 1);
    assert!(approx(mixer.action(first).unwrap().clip().duration, 1.0));
}

#[test]
fn mixer_empty_has_no_first_action() {
    let mixer = AnimationMixer::new();
    assert!(mixer.first_action().is_none());
    assert!(mixer.find_action("Idle").is_none());
}

#[test]
fn clip_negative_duration_is_clamped() {
    let clip = AnimationClip::new("broken", -1.0);
    assert!(approx(clip.duration, 0.0));
}

// ============================================================================
// AnimationAction Loop Modes
// ============================================================================

#[test]
fn action_not_scheduled_does_not_advance() {
    let (mut mixer, handle) = single_clip_mixer(2.0);

    mixer.update(1.0);
    let action = mixer.action(handle).unwrap();
    assert!(approx(action.time, 0.0), "Unscheduled action advanced");
    assert!(!mixer.is_running(handle));
}

#[test]
fn action_once_with_clamp_pauses_at_end() {
    let (mut mixer, handle) = single_clip_mixer(2.0);
    mixer.set_loop_mode(handle, LoopMode::Once);
    mixer.set_clamp_when_finished(handle, true);
    mixer.play(handle);

    mixer.update(1.0);
    assert!(mixer.is_running(handle));

    mixer.update(3.0);
    let action = mixer.action(handle).unwrap();
    assert!(
        approx(action.time, 2.0),
        "Once: should clamp to duration, got {}",
        action.time
    );
    assert!(action.paused, "Once + clamp: should pause at end");
    assert!(action.enabled, "Once + clamp: should stay enabled");
    assert!(!mixer.is_running(handle));
    assert!(approx(action.effective_weight(), 1.0), "Clamped pose keeps its weight");
}

#[test]
fn action_once_without_clamp_disables() {
    let (mut mixer, handle) = single_clip_mixer(2.0);
    mixer.set_loop_mode(handle, LoopMode::Once);
    mixer.play(handle);

    mixer.update(2.5);
    let action = mixer.action(handle).unwrap();
    assert!(!action.enabled, "Once without clamp: should disable at end");
    assert!(approx(action.effective_weight(), 0.0));
    assert!(!mixer.is_running(handle));
}

#[test]
fn action_repeat_wraps() {
    let (mut mixer, handle) = single_clip_mixer(2.0);
    mixer.play(handle);

    mixer.update(2.5);
    let action = mixer.action(handle).unwrap();
    assert!(
        approx(action.time, 0.5),
        "Repeat: should wrap to 0.5, got {}",
        action.time
    );
    assert!(mixer.is_running(handle), "Repeat: should keep running");
}

#[test]
fn action_ping_pong_reflects() {
    let (mut mixer, handle) = single_clip_mixer(2.0);
    mixer.set_loop_mode(handle, LoopMode::PingPong);
    mixer.play(handle);

    mixer.update(3.0);
    let action = mixer.action(handle).unwrap();
    assert!(
        approx(action.time, 1.0),
        "PingPong: should bounce back to 1.0, got {}",
        action.time
    );
}

#[test]
fn action_time_scale() {
    let (mut mixer, handle) = single_clip_mixer(4.0);
    mixer.set_loop_mode(handle, LoopMode::Once);
    mixer.set_time_scale(handle, 0.5);
    mixer.play(handle);

    mixer.update(1.0);
    let action = mixer.action(handle).unwrap();
    assert!(approx(action.time, 0.5), "Expected 0.5, got {}", action.time);
}

#[test]
fn action_zero_time_scale_is_not_running() {
    let (mut mixer, handle) = single_clip_mixer(4.0);
    mixer.set_time_scale(handle, 0.0);
    mixer.play(handle);
    assert!(!mixer.is_running(handle));
}

#[test]
fn action_paused_does_not_advance() {
    let (mut mixer, handle) = single_clip_mixer(2.0);
    mixer.play(handle);
    mixer.update(0.5);
    mixer.pause(handle);

    mixer.update(1.0);
    assert!(approx(mixer.action(handle).unwrap().time, 0.5));
    assert!(!mixer.is_running(handle));
}

#[test]
fn action_reset_rewinds_and_unpauses() {
    let (mut mixer, handle) = single_clip_mixer(1.0);
    mixer.set_loop_mode(handle, LoopMode::Once);
    mixer.set_clamp_when_finished(handle, true);
    mixer.play(handle);
    mixer.update(2.0);
    assert!(!mixer.is_running(handle));

    mixer.reset(handle);
    let action = mixer.action(handle).unwrap();
    assert!(approx(action.time, 0.0));
    assert!(!action.paused);
    assert!(action.enabled);
    assert!(mixer.is_running(handle), "Reset keeps the action scheduled");
}

// ============================================================================
// Weight Fades
// ============================================================================

#[test]
fn fade_in_ramps_weight_linearly() {
    let (mut mixer, handle) = single_clip_mixer(10.0);
    mixer.fade_in(handle, 0.5);
    mixer.play(handle);
    assert!(approx(mixer.action(handle).unwrap().weight, 0.0));

    mixer.update(0.25);
    assert!(approx(mixer.action(handle).unwrap().weight, 0.5));

    mixer.update(0.25);
    let action = mixer.action(handle).unwrap();
    assert!(approx(action.weight, 1.0));
    assert!(!action.is_fading());
}

#[test]
fn fade_out_to_zero_disables_action() {
    let (mut mixer, handle) = single_clip_mixer(10.0);
    mixer.play(handle);
    mixer.fade_out(handle, 0.25);

    mixer.update(0.125);
    assert!(mixer.is_running(handle), "Still running mid-fade");

    mixer.update(0.125);
    let action = mixer.action(handle).unwrap();
    assert!(approx(action.weight, 0.0));
    assert!(!action.enabled);
    assert!(!mixer.is_running(handle));
}

#[test]
fn fade_progresses_in_mixer_time_while_paused() {
    let (mut mixer, handle) = single_clip_mixer(10.0);
    mixer.set_time_scale(handle, 0.25);
    mixer.play(handle);
    mixer.pause(handle);
    mixer.fade_out(handle, 0.5);

    mixer.update(0.5);
    let action = mixer.action(handle).unwrap();
    assert!(approx(action.weight, 0.0), "Fade ignores pause and time scale");
    assert!(approx(action.time, 0.0), "Paused playhead stays put");
}

#[test]
fn reset_cancels_pending_fade() {
    let (mut mixer, handle) = single_clip_mixer(10.0);
    mixer.play(handle);
    mixer.fade_out(handle, 1.0);
    mixer.update(0.25);

    mixer.reset(handle);
    assert!(!mixer.action(handle).unwrap().is_fading());
    mixer.update(1.0);
    assert!(mixer.is_running(handle));
}

// ============================================================================
// Finished Subscriptions
// ============================================================================

#[test]
fn finished_subscription_fires_on_end_frame_only() {
    let (mut mixer, handle) = single_clip_mixer(1.0);
    mixer.set_loop_mode(handle, LoopMode::Once);
    mixer.set_clamp_when_finished(handle, true);
    let subscription = mixer.subscribe_finished(handle);
    mixer.play(handle);

    assert!(mixer.update(0.5).is_empty());
    let fired = mixer.update(0.5);
    assert_eq!(fired.as_slice(), [subscription]);
    assert!(mixer.update(0.5).is_empty(), "Clamped action fires only once");
}

#[test]
fn finished_subscription_ignores_other_actions() {
    let mut mixer = AnimationMixer::from_clips([
        AnimationClip::new("Short", 0.5),
        AnimationClip::new("Long", 5.0),
    ]);
    let short = mixer.find_action("Short").unwrap();
    let long = mixer.find_action("Long").unwrap();
    for handle in [short, long] {
        mixer.set_loop_mode(handle, LoopMode::Once);
        mixer.play(handle);
    }
    let subscription = mixer.subscribe_finished(long);

    assert!(mixer.update(1.0).is_empty(), "Only the short clip finished");
    assert_eq!(mixer.update(4.0).as_slice(), [subscription]);
}

#[test]
fn unsubscribed_listener_never_fires() {
    let (mut mixer, handle) = single_clip_mixer(1.0);
    mixer.set_loop_mode(handle, LoopMode::Once);
    let subscription = mixer.subscribe_finished(handle);
    assert_eq!(mixer.subscription_count(), 1);

    assert!(mixer.unsubscribe_finished(subscription));
    assert!(!mixer.unsubscribe_finished(subscription));
    assert_eq!(mixer.subscription_count(), 0);

    mixer.play(handle);
    assert!(mixer.update(2.0).is_empty());
}

#[test]
fn repeating_action_never_finishes() {
    let (mut mixer, handle) = single_clip_mixer(1.0);
    mixer.subscribe_finished(handle);
    mixer.play(handle);

    for _ in 0..10 {
        assert!(mixer.update(0.75).is_empty());
    }
}
