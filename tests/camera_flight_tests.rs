//! Camera Flight Tests
//!
//! Tests for:
//! - At-most-once arming and trigger handling
//! - Delay / duration timing with overflow carried into the tween
//! - Completion callback ordering
//! - Reset and teardown
//! - TweenEngine and Easing behavior

use std::cell::Cell;
use std::rc::Rc;

use glam::Vec3;
use slotmap::SlotMap;

use gateflight::camera::flight::{CameraFlightSequencer, FlightOptions, FlightPhase};
use gateflight::tween::{
    EaseDirection, Easing, TweenEngine, TweenId, TweenSample, TweenSamples, Tweener,
};

const EPSILON: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn approx_vec3(a: Vec3, b: Vec3) -> bool {
    a.abs_diff_eq(b, EPSILON)
}

// ============================================================================
// Recording Tweener
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
struct Interpolation {
    from: Vec3,
    to: Vec3,
    duration: f32,
    easing: Easing,
}

/// Linear tweener that records every interpolation request.
#[derive(Default)]
struct RecordingTweener {
    requests: Vec<Interpolation>,
    running: SlotMap<TweenId, (Interpolation, f32)>,
    cancelled: usize,
}

impl Tweener for RecordingTweener {
    fn interpolate(&mut self, from: Vec3, to: Vec3, duration: f32, easing: Easing) -> TweenId {
        let request = Interpolation {
            from,
            to,
            duration,
            easing,
        };
        self.requests.push(request);
        self.running.insert((request, 0.0))
    }

    fn cancel(&mut self, tween: TweenId) -> bool {
        self.cancelled += 1;
        self.running.remove(tween).is_some()
    }

    fn update(&mut self, dt: f32) -> TweenSamples {
        let mut samples = TweenSamples::new();
        for (id, (request, elapsed)) in &mut self.running {
            *elapsed += dt;
            let finished = *elapsed >= request.duration;
            let t = (*elapsed / request.duration).min(1.0);
            samples.push(TweenSample {
                id,
                value: request.from.lerp(request.to, t),
                finished,
            });
        }
        self.running.retain(|_, (request, elapsed)| *elapsed < request.duration);
        samples
    }
}

const TARGET: Vec3 = Vec3::new(0.0, 0.0, -570.0);

fn options(delay: f32, duration: f32) -> FlightOptions {
    FlightOptions {
        duration,
        delay,
        easing: Easing::Linear,
    }
}

fn flag() -> (Rc<Cell<bool>>, Box<dyn FnOnce()>) {
    let fired = Rc::new(Cell::new(false));
    let handle = Rc::clone(&fired);
    (fired, Box::new(move || handle.set(true)))
}

// ============================================================================
// Arming
// ============================================================================

#[test]
fn arm_twice_keeps_first_parameters() {
    let mut flight = CameraFlightSequencer::new(RecordingTweener::default());
    let mut camera = Vec3::new(0.0, 0.0, 5.0);

    assert!(flight.arm(TARGET, options(0.0, 1.0), None));
    assert!(!flight.arm(Vec3::X, options(0.0, 9.0), None));
    assert!(flight.has_flown());

    for _ in 0..8 {
        flight.on_frame_tick(0.25, &mut camera);
    }

    let requests = &flight.tweener().requests;
    assert_eq!(requests.len(), 1);
    assert!(approx_vec3(requests[0].to, TARGET));
    assert!(approx(requests[0].duration, 1.0));
    assert!(approx_vec3(camera, TARGET));
}

#[test]
fn trigger_arms_preset_plan_once() {
    let mut flight = CameraFlightSequencer::new(RecordingTweener::default())
        .with_plan(TARGET, options(0.5, 1.5));

    assert!(!flight.set_trigger(false));
    assert!(!flight.has_flown());

    assert!(flight.set_trigger(true));
    assert!(!flight.set_trigger(true));
    assert!(flight.has_flown());
    assert!(approx_vec3(flight.state().target, TARGET));
    assert!(approx(flight.state().delay, 0.5));
}

#[test]
fn trigger_without_plan_does_nothing() {
    let mut flight = CameraFlightSequencer::new(RecordingTweener::default());
    assert!(!flight.set_trigger(true));
    assert!(!flight.has_flown());
    assert_eq!(flight.phase(), FlightPhase::Idle);
}

#[test]
fn idle_sequencer_leaves_camera_alone() {
    let mut flight = CameraFlightSequencer::new(RecordingTweener::default());
    let mut camera = Vec3::new(1.0, 2.0, 3.0);
    for _ in 0..4 {
        assert!(!flight.on_frame_tick(0.25, &mut camera));
    }
    assert_eq!(camera, Vec3::new(1.0, 2.0, 3.0));
    assert!(flight.tweener().requests.is_empty());
}

// ============================================================================
// Timing
// ============================================================================

#[test]
fn completes_exactly_at_delay_plus_duration() {
    let mut flight = CameraFlightSequencer::new(RecordingTweener::default());
    let mut camera = Vec3::new(0.0, 0.0, 5.0);
    let (fired, callback) = flag();
    flight.arm(TARGET, options(0.5, 1.5), Some(callback));

    let mut elapsed = 0.0;
    let mut landed_at = None;
    for _ in 0..12 {
        elapsed += 0.25;
        if flight.on_frame_tick(0.25, &mut camera) {
            landed_at = Some(elapsed);
            break;
        }
        assert!(!fired.get(), "Callback fired early at t={elapsed}");
    }

    assert_eq!(landed_at, Some(2.0));
    assert!(fired.get());
    assert!(approx_vec3(camera, TARGET));
    assert_eq!(flight.phase(), FlightPhase::Landed);
}

#[test]
fn tween_starts_from_camera_position_after_delay() {
    let mut flight = CameraFlightSequencer::new(RecordingTweener::default());
    let mut camera = Vec3::new(0.0, 0.0, 5.0);
    flight.arm(TARGET, options(0.5, 1.0), None);

    flight.on_frame_tick(0.25, &mut camera);
    assert!(flight.tweener().requests.is_empty(), "Still waiting");
    assert!(matches!(flight.phase(), FlightPhase::Waiting(_)));

    // The host moved the camera during the delay
    camera = Vec3::new(0.0, 1.0, 5.0);
    flight.on_frame_tick(0.25, &mut camera);

    let requests = &flight.tweener().requests;
    assert_eq!(requests.len(), 1);
    assert!(approx_vec3(requests[0].from, Vec3::new(0.0, 1.0, 5.0)));
    assert!(matches!(flight.phase(), FlightPhase::Flying(_)));
}

#[test]
fn delay_overflow_is_carried_into_tween() {
    let mut flight = CameraFlightSequencer::new(RecordingTweener::default());
    let mut camera = Vec3::ZERO;
    flight.arm(Vec3::new(0.0, 0.0, -4.0), options(0.25, 1.0), None);

    // 0.75s frame: 0.25s of delay and 0.5s of flight
    flight.on_frame_tick(0.75, &mut camera);
    assert!(approx_vec3(camera, Vec3::new(0.0, 0.0, -2.0)), "got {camera}");
}

#[test]
fn zero_delay_starts_on_first_tick() {
    let mut flight = CameraFlightSequencer::new(RecordingTweener::default());
    let mut camera = Vec3::ZERO;
    flight.arm(Vec3::X, options(0.0, 0.5), None);

    assert!(!flight.on_frame_tick(0.25, &mut camera));
    assert!(approx_vec3(camera, Vec3::new(0.5, 0.0, 0.0)));
    assert!(flight.on_frame_tick(0.25, &mut camera));
}

#[test]
fn on_complete_replaces_armed_callback() {
    let mut flight = CameraFlightSequencer::new(RecordingTweener::default());
    let mut camera = Vec3::ZERO;
    let (first, first_callback) = flag();
    let (second, second_callback) = flag();
    flight.arm(Vec3::X, options(0.0, 0.25), Some(first_callback));
    flight.on_complete(second_callback);

    assert!(flight.on_frame_tick(0.25, &mut camera));
    assert!(!first.get());
    assert!(second.get());
}

#[test]
fn callback_registered_before_trigger_survives_arming() {
    let mut flight = CameraFlightSequencer::new(RecordingTweener::default())
        .with_plan(TARGET, options(0.5, 1.5));
    let mut camera = Vec3::new(0.0, 0.0, 5.0);
    let count = Rc::new(Cell::new(0));
    let handle = Rc::clone(&count);
    flight.on_complete(move || handle.set(handle.get() + 1));

    assert!(flight.set_trigger(true));

    let mut elapsed = 0.0;
    let mut landed_at = None;
    for _ in 0..16 {
        elapsed += 0.25;
        if flight.on_frame_tick(0.25, &mut camera) {
            landed_at.get_or_insert(elapsed);
        }
        if landed_at.is_none() {
            assert_eq!(count.get(), 0, "Callback fired early at t={elapsed}");
        }
    }

    assert_eq!(landed_at, Some(2.0));
    assert_eq!(count.get(), 1);
    assert!(approx_vec3(camera, TARGET));
}

#[test]
fn landed_flight_fires_callback_once() {
    let mut flight = CameraFlightSequencer::new(RecordingTweener::default());
    let mut camera = Vec3::ZERO;
    let count = Rc::new(Cell::new(0));
    let handle = Rc::clone(&count);
    flight.arm(
        Vec3::X,
        options(0.0, 0.25),
        Some(Box::new(move || handle.set(handle.get() + 1))),
    );

    for _ in 0..6 {
        flight.on_frame_tick(0.25, &mut camera);
    }
    assert_eq!(count.get(), 1);
}

// ============================================================================
// Reset & Teardown
// ============================================================================

#[test]
fn teardown_during_delay_cancels_flight() {
    let mut flight = CameraFlightSequencer::new(RecordingTweener::default());
    let mut camera = Vec3::new(0.0, 0.0, 5.0);
    let (fired, callback) = flag();
    flight.arm(TARGET, options(0.5, 1.5), Some(callback));

    flight.on_frame_tick(0.25, &mut camera);
    flight.teardown();
    for _ in 0..12 {
        assert!(!flight.on_frame_tick(0.25, &mut camera));
    }

    assert!(!fired.get());
    assert!(flight.tweener().requests.is_empty());
    assert_eq!(camera, Vec3::new(0.0, 0.0, 5.0));
    assert!(!flight.arm(TARGET, options(0.0, 1.0), None), "Torn down");
}

#[test]
fn teardown_mid_flight_cancels_tween() {
    let mut flight = CameraFlightSequencer::new(RecordingTweener::default());
    let mut camera = Vec3::ZERO;
    let (fired, callback) = flag();
    flight.arm(Vec3::X, options(0.0, 1.0), Some(callback));
    flight.on_frame_tick(0.25, &mut camera);

    flight.teardown();
    assert_eq!(flight.tweener().cancelled, 1);
    assert!(flight.tweener().running.is_empty());
    assert!(!flight.on_frame_tick(1.0, &mut camera));
    assert!(!fired.get());
}

#[test]
fn reset_allows_rearming() {
    let mut flight = CameraFlightSequencer::new(RecordingTweener::default())
        .with_plan(TARGET, options(0.0, 0.25));
    let mut camera = Vec3::ZERO;

    assert!(flight.set_trigger(true));
    assert!(flight.on_frame_tick(0.25, &mut camera));

    flight.reset();
    assert!(!flight.has_flown());
    assert_eq!(flight.phase(), FlightPhase::Idle);

    assert!(flight.arm(Vec3::ZERO, options(0.0, 0.25), None));
    assert!(flight.on_frame_tick(0.25, &mut camera));
    assert_eq!(flight.tweener().requests.len(), 2);
    assert!(approx_vec3(camera, Vec3::ZERO));
}

#[test]
fn reset_cancels_pending_flight() {
    let (fired, callback) = flag();
    let mut flight = CameraFlightSequencer::new(RecordingTweener::default());
    let mut camera = Vec3::ZERO;
    flight.arm(Vec3::X, options(0.5, 0.5), Some(callback));
    flight.on_frame_tick(0.25, &mut camera);

    flight.reset();
    for _ in 0..8 {
        assert!(!flight.on_frame_tick(0.25, &mut camera));
    }
    assert!(!fired.get());
    assert!(flight.tweener().requests.is_empty());
}

// ============================================================================
// TweenEngine
// ============================================================================

#[test]
fn engine_reports_finish_once_then_forgets() {
    let mut engine = TweenEngine::new();
    let id = engine.interpolate(Vec3::ZERO, Vec3::ONE, 0.5, Easing::Linear);

    let first = engine.update(0.25);
    assert_eq!(first.len(), 1);
    assert!(!first[0].finished);
    assert!(approx_vec3(first[0].value, Vec3::splat(0.5)));
    assert!(engine.value(id).is_some());

    let second = engine.update(0.25);
    assert!(second[0].finished);
    assert_eq!(second[0].value, Vec3::ONE);
    assert!(engine.is_empty());
    assert!(engine.update(0.25).is_empty());
}

#[test]
fn engine_cancel_stops_reporting() {
    let mut engine = TweenEngine::new();
    let id = engine.interpolate(Vec3::ZERO, Vec3::ONE, 1.0, Easing::default());
    assert!(engine.cancel(id));
    assert!(!engine.cancel(id));
    assert!(engine.update(0.25).is_empty());
}

#[test]
fn engine_zero_duration_lands_immediately() {
    let mut engine = TweenEngine::new();
    engine.interpolate(Vec3::ZERO, Vec3::X, 0.0, Easing::default());
    let samples = engine.update(0.0);
    assert!(samples[0].finished);
    assert_eq!(samples[0].value, Vec3::X);
}

#[test]
fn engine_tolerates_accumulated_rounding() {
    let mut engine = TweenEngine::new();
    engine.interpolate(Vec3::ZERO, Vec3::X, 1.0, Easing::default());

    // Ten 0.1s frames do not sum to exactly 1.0 in f32
    let finished: Vec<bool> = (0..10)
        .map(|_| engine.update(0.1).first().is_some_and(|s| s.finished))
        .collect();
    assert_eq!(finished.iter().filter(|&&f| f).count(), 1);
    assert!(finished[9]);
}

#[test]
fn sequencer_on_engine_uses_easing() {
    let mut flight = CameraFlightSequencer::new(TweenEngine::new());
    let mut camera = Vec3::ZERO;
    flight.arm(
        Vec3::new(0.0, 0.0, -8.0),
        FlightOptions {
            duration: 1.0,
            delay: 0.0,
            easing: Easing::Power(1, EaseDirection::In),
        },
        None,
    );

    flight.on_frame_tick(0.5, &mut camera);
    // Quadratic ease-in at t = 0.5
    assert!(approx_vec3(camera, Vec3::new(0.0, 0.0, -2.0)), "got {camera}");
    flight.on_frame_tick(0.5, &mut camera);
    assert!(approx_vec3(camera, Vec3::new(0.0, 0.0, -8.0)));
    assert!(flight.tweener().is_empty());
}

// ============================================================================
// Easing
// ============================================================================

#[test]
fn easing_names_parse() {
    let cases = [
        ("none", Easing::Linear),
        ("power2.inOut", Easing::Power(2, EaseDirection::InOut)),
        ("power1", Easing::Power(1, EaseDirection::Out)),
        ("sine.in", Easing::Sine(EaseDirection::In)),
        ("expo.out", Easing::Expo(EaseDirection::Out)),
        ("circ.inout", Easing::Circ(EaseDirection::InOut)),
    ];
    for (name, expected) in cases {
        let parsed: Easing = name.parse().unwrap();
        assert_eq!(parsed, expected, "{name}");
    }
    assert!("bounce.out".parse::<Easing>().is_err());
}

#[test]
fn easing_curves_hit_endpoints() {
    let curves = [
        Easing::Linear,
        Easing::default(),
        Easing::Sine(EaseDirection::Out),
        Easing::Expo(EaseDirection::In),
        Easing::Circ(EaseDirection::InOut),
    ];
    for easing in curves {
        assert!(approx(easing.apply(0.0), 0.0), "{easing} at 0");
        assert!(approx(easing.apply(1.0), 1.0), "{easing} at 1");
    }
    assert!(approx(Easing::default().apply(0.5), 0.5), "inOut is symmetric");
}

#[test]
fn easing_serializes_as_name() {
    let json = serde_json::to_string(&Easing::Power(2, EaseDirection::InOut)).unwrap();
    assert_eq!(json, "\"power2.inOut\"");
    let parsed: Easing = serde_json::from_str("\"sine.out\"").unwrap();
    assert_eq!(parsed, Easing::Sine(EaseDirection::Out));
}

