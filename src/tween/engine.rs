use glam::Vec3;
use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;

use crate::tween::easing::Easing;

new_key_type! {
    /// Handle of a running tween.
    pub struct TweenId;
}

/// Slack allowed when comparing accumulated frame time with a duration.
pub const COMPLETION_EPSILON: f32 = 1e-5;

/// Value of one tween after an update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSample {
    pub id: TweenId,
    pub value: Vec3,
    /// Set on the single update where the tween reaches its end.
    pub finished: bool,
}

pub type TweenSamples = SmallVec<[TweenSample; 2]>;

/// Capability to interpolate a position over time.
///
/// Finished tweens are reported once and then forgotten.
pub trait Tweener {
    fn interpolate(&mut self, from: Vec3, to: Vec3, duration: f32, easing: Easing) -> TweenId;

    /// Stops a tween without reporting it. Returns `false` if it was not running.
    fn cancel(&mut self, tween: TweenId) -> bool;

    /// Advances all tweens by `dt` seconds.
    fn update(&mut self, dt: f32) -> TweenSamples;
}

#[derive(Debug, Clone, Copy)]
struct Tween {
    from: Vec3,
    to: Vec3,
    duration: f32,
    elapsed: f32,
    easing: Easing,
}

impl Tween {
    fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0)
        }
    }

    fn is_finished(&self) -> bool {
        self.elapsed + COMPLETION_EPSILON >= self.duration
    }
}

/// Frame-driven [`Tweener`] for `Vec3` values.
#[derive(Debug, Default)]
pub struct TweenEngine {
    tweens: SlotMap<TweenId, Tween>,
}

impl TweenEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tweens still running.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Current value of a running tween.
    #[must_use]
    pub fn value(&self, tween: TweenId) -> Option<Vec3> {
        self.tweens
            .get(tween)
            .map(|t| t.from.lerp(t.to, t.easing.apply(t.progress())))
    }
}

impl Tweener for TweenEngine {
    fn interpolate(&mut self, from: Vec3, to: Vec3, duration: f32, easing: Easing) -> TweenId {
        self.tweens.insert(Tween {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing,
        })
    }

    fn cancel(&mut self, tween: TweenId) -> bool {
        self.tweens.remove(tween).is_some()
    }

    fn update(&mut self, dt: f32) -> TweenSamples {
        let mut samples = TweenSamples::new();

        for (id, tween) in &mut self.tweens {
            tween.elapsed += dt.max(0.0);
            let finished = tween.is_finished();
            let value = if finished {
                tween.to
            } else {
                tween.from.lerp(tween.to, tween.easing.apply(tween.progress()))
            };
            samples.push(TweenSample {
                id,
                value,
                finished,
            });
        }

        self.tweens.retain(|_, tween| !tween.is_finished());
        samples
    }
}
