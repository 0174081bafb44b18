use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::animation::clip::AnimationClip;

/// How an action behaves when its playhead reaches the end of the clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopMode {
    /// Play to the end once, then either clamp or disable.
    Once,
    /// Wrap around forever.
    #[default]
    Repeat,
    /// Bounce between start and end forever.
    PingPong,
}

/// A scheduled linear weight ramp.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Fade {
    from: f32,
    to: f32,
    elapsed: f32,
    duration: f32,
}

/// Playback state of one clip inside a mixer.
///
/// An action only advances after [`play`](Self::play) schedules it. Weight
/// fades progress in mixer time (the raw frame delta), while the playhead
/// progresses in clip time (delta multiplied by `time_scale`).
#[derive(Debug, Clone)]
pub struct AnimationAction {
    clip: Arc<AnimationClip>,

    pub time: f32,
    pub time_scale: f32,
    pub weight: f32,
    pub loop_mode: LoopMode,
    /// With [`LoopMode::Once`], pause on the last frame instead of disabling.
    pub clamp_when_finished: bool,
    pub paused: bool,
    pub enabled: bool,

    active: bool,
    // Unfolded playhead for ping-pong; `time` holds the reflected value.
    cycle_time: f32,
    fade: Option<Fade>,
}

impl AnimationAction {
    #[must_use]
    pub fn new(clip: Arc<AnimationClip>) -> Self {
        Self {
            clip,
            time: 0.0,
            time_scale: 1.0,
            weight: 1.0,
            loop_mode: LoopMode::Repeat,
            clamp_when_finished: false,
            paused: false,
            enabled: true,
            active: false,
            cycle_time: 0.0,
            fade: None,
        }
    }

    #[must_use]
    pub fn clip(&self) -> &Arc<AnimationClip> {
        &self.clip
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.clip.name
    }

    /// Schedules the action in its mixer.
    pub fn play(&mut self) {
        self.active = true;
    }

    /// Unschedules the action and rewinds it.
    pub fn stop(&mut self) {
        self.active = false;
        self.reset();
    }

    /// Rewinds to time zero and clears pause, disable and any pending fade.
    /// Scheduling and weight are left as they are.
    pub fn reset(&mut self) {
        self.paused = false;
        self.enabled = true;
        self.time = 0.0;
        self.cycle_time = 0.0;
        self.fade = None;
    }

    pub fn fade_in(&mut self, duration: f32) {
        self.schedule_fade(duration, 0.0, 1.0);
    }

    pub fn fade_out(&mut self, duration: f32) {
        self.schedule_fade(duration, 1.0, 0.0);
    }

    #[must_use]
    pub fn is_fading(&self) -> bool {
        self.fade.is_some()
    }

    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.active
    }

    /// True while the playhead is actually moving.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.active && self.enabled && !self.paused && self.time_scale != 0.0
    }

    /// Weight the renderer should blend this action with.
    #[must_use]
    pub fn effective_weight(&self) -> f32 {
        if self.active && self.enabled {
            self.weight
        } else {
            0.0
        }
    }

    fn schedule_fade(&mut self, duration: f32, from: f32, to: f32) {
        self.weight = from;
        self.fade = Some(Fade {
            from,
            to,
            elapsed: 0.0,
            duration: duration.max(0.0),
        });
    }

    fn update_fade(&mut self, dt: f32) {
        let Some(fade) = self.fade.as_mut() else {
            return;
        };

        fade.elapsed += dt;
        let t = if fade.duration > 0.0 {
            (fade.elapsed / fade.duration).min(1.0)
        } else {
            1.0
        };
        self.weight = fade.from + (fade.to - fade.from) * t;

        if t >= 1.0 {
            self.weight = fade.to;
            self.fade = None;
            if self.weight <= 0.0 {
                self.enabled = false;
            }
        }
    }

    /// Core logic: advance fades and time.
    ///
    /// Returns `true` on the step where a [`LoopMode::Once`] action reaches
    /// its end.
    pub(crate) fn update(&mut self, dt: f32) -> bool {
        if !self.active {
            return false;
        }

        if self.enabled {
            self.update_fade(dt);
        }

        if self.paused || !self.enabled {
            return false;
        }

        let duration = self.clip.duration;
        let delta = dt * self.time_scale;

        match self.loop_mode {
            LoopMode::Once => {
                self.time += delta;
                let end = if self.time >= duration {
                    duration
                } else if self.time < 0.0 {
                    0.0
                } else {
                    return false;
                };

                self.time = end;
                if self.clamp_when_finished {
                    self.paused = true;
                } else {
                    self.enabled = false;
                }
                true
            }
            LoopMode::Repeat => {
                if duration <= 0.0 {
                    return false;
                }
                self.time += delta;
                if self.time >= duration {
                    self.time %= duration;
                } else if self.time < 0.0 {
                    // Reverse playback wraps to the end
                    self.time = duration + (self.time % duration);
                }
                false
            }
            LoopMode::PingPong => {
                if duration <= 0.0 {
                    return false;
                }
                let double_duration = duration * 2.0;
                self.cycle_time = (self.cycle_time + delta).rem_euclid(double_duration);
                self.time = if self.cycle_time > duration {
                    double_duration - self.cycle_time
                } else {
                    self.cycle_time
                };
                false
            }
        }
    }
}
