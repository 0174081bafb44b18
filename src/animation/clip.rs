use serde::{Deserialize, Serialize};

/// A named skeletal animation sequence.
///
/// Keyframe data stays with the asset decoder and the renderer; the
/// choreography layer only needs to know how long a clip runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationClip {
    pub name: String,
    pub duration: f32,
}

impl AnimationClip {
    #[must_use]
    pub fn new(name: impl Into<String>, duration: f32) -> Self {
        Self {
            name: name.into(),
            duration: duration.max(0.0),
        }
    }
}
