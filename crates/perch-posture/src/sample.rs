use crate::{PostureError, joint_angle};
use perch_base::Vec2;

/// The shoulder–hip–knee landmark triple from one frame, in normalized
/// [0, 1] coordinates. Rebuilt every frame and discarded after use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorsoSample {
    pub shoulder: Vec2<f32>,
    pub hip: Vec2<f32>,
    pub knee: Vec2<f32>,
}

impl TorsoSample {
    pub fn new(shoulder: Vec2<f32>, hip: Vec2<f32>, knee: Vec2<f32>) -> Self {
        Self {
            shoulder,
            hip,
            knee,
        }
    }

    /// Angle at the hip between the torso and the thigh, in degrees.
    pub fn hip_angle(&self) -> Result<f32, PostureError> {
        joint_angle(self.shoulder, self.hip, self.knee)
    }
}
