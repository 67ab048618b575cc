/// Default hip-angle threshold separating upright sitting from slouching.
///
/// A policy constant, not a derived value: an open torso angle (leaning
/// back past vertical) reads as good posture, a closed one as slouching.
pub const DEFAULT_THRESHOLD_DEGREES: f32 = 90.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostureLabel {
    Good,
    Bad,
}

/// Threshold classifier over a single frame's hip angle.
///
/// Stateless apart from the threshold: no hysteresis, no smoothing, no
/// memory of previous frames.
#[derive(Debug, Clone, Copy)]
pub struct PostureClassifier {
    threshold_degrees: f32,
}

impl Default for PostureClassifier {
    fn default() -> Self {
        Self {
            threshold_degrees: DEFAULT_THRESHOLD_DEGREES,
        }
    }
}

impl PostureClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the threshold in degrees (builder pattern).
    pub fn with_threshold(mut self, degrees: f32) -> Self {
        self.threshold_degrees = degrees;
        self
    }

    pub fn threshold(&self) -> f32 {
        self.threshold_degrees
    }

    /// Angles strictly above the threshold are good; the threshold itself
    /// classifies as bad.
    pub fn classify(&self, angle_degrees: f32) -> PostureLabel {
        if angle_degrees > self.threshold_degrees {
            PostureLabel::Good
        } else {
            PostureLabel::Bad
        }
    }
}
