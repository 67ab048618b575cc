use perch_base::Vec2;

/// Number of keypoints in the COCO pose format.
pub const LANDMARK_COUNT: usize = 17;

/// Named anatomical keypoints, in COCO output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landmark {
    Nose = 0,
    LeftEye = 1,
    RightEye = 2,
    LeftEar = 3,
    RightEar = 4,
    LeftShoulder = 5,
    RightShoulder = 6,
    LeftElbow = 7,
    RightElbow = 8,
    LeftWrist = 9,
    RightWrist = 10,
    LeftHip = 11,
    RightHip = 12,
    LeftKnee = 13,
    RightKnee = 14,
    LeftAnkle = 15,
    RightAnkle = 16,
}

impl Landmark {
    /// Position of this landmark in the model's keypoint array.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A single detected keypoint.
///
/// `position` is in source-image pixel coordinates (already rescaled back
/// through the letterbox transform). `confidence` is the model's
/// continuous visibility score in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keypoint {
    pub position: Vec2<f32>,
    pub confidence: f32,
}

/// One detected person: an overall detection score and 17 COCO keypoints.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub score: f32,
    pub keypoints: [Keypoint; LANDMARK_COUNT],
}

impl Person {
    pub fn keypoint(&self, landmark: Landmark) -> &Keypoint {
        &self.keypoints[landmark.index()]
    }
}

/// Letterbox transform applied during preprocessing, needed to map model
/// coordinates back to the source image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Letterbox {
    /// Uniform scale factor applied to the source image.
    pub scale: f32,
    /// Horizontal padding in model pixels.
    pub pad_x: f32,
    /// Vertical padding in model pixels.
    pub pad_y: f32,
}

impl Letterbox {
    /// Map a point from model space back to source-image pixels.
    pub fn to_source(&self, p: Vec2<f32>) -> Vec2<f32> {
        Vec2::new((p.x - self.pad_x) / self.scale, (p.y - self.pad_y) / self.scale)
    }
}
