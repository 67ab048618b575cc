use crate::error::AppError;
use perch_base::{Tensor, Vec2};
use perch_camera::{Camera, CameraError};
use perch_infer::{Landmark, Person};
use perch_posture::{PostureClassifier, PostureError, PostureLabel, TorsoSample};

/// Pull the next frame from the camera, treating per-frame failures as
/// skips.
///
/// An undecodable frame or a frame with an unexpected shape yields
/// `Ok(None)`: the capture thread keeps producing and the loop moves on.
/// Only a broken device, stream, or channel is fatal.
pub async fn next_frame(camera: &mut impl Camera) -> Result<Option<Tensor<u8>>, AppError> {
    match camera.recv().await {
        Ok(frame) => {
            if frame.ndim() != 3 || frame.shape[2] != 3 {
                log::warn!("unexpected frame shape {:?}, skipping", frame.shape);
                Ok(None)
            } else {
                Ok(Some(frame))
            }
        }
        Err(CameraError::Decode(msg)) => {
            log::warn!("undecodable frame, skipping: {msg}");
            Ok(None)
        }
        Err(err) => Err(AppError::Camera(err)),
    }
}

/// Result of classifying one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameOutcome {
    /// Landmarks in normalized [0, 1] frame coordinates.
    pub sample: TorsoSample,
    pub angle_degrees: f32,
    pub label: PostureLabel,
}

/// Extract the left shoulder/hip/knee triple from a detection, normalized
/// to [0, 1] frame space.
///
/// Returns `None` when any of the three landmarks falls below
/// `min_confidence`: an occluded landmark means this frame has no valid
/// posture sample. Absence is explicit here, never an exception path.
pub fn torso_sample(
    person: &Person,
    frame_width: u32,
    frame_height: u32,
    min_confidence: f32,
) -> Option<TorsoSample> {
    let landmarks = [Landmark::LeftShoulder, Landmark::LeftHip, Landmark::LeftKnee];

    let mut points = [Vec2::zero(); 3];
    for (point, &landmark) in points.iter_mut().zip(&landmarks) {
        let keypoint = person.keypoint(landmark);
        if keypoint.confidence < min_confidence {
            log::debug!("{landmark:?} below confidence threshold, skipping frame");
            return None;
        }
        *point = Vec2::new(
            keypoint.position.x / frame_width as f32,
            keypoint.position.y / frame_height as f32,
        );
    }

    Some(TorsoSample::new(points[0], points[1], points[2]))
}

/// Classify the best detection of one frame, if it yields a valid sample.
///
/// `people` is expected sorted by score descending (the estimator's
/// contract); only the top person is considered. A degenerate landmark
/// triple is logged and skipped, matching the rule that an undefined
/// angle means "no posture reading this frame", never a crash.
pub fn evaluate(
    people: &[Person],
    frame_width: u32,
    frame_height: u32,
    min_confidence: f32,
    classifier: &PostureClassifier,
) -> Option<FrameOutcome> {
    let person = people.first()?;
    let sample = torso_sample(person, frame_width, frame_height, min_confidence)?;

    match sample.hip_angle() {
        Ok(angle_degrees) => Some(FrameOutcome {
            sample,
            angle_degrees,
            label: classifier.classify(angle_degrees),
        }),
        Err(PostureError::DegenerateAngle) => {
            log::debug!("degenerate landmark triple, skipping frame");
            None
        }
    }
}
