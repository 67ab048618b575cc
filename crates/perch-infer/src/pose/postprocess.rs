use crate::InferError;
use perch_base::{Tensor, Vec2};

use super::types::{Keypoint, LANDMARK_COUNT, Letterbox, Person};

// Output rows per candidate: 4 bbox values, 1 score, 17 keypoints x (x, y, vis).
const ROWS: usize = 4 + 1 + LANDMARK_COUNT * 3;
const SCORE_ROW: usize = 4;
const KEYPOINT_BASE_ROW: usize = 5;

/// Decode the raw pose model output into per-person landmark sets.
///
/// `output` must be `[1, 56, N]` (YOLO pose layout, NMS already applied by
/// the exported model). Candidates below `conf_threshold` are discarded;
/// bounding-box rows are skipped entirely since perch classifies a single
/// person and never draws boxes. Keypoints are mapped back to source-image
/// pixels through `letterbox`. Result is sorted by score, best first.
pub fn postprocess(
    output: &Tensor<f32>,
    letterbox: &Letterbox,
    conf_threshold: f32,
) -> Result<Vec<Person>, InferError> {
    if output.ndim() != 3 || output.shape[0] != 1 || output.shape[1] != ROWS {
        return Err(InferError::ShapeMismatch {
            expected: format!("[1, {ROWS}, N]"),
            got: format!("{:?}", output.shape),
        });
    }

    let n = output.shape[2];
    let mut people = Vec::new();

    // Layout is row-major [1, 56, N]: value (row, i) lives at row * N + i.
    for i in 0..n {
        let score = output.data[SCORE_ROW * n + i];
        if score < conf_threshold {
            continue;
        }

        let mut keypoints = [Keypoint {
            position: Vec2::zero(),
            confidence: 0.0,
        }; LANDMARK_COUNT];

        for (k, keypoint) in keypoints.iter_mut().enumerate() {
            let row = KEYPOINT_BASE_ROW + k * 3;
            let x = output.data[row * n + i];
            let y = output.data[(row + 1) * n + i];
            let vis = output.data[(row + 2) * n + i];

            keypoint.position = letterbox.to_source(Vec2::new(x, y));
            keypoint.confidence = vis;
        }

        people.push(Person { score, keypoints });
    }

    people.sort_by(|a, b| b.score.total_cmp(&a.score));
    Ok(people)
}
