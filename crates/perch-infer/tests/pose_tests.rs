use perch_base::{Tensor, Vec2};
use perch_infer::pose::{self, Landmark, Letterbox};
use perch_infer::{InferError, postprocess, preprocess};

const ROWS: usize = 56;

/// Build a raw `[1, 56, n]` output tensor from per-candidate columns.
fn output_from_columns(columns: &[[f32; ROWS]]) -> Tensor<f32> {
    let n = columns.len();
    let mut data = vec![0.0; ROWS * n];
    for (i, column) in columns.iter().enumerate() {
        for (row, &value) in column.iter().enumerate() {
            data[row * n + i] = value;
        }
    }
    Tensor::new(vec![1, ROWS, n], data).unwrap()
}

fn identity_letterbox() -> Letterbox {
    Letterbox {
        scale: 1.0,
        pad_x: 0.0,
        pad_y: 0.0,
    }
}

#[test]
fn test_preprocess_rejects_wrong_rank() {
    let flat = Tensor::new(vec![640, 640], vec![0u8; 640 * 640]).unwrap();
    assert!(matches!(
        preprocess(&flat),
        Err(InferError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_preprocess_rejects_wrong_channel_count() {
    let gray = Tensor::new(vec![32, 32, 1], vec![0u8; 32 * 32]).unwrap();
    assert!(matches!(
        preprocess(&gray),
        Err(InferError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_preprocess_output_shape_and_range() {
    let frame = Tensor::new(vec![48, 64, 3], vec![255u8; 48 * 64 * 3]).unwrap();
    let (input, _letterbox) = preprocess(&frame).unwrap();

    assert_eq!(input.shape, vec![1, 3, 640, 640]);
    assert!(input.data.iter().all(|&v| (0.0..=1.0).contains(&v)));
}

#[test]
fn test_preprocess_letterbox_for_landscape_frame() {
    // 640x480 frame: width fills the model, height is padded.
    let frame = Tensor::new(vec![480, 640, 3], vec![0u8; 480 * 640 * 3]).unwrap();
    let (_, letterbox) = preprocess(&frame).unwrap();

    assert!((letterbox.scale - 1.0).abs() < 1e-6);
    assert_eq!(letterbox.pad_x, 0.0);
    assert_eq!(letterbox.pad_y, 80.0);
}

#[test]
fn test_letterbox_round_trip() {
    let letterbox = Letterbox {
        scale: 0.5,
        pad_x: 20.0,
        pad_y: 40.0,
    };
    // Source pixel (100, 60) maps to model (70, 70); inverse must recover it.
    let recovered = letterbox.to_source(Vec2::new(70.0, 70.0));
    assert!((recovered.x - 100.0).abs() < 1e-4);
    assert!((recovered.y - 60.0).abs() < 1e-4);
}

#[test]
fn test_postprocess_rejects_wrong_shape() {
    let bad = Tensor::new(vec![1, 10, 5], vec![0.0; 50]).unwrap();
    assert!(matches!(
        postprocess(&bad, &identity_letterbox(), 0.25),
        Err(InferError::ShapeMismatch { .. })
    ));

    let flat = Tensor::new(vec![ROWS, 5], vec![0.0; ROWS * 5]).unwrap();
    assert!(matches!(
        postprocess(&flat, &identity_letterbox(), 0.25),
        Err(InferError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_postprocess_empty_output() {
    let empty = Tensor::new(vec![1, ROWS, 0], Vec::new()).unwrap();
    let people = postprocess(&empty, &identity_letterbox(), 0.25).unwrap();
    assert!(people.is_empty());
}

#[test]
fn test_postprocess_filters_low_confidence() {
    let mut column = [0.0_f32; ROWS];
    column[4] = 0.1; // below threshold
    let output = output_from_columns(&[column]);

    let people = postprocess(&output, &identity_letterbox(), 0.25).unwrap();
    assert!(people.is_empty());
}

#[test]
fn test_postprocess_extracts_and_rescales_keypoints() {
    let mut column = [0.0_f32; ROWS];
    column[4] = 0.9;
    // Left hip is keypoint 11: rows 5 + 11*3 .. +2
    let hip_row = 5 + Landmark::LeftHip.index() * 3;
    column[hip_row] = 340.0; // x in model space
    column[hip_row + 1] = 280.0; // y in model space
    column[hip_row + 2] = 0.8; // visibility

    let letterbox = Letterbox {
        scale: 0.5,
        pad_x: 20.0,
        pad_y: 40.0,
    };
    let output = output_from_columns(&[column]);

    let people = postprocess(&output, &letterbox, 0.25).unwrap();
    assert_eq!(people.len(), 1);

    let hip = people[0].keypoint(Landmark::LeftHip);
    assert!((hip.position.x - 640.0).abs() < 1e-3);
    assert!((hip.position.y - 480.0).abs() < 1e-3);
    assert!((hip.confidence - 0.8).abs() < 1e-6);
}

#[test]
fn test_postprocess_sorts_by_score_descending() {
    let mut weak = [0.0_f32; ROWS];
    weak[4] = 0.4;
    let mut strong = [0.0_f32; ROWS];
    strong[4] = 0.9;

    let output = output_from_columns(&[weak, strong]);
    let people = postprocess(&output, &identity_letterbox(), 0.25).unwrap();

    assert_eq!(people.len(), 2);
    assert!(people[0].score > people[1].score);
}

#[test]
fn test_landmark_indices_match_coco_order() {
    assert_eq!(Landmark::Nose.index(), 0);
    assert_eq!(Landmark::LeftShoulder.index(), 5);
    assert_eq!(Landmark::LeftHip.index(), 11);
    assert_eq!(Landmark::LeftKnee.index(), 13);
    assert_eq!(Landmark::RightAnkle.index(), pose::LANDMARK_COUNT - 1);
}
