use perch_base::Vec2;
use perch_posture::{PostureError, TorsoSample, joint_angle};

fn v(x: f32, y: f32) -> Vec2<f32> {
    Vec2::new(x, y)
}

#[test]
fn test_right_angle() {
    let angle = joint_angle(v(1.0, 0.0), v(0.0, 0.0), v(0.0, 1.0)).unwrap();
    assert!((angle - 90.0).abs() < 1e-6, "got {angle}");
}

#[test]
fn test_collinear_opposite_is_straight() {
    let angle = joint_angle(v(-1.0, 0.0), v(0.0, 0.0), v(1.0, 0.0)).unwrap();
    assert!((angle - 180.0).abs() < 1e-4, "got {angle}");
}

#[test]
fn test_coincident_endpoints_is_zero() {
    // a and c coincide but both are distinct from the vertex.
    let angle = joint_angle(v(1.0, 0.0), v(0.0, 0.0), v(1.0, 0.0)).unwrap();
    assert!(angle.abs() < 1e-4, "got {angle}");
}

#[test]
fn test_symmetric_in_endpoints() {
    let a = v(0.3, 0.1);
    let b = v(0.5, 0.5);
    let c = v(0.6, 0.9);
    let forward = joint_angle(a, b, c).unwrap();
    let reversed = joint_angle(c, b, a).unwrap();
    assert_eq!(forward, reversed);
}

#[test]
fn test_vertex_equal_to_endpoint_is_degenerate() {
    let a = v(0.4, 0.4);
    assert_eq!(
        joint_angle(a, a, v(0.9, 0.9)),
        Err(PostureError::DegenerateAngle)
    );
    assert_eq!(
        joint_angle(v(0.1, 0.2), a, a),
        Err(PostureError::DegenerateAngle)
    );
}

#[test]
fn test_all_points_coincident_is_degenerate() {
    let p = v(0.5, 0.5);
    assert_eq!(joint_angle(p, p, p), Err(PostureError::DegenerateAngle));
}

#[test]
fn test_forty_five_degrees() {
    let angle = joint_angle(v(1.0, 0.0), v(0.0, 0.0), v(1.0, 1.0)).unwrap();
    assert!((angle - 45.0).abs() < 1e-4, "got {angle}");
}

#[test]
fn test_result_is_finite_and_in_range_over_grid() {
    // Property: every non-degenerate triple over a coordinate grid yields
    // a finite angle in [0, 180]. Exercises near-collinear triples where a
    // naive acos would produce NaN from rounding.
    let coords = [0.0_f32, 0.1, 0.25, 0.5, 0.75, 0.9, 1.0];
    for &ax in &coords {
        for &ay in &coords {
            for &cx in &coords {
                for &cy in &coords {
                    let a = v(ax, ay);
                    let b = v(0.5, 0.5);
                    let c = v(cx, cy);
                    match joint_angle(a, b, c) {
                        Ok(angle) => {
                            assert!(angle.is_finite());
                            assert!((0.0..=180.0).contains(&angle), "got {angle}");
                        }
                        Err(PostureError::DegenerateAngle) => {
                            assert!(a == b || c == b);
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn test_scale_invariance() {
    // Normalizing pixel coordinates to [0,1] must not change the angle
    // when both axes scale together.
    let raw = joint_angle(v(320.0, 120.0), v(320.0, 240.0), v(400.0, 360.0)).unwrap();
    let scaled = joint_angle(v(0.5, 0.1875), v(0.5, 0.375), v(0.625, 0.5625)).unwrap();
    assert!((raw - scaled).abs() < 1e-3, "raw {raw} vs scaled {scaled}");
}

#[test]
fn test_torso_sample_hip_angle() {
    let sample = TorsoSample::new(v(0.5, 0.2), v(0.5, 0.5), v(0.8, 0.5));
    let angle = sample.hip_angle().unwrap();
    assert!((angle - 90.0).abs() < 1e-4, "got {angle}");
}

#[test]
fn test_torso_sample_degenerate_hip() {
    let hip = v(0.5, 0.5);
    let sample = TorsoSample::new(hip, hip, v(0.8, 0.5));
    assert_eq!(sample.hip_angle(), Err(PostureError::DegenerateAngle));
}
