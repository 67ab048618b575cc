use crate::PostureError;
use perch_base::Vec2;

/// Included angle at vertex `b`, in degrees.
///
/// Forms the vectors `ba = a - b` and `bc = c - b` and takes the inverse
/// cosine of their normalized dot product. `acos` already yields [0, 180],
/// so no range correction is applied. The cosine is clamped to [-1, 1]
/// first: for exactly collinear inputs floating rounding can push the
/// ratio a hair past 1 and `acos` would return NaN.
///
/// # Errors
///
/// `PostureError::DegenerateAngle` if `a == b` or `c == b` (zero-length
/// vector). The angle is undefined there and must never silently become
/// NaN or infinity.
pub fn joint_angle(a: Vec2<f32>, b: Vec2<f32>, c: Vec2<f32>) -> Result<f32, PostureError> {
    let ba = a - b;
    let bc = c - b;

    if ba.length_squared() == 0.0 || bc.length_squared() == 0.0 {
        return Err(PostureError::DegenerateAngle);
    }

    // Intermediate math in f64 so exact inputs (e.g. a perfect right angle)
    // round back to exact degrees in f32.
    let (bax, bay) = (ba.x as f64, ba.y as f64);
    let (bcx, bcy) = (bc.x as f64, bc.y as f64);

    let dot = bax * bcx + bay * bcy;
    let norms = (bax * bax + bay * bay).sqrt() * (bcx * bcx + bcy * bcy).sqrt();
    let cosine = (dot / norms).clamp(-1.0, 1.0);

    Ok(cosine.acos().to_degrees() as f32)
}
