use crate::InferError;
use perch_base::Tensor;

use super::types::Letterbox;

/// Model input side length. YOLO pose exports take square 640x640 input.
pub const MODEL_SIZE: usize = 640;

// Standard YOLO letterbox gray, normalized.
const PAD_VALUE: f32 = 114.0 / 255.0;

/// Prepare a camera frame for the pose model.
///
/// Input is an RGB frame as `Tensor<u8>` in HWC `[H, W, 3]` layout.
/// Output is `[1, 3, 640, 640]` NCHW with values in [0, 1]: the frame is
/// letterbox-resized (aspect preserved, gray padding, nearest-neighbor)
/// and transposed. Returns the letterbox transform so detections can be
/// mapped back to frame pixels.
pub fn preprocess(frame: &Tensor<u8>) -> Result<(Tensor<f32>, Letterbox), InferError> {
    if frame.ndim() != 3 || frame.shape[2] != 3 {
        return Err(InferError::ShapeMismatch {
            expected: "[H, W, 3]".to_string(),
            got: format!("{:?}", frame.shape),
        });
    }
    let (h, w) = (frame.shape[0], frame.shape[1]);
    if h == 0 || w == 0 {
        return Err(InferError::ShapeMismatch {
            expected: "non-empty frame".to_string(),
            got: format!("{:?}", frame.shape),
        });
    }

    let scale = (MODEL_SIZE as f32 / w as f32).min(MODEL_SIZE as f32 / h as f32);
    let scaled_w = (w as f32 * scale) as usize;
    let scaled_h = (h as f32 * scale) as usize;
    let pad_x = (MODEL_SIZE - scaled_w) / 2;
    let pad_y = (MODEL_SIZE - scaled_h) / 2;

    let mut data = vec![PAD_VALUE; 3 * MODEL_SIZE * MODEL_SIZE];

    for out_y in 0..scaled_h {
        // Nearest-neighbor source row
        let src_y = ((out_y as f32 / scale) as usize).min(h - 1);
        for out_x in 0..scaled_w {
            let src_x = ((out_x as f32 / scale) as usize).min(w - 1);
            let src = (src_y * w + src_x) * 3;
            let dst_y = out_y + pad_y;
            let dst_x = out_x + pad_x;
            for ch in 0..3 {
                let dst = ch * MODEL_SIZE * MODEL_SIZE + dst_y * MODEL_SIZE + dst_x;
                data[dst] = frame.data[src + ch] as f32 / 255.0;
            }
        }
    }

    let tensor = Tensor::new(vec![1, 3, MODEL_SIZE, MODEL_SIZE], data)
        .map_err(|e| InferError::Backend(format!("preprocess buffer error: {e}")))?;

    Ok((
        tensor,
        Letterbox {
            scale,
            pad_x: pad_x as f32,
            pad_y: pad_y as f32,
        },
    ))
}
