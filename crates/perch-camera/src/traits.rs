use crate::CameraError;
use perch_base::Tensor;

/// Async camera returning decoded RGB frames.
///
/// Frames are `Tensor<u8>` with shape `[height, width, 3]`.
#[allow(async_fn_in_trait)]
pub trait Camera {
    /// Receive the next frame from the camera.
    async fn recv(&mut self) -> Result<Tensor<u8>, CameraError>;
}
