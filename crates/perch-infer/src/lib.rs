//! ONNX pose estimation for perch.
//!
//! A small backend/session abstraction over `ort`, plus the YOLO-pose
//! pre/post-processing pipeline that turns camera frames into per-person
//! COCO landmark sets.

pub mod backend;
pub mod backends;
pub mod device;
pub mod error;
pub mod modelsource;
pub mod pose;
pub mod session;

pub use backend::Backend;
pub use backends::OnnxBackend;
pub use device::Device;
pub use error::InferError;
pub use modelsource::ModelSource;
pub use pose::{
    Keypoint, LANDMARK_COUNT, Landmark, Letterbox, Person, PoseEstimator, postprocess, preprocess,
};
pub use session::Session;
