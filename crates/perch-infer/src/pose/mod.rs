mod estimator;
mod postprocess;
mod preprocess;
mod types;

pub use estimator::PoseEstimator;
pub use postprocess::postprocess;
pub use preprocess::preprocess;
pub use types::{Keypoint, LANDMARK_COUNT, Landmark, Letterbox, Person};
