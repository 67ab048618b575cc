//! Shared foundation for the perch workspace.
//!
//! Provides the 2D vector and tensor types that flow between the camera,
//! the pose estimator, and the posture classifier, plus a stdout logger
//! for the `log` facade.

pub mod logging;
pub mod tensor;
pub mod vec2;

pub use logging::{StdoutLogger, init_stdout_logger};
pub use tensor::{Tensor, TensorError};
pub use vec2::Vec2;

// Re-export log so downstream crates share one facade version.
pub use log;
