//! Webcam capture for perch.
//!
//! A unified async `Camera` trait over backend implementations. Frames are
//! RGB `Tensor<u8>` in HWC layout; a frame that cannot be produced is a
//! recoverable skip for the caller, never a reason to abort the process.

pub mod config;
pub mod error;
pub mod traits;

#[cfg(feature = "v4l2")]
pub mod v4l2;

pub use config::CameraConfig;
pub use error::CameraError;
pub use traits::Camera;

#[cfg(feature = "v4l2")]
pub use v4l2::V4l2Camera;
