use std::fmt;

#[derive(Debug)]
pub enum CameraError {
    /// Device could not be opened or configured.
    Device(String),
    /// Streaming failed mid-capture.
    Stream(String),
    /// Frame data could not be decoded to RGB.
    Decode(String),
    /// The capture thread channel broke down.
    Channel(String),
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::Device(msg) => write!(f, "camera device error: {msg}"),
            CameraError::Stream(msg) => write!(f, "camera stream error: {msg}"),
            CameraError::Decode(msg) => write!(f, "frame decode error: {msg}"),
            CameraError::Channel(msg) => write!(f, "camera channel error: {msg}"),
        }
    }
}

impl std::error::Error for CameraError {}

impl From<std::io::Error> for CameraError {
    fn from(err: std::io::Error) -> Self {
        CameraError::Device(err.to_string())
    }
}

#[cfg(feature = "v4l2")]
impl From<image::ImageError> for CameraError {
    fn from(err: image::ImageError) -> Self {
        CameraError::Decode(err.to_string())
    }
}
