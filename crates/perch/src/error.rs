use perch_camera::CameraError;
use perch_infer::InferError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(String),
    Camera(CameraError),
    Infer(InferError),
    Display(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "config error: {msg}"),
            AppError::Camera(err) => write!(f, "camera error: {err}"),
            AppError::Infer(err) => write!(f, "inference error: {err}"),
            AppError::Display(msg) => write!(f, "display error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<CameraError> for AppError {
    fn from(err: CameraError) -> Self {
        AppError::Camera(err)
    }
}

impl From<InferError> for AppError {
    fn from(err: InferError) -> Self {
        AppError::Infer(err)
    }
}

impl From<minifb::Error> for AppError {
    fn from(err: minifb::Error) -> Self {
        AppError::Display(err.to_string())
    }
}
