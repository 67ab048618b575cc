use crate::Device;
use std::fmt;

#[derive(Debug)]
pub enum InferError {
    ModelLoad(String),
    Backend(String),
    ShapeMismatch { expected: String, got: String },
    UnsupportedDevice(Device),
    UnsupportedDtype(String),
}

impl fmt::Display for InferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferError::ModelLoad(msg) => write!(f, "model load error: {msg}"),
            InferError::Backend(msg) => write!(f, "backend error: {msg}"),
            InferError::ShapeMismatch { expected, got } => {
                write!(f, "shape mismatch: expected {expected}, got {got}")
            }
            InferError::UnsupportedDevice(device) => {
                write!(f, "unsupported device: {device}")
            }
            InferError::UnsupportedDtype(msg) => write!(f, "unsupported dtype: {msg}"),
        }
    }
}

impl std::error::Error for InferError {}
