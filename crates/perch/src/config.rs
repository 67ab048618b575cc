use crate::error::AppError;
use perch_posture::DEFAULT_THRESHOLD_DEGREES;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Driver configuration, loaded from a toml file.
///
/// Missing fields fall back to the defaults below, so a partial config
/// file only has to name what it changes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub camera_device: String,
    pub camera_width: u32,
    pub camera_height: u32,
    pub camera_fps: u32,
    pub model_path: String,
    /// Hip-angle threshold in degrees; above it is good posture.
    pub threshold_degrees: f32,
    /// Person-detection score below which a frame counts as "nobody".
    pub detection_confidence: f32,
    /// Per-landmark visibility below which the frame is skipped.
    pub min_landmark_confidence: f32,
    /// Show a live window; false runs headless and only logs.
    pub display: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            camera_device: "/dev/video0".to_string(),
            camera_width: 640,
            camera_height: 480,
            camera_fps: 30,
            model_path: "models/yolov8n-pose.onnx".to_string(),
            threshold_degrees: DEFAULT_THRESHOLD_DEGREES,
            detection_confidence: 0.25,
            min_landmark_confidence: 0.3,
            display: true,
        }
    }
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| AppError::Config(format!("{}: {e}", path.as_ref().display())))?;
        toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.as_ref().display())))
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, AppError> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            log::info!(
                "no config at {}, using defaults",
                path.as_ref().display()
            );
            Ok(Self::default())
        }
    }
}
