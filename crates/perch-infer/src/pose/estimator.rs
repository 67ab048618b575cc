use crate::InferError;
use perch_base::Tensor;

use super::postprocess::postprocess;
use super::preprocess::preprocess;
use super::types::Person;

const DEFAULT_CONF_THRESHOLD: f32 = 0.25;

/// End-to-end pose estimation over a loaded model.
///
/// Owns the model session: construct it at startup, drop it on shutdown.
/// `detect` ties letterbox preprocessing, inference, and output decoding
/// into one call.
pub struct PoseEstimator {
    session: Box<dyn crate::Session>,
    conf_threshold: f32,
}

impl PoseEstimator {
    pub fn new(
        model: crate::ModelSource,
        backend: &dyn crate::Backend,
    ) -> Result<Self, InferError> {
        let session = backend.load_model(model)?;
        Ok(Self {
            session,
            conf_threshold: DEFAULT_CONF_THRESHOLD,
        })
    }

    /// Set the minimum person-detection score (builder pattern).
    pub fn with_conf_threshold(mut self, threshold: f32) -> Self {
        self.conf_threshold = threshold;
        self
    }

    pub fn conf_threshold(&self) -> f32 {
        self.conf_threshold
    }

    /// Detect people in an RGB frame (`Tensor<u8>`, HWC `[H, W, 3]`).
    ///
    /// Returns detections sorted by score descending; an empty vec means
    /// no person in this frame, which callers treat as a skip.
    pub fn detect(&mut self, frame: &Tensor<u8>) -> Result<Vec<Person>, InferError> {
        let (input, letterbox) = preprocess(frame)?;

        let input_name = self
            .session
            .input_names()
            .first()
            .ok_or_else(|| InferError::Backend("model has no inputs".to_string()))?
            .clone();

        let outputs = self.session.run(&input_name, input)?;
        let output = outputs
            .values()
            .next()
            .ok_or_else(|| InferError::Backend("model produced no outputs".to_string()))?;

        postprocess(output, &letterbox, self.conf_threshold)
    }
}
