use crate::InferError;
use perch_base::Tensor;
use std::collections::HashMap;

/// A loaded model. Pose models take exactly one input tensor.
pub trait Session {
    fn run(
        &mut self,
        input_name: &str,
        input: Tensor<f32>,
    ) -> Result<HashMap<String, Tensor<f32>>, InferError>;
    fn input_names(&self) -> &[String];
    fn output_names(&self) -> &[String];
}
