use crate::{Backend, Device, InferError, ModelSource, Session};
use ndarray::ArrayD;
use ort::{inputs, session::Session as OrtSession, value::TensorRef};
use perch_base::Tensor;
use std::collections::HashMap;

/// ONNX Runtime backend.
pub struct OnnxBackend {
    device: Device,
}

impl OnnxBackend {
    pub fn new(device: Device) -> Self {
        Self { device }
    }
}

impl Backend for OnnxBackend {
    fn name(&self) -> &str {
        "onnx"
    }

    fn load_model(&self, model: ModelSource) -> Result<Box<dyn Session>, InferError> {
        let mut builder = OrtSession::builder()
            .map_err(|e| InferError::Backend(format!("failed to create session builder: {e}")))?;

        builder = match &self.device {
            Device::Cpu => {
                log::info!("using CPU execution provider");
                builder
            }
            #[cfg(feature = "cuda")]
            Device::Cuda { device_id } => {
                use ort::ep::ExecutionProvider;
                use ort::execution_providers::CUDAExecutionProvider;
                let ep = CUDAExecutionProvider::default().with_device_id(*device_id);
                log::info!(
                    "CUDA execution provider requested (device_id={}), available: {}",
                    device_id,
                    ep.is_available().unwrap_or(false)
                );
                builder
                    .with_execution_providers([ep.build()])
                    .map_err(|_| InferError::UnsupportedDevice(self.device.clone()))?
            }
            #[cfg(not(feature = "cuda"))]
            Device::Cuda { .. } => {
                return Err(InferError::UnsupportedDevice(self.device.clone()));
            }
        };

        let session = match model {
            ModelSource::File(path) => builder.commit_from_file(path).map_err(|e| {
                InferError::ModelLoad(format!("failed to load model from file: {e}"))
            })?,
            ModelSource::Memory(bytes) => builder.commit_from_memory(&bytes).map_err(|e| {
                InferError::ModelLoad(format!("failed to load model from memory: {e}"))
            })?,
        };

        let input_names: Vec<String> = session
            .inputs()
            .iter()
            .map(|input| input.name().to_string())
            .collect();
        let output_names: Vec<String> = session
            .outputs()
            .iter()
            .map(|output| output.name().to_string())
            .collect();

        Ok(Box::new(OnnxSession {
            session,
            input_names,
            output_names,
        }))
    }
}

pub struct OnnxSession {
    session: OrtSession,
    input_names: Vec<String>,
    output_names: Vec<String>,
}

impl Session for OnnxSession {
    fn run(
        &mut self,
        input_name: &str,
        input: Tensor<f32>,
    ) -> Result<HashMap<String, Tensor<f32>>, InferError> {
        if !self.input_names.iter().any(|n| n == input_name) {
            return Err(InferError::Backend(format!(
                "unknown input '{input_name}', model inputs are {:?}",
                self.input_names
            )));
        }

        let array = tensor_to_ndarray(input)?;
        let tensor_ref = TensorRef::from_array_view(array.view())
            .map_err(|e| InferError::Backend(format!("failed to create tensor ref: {e}")))?;

        let outputs = self
            .session
            .run(inputs![input_name => tensor_ref])
            .map_err(|e| InferError::Backend(format!("inference failed: {e}")))?;

        let mut result = HashMap::new();
        for output_name in &self.output_names {
            let value = &outputs[output_name.as_str()];
            let array = value.try_extract_array::<f32>().map_err(|e| {
                InferError::UnsupportedDtype(format!("output '{output_name}' is not f32: {e}"))
            })?;
            result.insert(output_name.clone(), ndarray_to_tensor(array)?);
        }

        Ok(result)
    }

    fn input_names(&self) -> &[String] {
        &self.input_names
    }

    fn output_names(&self) -> &[String] {
        &self.output_names
    }
}

fn tensor_to_ndarray(tensor: Tensor<f32>) -> Result<ArrayD<f32>, InferError> {
    ArrayD::from_shape_vec(tensor.shape, tensor.data)
        .map_err(|e| InferError::Backend(format!("failed to create ndarray from tensor: {e}")))
}

fn ndarray_to_tensor(
    array: ndarray::ArrayView<'_, f32, ndarray::IxDyn>,
) -> Result<Tensor<f32>, InferError> {
    Tensor::new(array.shape().to_vec(), array.iter().copied().collect())
        .map_err(|e| InferError::Backend(format!("failed to create tensor: {e}")))
}
