//! Local category inference via ONNX Runtime.
//!
//! Loads a classifier exported to ONNX that takes a `[1, 3]` tensor of
//! dimensions and returns one probability per [`ElementCategory`](crate::ElementCategory).

use std::fmt::Debug;
use std::path::{Path, PathBuf};

use ort::session::Session;
use ort::session::builder::GraphOptimizationLevel;
use ort::tensor::PrimitiveTensorElementType;
use ort::value::TensorRef;
use tracing::{debug, info};

use crate::classify::InferenceEngine;
use crate::config::{InputElementType, ModelConfig};
use crate::device::Device;
use crate::error::{MassclassError, Result};
use crate::types::{ProbabilityVector, QuantizedFeatures};

/// Output name preferred when a model exposes several outputs.
const PROBABILITIES_OUTPUT: &str = "probabilities";

/// Information about a loaded category model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryModelInfo {
    /// Model name (file stem).
    pub name: String,
    /// Path the model was loaded from.
    pub path: PathBuf,
    /// Input tensor fed with the dimensions.
    pub input_name: String,
    /// Output tensor read as probabilities.
    pub output_name: String,
    /// Element type of the input tensor.
    pub input_type: InputElementType,
}

/// Category classifier backed by an ONNX Runtime session.
pub struct OnnxCategoryModel {
    session: Session,
    model_info: CategoryModelInfo,
    device: Device,
}

impl OnnxCategoryModel {
    /// Load the model described by `config`.
    pub fn load(config: &ModelConfig) -> Result<Self> {
        let path = config.require_path()?;
        if !path.is_file() {
            return Err(MassclassError::Configuration(format!(
                "model file not found: {path:?}"
            )));
        }
        let device = config.device()?;
        let session = build_session(path, &device)?;

        let inputs: Vec<&str> = session.inputs.iter().map(|i| i.name.as_str()).collect();
        let outputs: Vec<&str> = session.outputs.iter().map(|o| o.name.as_str()).collect();
        let input_name = select_input(&inputs, config.input_name.as_deref())?;
        let output_name = select_output(&outputs, config.output_name.as_deref())?;

        let model_info = CategoryModelInfo {
            name: model_name(path),
            path: path.to_path_buf(),
            input_name,
            output_name,
            input_type: config.input_type,
        };
        info!(
            model = %model_info.name,
            input = %model_info.input_name,
            output = %model_info.output_name,
            device = device.name(),
            "category model loaded"
        );

        Ok(Self {
            session,
            model_info,
            device,
        })
    }

    /// Load a model file with default settings.
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
        Self::load(&ModelConfig::from_path(path))
    }

    /// Get model information.
    pub fn model_info(&self) -> &CategoryModelInfo {
        &self.model_info
    }

    /// Device the session runs on.
    pub fn device(&self) -> Device {
        self.device
    }

    /// Run the session on a `[1, 3]` input and flatten the probability output.
    fn run<T>(&mut self, data: &[T]) -> Result<Vec<f32>>
    where
        T: PrimitiveTensorElementType + Debug + 'static,
    {
        let shape = [1_usize, data.len()];
        let input = TensorRef::from_array_view((shape, data)).map_err(|e| {
            MassclassError::Inference(format!("Failed to create input tensor: {}", e))
        })?;

        let outputs = self
            .session
            .run(ort::inputs![self.model_info.input_name.as_str() => input])
            .map_err(|e| MassclassError::Inference(format!("ONNX inference failed: {}", e)))?;

        let output = outputs
            .get(self.model_info.output_name.as_str())
            .ok_or_else(|| {
                MassclassError::Inference(format!(
                    "No output named {} found",
                    self.model_info.output_name
                ))
            })?;

        // try_extract_tensor returns (&Shape, &[T]); batch size is 1 so flatten
        let (_, probabilities) = output.try_extract_tensor::<f32>().map_err(|e| {
            MassclassError::Inference(format!("Failed to extract probabilities: {}", e))
        })?;

        Ok(probabilities.to_vec())
    }
}

impl InferenceEngine for OnnxCategoryModel {
    fn name(&self) -> &str {
        &self.model_info.name
    }

    fn infer(&mut self, features: &QuantizedFeatures) -> Result<ProbabilityVector> {
        let values = features.as_array();
        let probabilities = match self.model_info.input_type {
            InputElementType::Int32 => self.run(&values)?,
            InputElementType::Int64 => self.run(&values.map(i64::from))?,
            InputElementType::Float32 => self.run(&values.map(|v| v as f32))?,
        };
        debug!(?probabilities, "model output");
        Ok(ProbabilityVector::new(probabilities))
    }
}

/// Pick the input fed with the dimensions.
fn select_input(inputs: &[&str], configured: Option<&str>) -> Result<String> {
    match (configured, inputs) {
        (Some(name), _) if inputs.contains(&name) => Ok(name.to_string()),
        (Some(name), _) => Err(MassclassError::Configuration(format!(
            "model has no input named {name}; inputs: {inputs:?}"
        ))),
        (None, [single]) => Ok(single.to_string()),
        (None, _) => Err(MassclassError::Configuration(format!(
            "model must have exactly one input or input_name must be set; inputs: {inputs:?}"
        ))),
    }
}

/// Pick the output read as probabilities.
///
/// Classifier exports often emit a label tensor next to the probabilities,
/// so `probabilities` is preferred over an ambiguous list.
fn select_output(outputs: &[&str], configured: Option<&str>) -> Result<String> {
    match (configured, outputs) {
        (Some(name), _) if outputs.contains(&name) => Ok(name.to_string()),
        (Some(name), _) => Err(MassclassError::Configuration(format!(
            "model has no output named {name}; outputs: {outputs:?}"
        ))),
        (None, _) if outputs.contains(&PROBABILITIES_OUTPUT) => {
            Ok(PROBABILITIES_OUTPUT.to_string())
        }
        (None, [single]) => Ok(single.to_string()),
        (None, _) => Err(MassclassError::Configuration(format!(
            "cannot tell which output holds probabilities; set output_name. outputs: {outputs:?}"
        ))),
    }
}

fn model_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("model")
        .to_string()
}

/// Build an ONNX session with the appropriate execution provider.
fn build_session(model_path: &Path, device: &Device) -> Result<Session> {
    let builder = Session::builder()
        .map_err(|e| {
            MassclassError::Configuration(format!("Failed to create session builder: {}", e))
        })?
        .with_optimization_level(GraphOptimizationLevel::Level3)
        .map_err(|e| {
            MassclassError::Configuration(format!("Failed to set optimization level: {}", e))
        })?;

    // Configure execution provider based on device
    let builder = match device {
        Device::Cpu => builder,
        #[cfg(feature = "cuda")]
        Device::Cuda { device_id } => {
            use ort::execution_providers::CUDAExecutionProvider;
            builder
                .with_execution_providers([CUDAExecutionProvider::default()
                    .with_device_id(*device_id as i32)
                    .build()])
                .map_err(|e| {
                    MassclassError::Configuration(format!("Failed to configure CUDA: {}", e))
                })?
        }
    };

    builder
        .commit_from_file(model_path)
        .map_err(|e| MassclassError::Configuration(format!("Failed to load ONNX model: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_input_is_selected() {
        assert_eq!(select_input(&["float_input"], None).unwrap(), "float_input");
    }

    #[test]
    fn ambiguous_inputs_need_a_name() {
        assert!(select_input(&["a", "b"], None).is_err());
        assert_eq!(select_input(&["a", "b"], Some("b")).unwrap(), "b");
        assert!(select_input(&["a"], Some("c")).is_err());
    }

    #[test]
    fn probabilities_output_preferred() {
        let outputs = ["output_label", "probabilities"];
        assert_eq!(select_output(&outputs, None).unwrap(), "probabilities");
        assert_eq!(
            select_output(&outputs, Some("output_label")).unwrap(),
            "output_label"
        );
    }

    #[test]
    fn single_output_is_selected() {
        assert_eq!(select_output(&["dense_1"], None).unwrap(), "dense_1");
        assert!(select_output(&["label", "scores"], None).is_err());
    }

    #[test]
    fn model_name_from_stem() {
        assert_eq!(model_name(Path::new("/opt/models/massclass.onnx")), "massclass");
    }

    #[test]
    fn missing_model_file_is_configuration_error() {
        let result = OnnxCategoryModel::from_file("/nonexistent/model.onnx");
        assert!(matches!(result, Err(MassclassError::Configuration(_))));
    }
}
