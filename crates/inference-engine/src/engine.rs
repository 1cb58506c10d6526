//! Inference Engine Implementation

use crate::InferenceError;
use preprocessor::ModelInput;
use std::fs::File;
use std::io::BufReader;
use tracing::{debug, error, info};
use tract_onnx::pb;
use tract_onnx::prelude::*;

/// A trained model mapping `[batch, length, 1]` spectra to one score per row
pub trait Classifier {
    /// Score every row of the input, in row order
    fn classify(&self, input: &ModelInput) -> Result<Vec<f64>, InferenceError>;
}

/// ONNX classifier executed with tract
pub struct OnnxModel {
    /// Model path
    model_path: String,
    /// Parsed graph, specialized to the request shape at run time
    model: InferenceModel,
}

impl OnnxModel {
    /// Load and parse an ONNX model from disk
    pub fn load(model_path: &str) -> Result<Self, InferenceError> {
        info!("Loading model from {}", model_path);

        let file = File::open(model_path).map_err(|e| {
            error!("Failed to open model {}: {}", model_path, e);
            InferenceError::ModelLoadError(format!("{}: {}", model_path, e))
        })?;

        let onnx = tract_onnx::onnx();
        let load_error = |e: TractError| {
            error!("Failed to parse model {}: {:#}", model_path, e);
            InferenceError::ModelLoadError(format!("{}: {:#}", model_path, e))
        };

        let proto = onnx
            .proto_model_for_read(&mut BufReader::new(file))
            .map_err(load_error)?;
        check_graph_inputs(&proto).map_err(load_error)?;
        let model = onnx.model_for_proto_model(&proto).map_err(load_error)?;

        info!("Model loaded successfully");
        Ok(Self {
            model_path: model_path.to_string(),
            model,
        })
    }

    /// Get model path
    pub fn model_path(&self) -> &str {
        &self.model_path
    }
}

/// Every graph input that is not fed by an initializer must declare a tensor
/// type; tract-onnx does not report a missing one as an error.
fn check_graph_inputs(proto: &pb::ModelProto) -> TractResult<()> {
    let graph = proto
        .graph
        .as_ref()
        .ok_or_else(|| TractError::msg("model does not contain a graph"))?;

    for input in &graph.input {
        let initialized = graph.initializer.iter().any(|t| t.name == input.name);
        let typed = input.r#type.as_ref().and_then(|t| t.value.as_ref()).is_some();
        if !initialized && !typed {
            return Err(TractError::msg(format!(
                "graph input {:?} has no tensor type",
                input.name
            )));
        }
    }
    Ok(())
}

impl Classifier for OnnxModel {
    fn classify(&self, input: &ModelInput) -> Result<Vec<f64>, InferenceError> {
        let (batch, length, channels) = input.dim();
        let shape = [batch, length, channels];

        let plan = self
            .model
            .clone()
            .with_input_fact(0, f32::fact(shape).into())
            .and_then(|m| m.into_optimized())
            .and_then(|m| m.into_runnable())
            .map_err(|e| InferenceError::InferenceFailed(format!("{:#}", e)))?;

        let data: Vec<f32> = input.iter().map(|&v| v as f32).collect();
        let tensor = Tensor::from_shape(&shape, &data)
            .map_err(|e| InferenceError::InferenceFailed(format!("{:#}", e)))?;

        let outputs = plan
            .run(tvec!(tensor.into()))
            .map_err(|e| InferenceError::InferenceFailed(format!("{:#}", e)))?;

        let output = outputs
            .first()
            .ok_or_else(|| InferenceError::InferenceFailed("model produced no outputs".to_string()))?;
        let scores = output
            .to_array_view::<f32>()
            .map_err(|e| InferenceError::InferenceFailed(format!("{:#}", e)))?;

        debug!("Model output shape {:?}", scores.shape());
        Ok(scores.iter().map(|&v| v as f64).collect())
    }
}
