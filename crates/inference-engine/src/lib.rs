//! ONNX Inference Engine
//!
//! Loads the trained light-curve classifier with tract-onnx and turns its
//! per-row scores into exoplanet predictions.

mod engine;
mod predictor;

pub use engine::{Classifier, OnnxModel};
pub use predictor::{
    classify_batch, predict_from_path, PredictionResult, Predictor, PredictorConfig,
    DECISION_THRESHOLD, DEFAULT_MODEL_PATH,
};

use preprocessor::ShapeError;
use thiserror::Error;

/// Errors during inference
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Model load failed: {0}")]
    ModelLoadError(String),
    #[error("Inference failed: {0}")]
    InferenceFailed(String),
    #[error("Invalid model output: expected {expected} scores, got {actual}")]
    InvalidOutputShape { expected: usize, actual: usize },
    #[error(transparent)]
    Shape(#[from] ShapeError),
}
