//! Exoplanet Predictor

use crate::engine::{Classifier, OnnxModel};
use crate::InferenceError;
use fallback::{FallbackConfig, HeuristicScorer};
use preprocessor::{validate, Preprocessor, RawBatch};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Scores strictly above this are classified as exoplanets
pub const DECISION_THRESHOLD: f64 = 0.5;

/// Model location used when none is configured
pub const DEFAULT_MODEL_PATH: &str = "exoplanet_model.onnx";

/// Classification of one light-curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    /// `confidence > 0.5`
    pub is_exoplanet: bool,
    /// Model score for this row
    pub confidence: f64,
}

impl PredictionResult {
    /// Build a result from a model score
    pub fn from_confidence(confidence: f64) -> Self {
        Self {
            is_exoplanet: confidence > DECISION_THRESHOLD,
            confidence,
        }
    }
}

/// Predictor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictorConfig {
    /// Path to the ONNX model
    pub model_path: String,
    /// Heuristic scoring when the model cannot be loaded
    #[serde(default)]
    pub fallback: FallbackConfig,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            model_path: DEFAULT_MODEL_PATH.to_string(),
            fallback: FallbackConfig::default(),
        }
    }
}

/// Loads the model fresh for each request and classifies every row
pub struct Predictor {
    config: PredictorConfig,
}

impl Predictor {
    /// Create a new predictor
    pub fn new(config: PredictorConfig) -> Self {
        info!("Creating predictor with model: {}", config.model_path);
        Self { config }
    }

    /// Classify a single light-curve or a batch of them.
    ///
    /// Results are index-aligned with the input rows. Every failure comes
    /// back as an `Err`; nothing here panics on bad input or a bad model.
    pub fn predict(&self, raw: impl Into<RawBatch>) -> Result<Vec<PredictionResult>, InferenceError> {
        let start = std::time::Instant::now();
        let batch = raw.into();

        let results = match OnnxModel::load(&self.config.model_path) {
            Ok(model) => classify_batch(&model, &batch)?,
            Err(e) if self.config.fallback.enabled => {
                warn!("{}; scoring {} sample(s) with heuristic fallback", e, batch.len());
                heuristic_batch(&batch)?
            }
            Err(e) => return Err(e),
        };

        info!(
            "Classified {} sample(s) in {}ms",
            results.len(),
            start.elapsed().as_millis()
        );
        Ok(results)
    }

    /// Get config
    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }
}

/// Preprocess a batch and score it with `classifier`
pub fn classify_batch(
    classifier: &dyn Classifier,
    batch: &RawBatch,
) -> Result<Vec<PredictionResult>, InferenceError> {
    let input = Preprocessor::new().process(batch)?;
    let scores = classifier.classify(&input)?;

    if scores.len() != batch.len() {
        return Err(InferenceError::InvalidOutputShape {
            expected: batch.len(),
            actual: scores.len(),
        });
    }

    debug!("Scores: {:?}", scores);
    Ok(scores.into_iter().map(PredictionResult::from_confidence).collect())
}

/// Score raw rows with the rule-based fallback
fn heuristic_batch(batch: &RawBatch) -> Result<Vec<PredictionResult>, InferenceError> {
    validate(batch)?;
    let scorer = HeuristicScorer::new();
    Ok(batch
        .rows()
        .iter()
        .map(|row| PredictionResult::from_confidence(scorer.confidence(row)))
        .collect())
}

/// Load the model at `model_path` and classify `raw`
pub fn predict_from_path(
    model_path: &str,
    raw: impl Into<RawBatch>,
) -> Result<Vec<PredictionResult>, InferenceError> {
    Predictor::new(PredictorConfig {
        model_path: model_path.to_string(),
        ..Default::default()
    })
    .predict(raw)
}
