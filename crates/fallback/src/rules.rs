//! Transit heuristics

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Fallback configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FallbackConfig {
    /// Score rows heuristically when the model cannot be loaded
    #[serde(default)]
    pub enabled: bool,
}

/// Summary statistics of a raw light-curve
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LightCurveStats {
    pub mean: f64,
    /// Population variance
    pub variance: f64,
    pub std_dev: f64,
    /// max - min
    pub range: f64,
    /// Local minima sitting more than half a sigma below the mean
    pub dips: usize,
    /// Points below `mean - std_dev`
    pub low_points: usize,
    pub len: usize,
}

impl LightCurveStats {
    /// Compute statistics over a light-curve
    pub fn compute(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let std_dev = variance.sqrt();

        let min = values.iter().cloned().fold(f64::MAX, f64::min);
        let max = values.iter().cloned().fold(f64::MIN, f64::max);

        let dips = values
            .windows(3)
            .filter(|w| w[1] < w[0] && w[1] < w[2] && (mean - w[1]) > std_dev * 0.5)
            .count();

        let low_points = values.iter().filter(|&&v| v < mean - std_dev).count();

        Self {
            mean,
            variance,
            std_dev,
            range: max - min,
            dips,
            low_points,
            len: values.len(),
        }
    }
}

/// Deterministic rule-based transit scorer.
///
/// Each rule that fires adds a fixed weight; the sum is clamped to [0, 1].
#[derive(Debug, Clone, Default)]
pub struct HeuristicScorer;

impl HeuristicScorer {
    pub fn new() -> Self {
        Self
    }

    /// Confidence that a light-curve shows a transit
    pub fn confidence(&self, values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }

        let stats = LightCurveStats::compute(values);
        let mut score = 0.0;

        if stats.std_dev > 0.01 {
            score += 0.2;
        }
        if stats.range > 0.05 {
            score += 0.2;
        }
        if stats.dips >= 3 {
            score += 0.3;
        }
        if stats.variance > 0.001 {
            score += 0.15;
        }
        if stats.low_points as f64 > stats.len as f64 * 0.05 {
            score += 0.15;
        }

        debug!(
            "Heuristic score {:.3} (std={:.4}, range={:.4}, dips={})",
            score, stats.std_dev, stats.range, stats.dips
        );

        f64::clamp(score, 0.0, 1.0)
    }
}
