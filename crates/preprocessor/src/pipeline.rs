//! Preprocessing Pipeline

use crate::error::ShapeError;
use crate::fft::SpectrumAnalyzer;
use crate::normalizer::l2_normalize;
use crate::sample::RawBatch;
use crate::smoothing::GaussianSmoother;
use crate::validator::validate;
use ndarray::{Array1, Array2, Array3, Axis};
use tracing::debug;

/// Model input tensor, shape `[batch, length, 1]`
pub type ModelInput = Array3<f64>;

/// Raw light-curves to spectral model input.
///
/// Stages run in a fixed order, each feeding the next:
/// validate, L2-normalize, Gaussian smooth, DFT magnitude, add channel axis.
pub struct Preprocessor {
    smoother: GaussianSmoother,
    analyzer: SpectrumAnalyzer,
}

impl Preprocessor {
    /// Create a preprocessor with the standard smoothing kernel
    pub fn new() -> Self {
        Self {
            smoother: GaussianSmoother::default(),
            analyzer: SpectrumAnalyzer::new(),
        }
    }

    /// Run the full pipeline over a batch
    pub fn process(&mut self, batch: &RawBatch) -> Result<ModelInput, ShapeError> {
        let length = validate(batch)?;
        debug!(
            "Preprocessing {} sample(s) of length {} (sigma={})",
            batch.len(),
            length,
            self.smoother.sigma()
        );

        let mut spectra = Array2::<f64>::zeros((batch.len(), length));
        for (mut out, raw) in spectra.rows_mut().into_iter().zip(batch.rows()) {
            let mut row = raw.clone();
            l2_normalize(&mut row);
            let smoothed = self.smoother.smooth(&row);
            let spectrum = self.analyzer.magnitude_spectrum(&smoothed);
            out.assign(&Array1::from(spectrum));
        }

        Ok(spectra.insert_axis(Axis(2)))
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Preprocess a single light-curve or a batch of them
pub fn preprocess(raw: impl Into<RawBatch>) -> Result<ModelInput, ShapeError> {
    Preprocessor::new().process(&raw.into())
}
