//! FFT Magnitude Spectrum

use rustfft::{num_complex::Complex, FftPlanner};

/// Computes DFT magnitude spectra, reusing FFT plans across rows
pub struct SpectrumAnalyzer {
    /// FFT planner for efficient computation
    planner: FftPlanner<f64>,
}

impl SpectrumAnalyzer {
    /// Create a new spectrum analyzer
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
        }
    }

    /// Magnitude of the full (unnormalized) forward DFT of a real signal.
    ///
    /// The output has the same length as the input; every entry is >= 0.
    pub fn magnitude_spectrum(&mut self, signal: &[f64]) -> Vec<f64> {
        if signal.is_empty() {
            return Vec::new();
        }

        let mut buffer: Vec<Complex<f64>> = signal
            .iter()
            .map(|&v| Complex::new(v, 0.0))
            .collect();

        let fft = self.planner.plan_fft_forward(signal.len());
        fft.process(&mut buffer);

        buffer.iter().map(|c| c.norm()).collect()
    }
}

impl Default for SpectrumAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
