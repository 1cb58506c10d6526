//! Light-Curve Preprocessor
//!
//! Turns raw light-curve measurements into the frequency-domain tensor the
//! classifier expects: L2 normalization, Gaussian smoothing, DFT magnitude
//! and a trailing channel axis.

mod error;
mod fft;
mod normalizer;
mod pipeline;
mod sample;
mod smoothing;
mod validator;

pub use error::ShapeError;
pub use fft::SpectrumAnalyzer;
pub use normalizer::{l2_norm, l2_normalize};
pub use pipeline::{preprocess, Preprocessor, ModelInput};
pub use sample::{RawBatch, RawInput};
pub use smoothing::{GaussianSmoother, SMOOTHING_SIGMA, TRUNCATE};
pub use validator::validate;
