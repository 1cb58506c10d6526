//! Shape Error Types

use thiserror::Error;

/// Errors raised when raw data cannot be turned into a model input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    /// No light-curves were supplied
    #[error("Input contains no samples")]
    EmptyBatch,

    /// A light-curve has no measurements
    #[error("Sample {row} is empty")]
    EmptyRow { row: usize },

    /// Light-curves of different lengths cannot share a spectral tensor
    #[error("Sample {row} has length {actual}, expected {expected} (all samples must have equal length)")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// NaN or infinite measurement
    #[error("Sample {row} contains a non-finite value at index {index}")]
    NonFinite { row: usize, index: usize },
}
