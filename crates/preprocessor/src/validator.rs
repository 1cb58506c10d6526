//! Batch Shape Validation

use crate::error::ShapeError;
use crate::sample::RawBatch;

/// Check that a batch can be turned into a rectangular spectral tensor.
///
/// Returns the common row length on success.
pub fn validate(batch: &RawBatch) -> Result<usize, ShapeError> {
    let expected = batch.row_len().ok_or(ShapeError::EmptyBatch)?;

    for (row, values) in batch.rows().iter().enumerate() {
        if values.is_empty() {
            return Err(ShapeError::EmptyRow { row });
        }
        if values.len() != expected {
            return Err(ShapeError::RaggedRows {
                row,
                expected,
                actual: values.len(),
            });
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(ShapeError::NonFinite { row, index });
        }
    }

    Ok(expected)
}
