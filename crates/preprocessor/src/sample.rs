//! Raw light-curve input

use serde::{Deserialize, Serialize};

/// Request payload as it arrives: one light-curve or a batch of them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawInput {
    /// Single flat light-curve, promoted to a batch of one
    Single(Vec<f64>),
    /// Ordered batch of light-curves
    Batch(Vec<Vec<f64>>),
}

/// Ordered rows of raw measurements, one row per light-curve
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawBatch {
    rows: Vec<Vec<f64>>,
}

impl RawBatch {
    /// Create a batch from rows
    pub fn new(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    /// Rows in input order
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Number of light-curves
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Length of the first row, if any
    pub fn row_len(&self) -> Option<usize> {
        self.rows.first().map(Vec::len)
    }
}

impl From<RawInput> for RawBatch {
    fn from(input: RawInput) -> Self {
        match input {
            RawInput::Single(row) => Self::new(vec![row]),
            RawInput::Batch(rows) => Self::new(rows),
        }
    }
}

impl From<Vec<Vec<f64>>> for RawBatch {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        Self::new(rows)
    }
}

impl From<Vec<f64>> for RawBatch {
    fn from(row: Vec<f64>) -> Self {
        Self::new(vec![row])
    }
}
