//! Per-Sample L2 Normalization

/// Euclidean norm of a row
pub fn l2_norm(values: &[f64]) -> f64 {
    values.iter().map(|v| v * v).sum::<f64>().sqrt()
}

/// Scale a row to unit Euclidean norm in place.
///
/// A row whose norm is exactly zero is left untouched, so an all-zero
/// light-curve stays all zeros instead of turning into NaN.
pub fn l2_normalize(values: &mut [f64]) {
    let norm = l2_norm(values);
    if norm == 0.0 {
        return;
    }
    for v in values.iter_mut() {
        *v /= norm;
    }
}
