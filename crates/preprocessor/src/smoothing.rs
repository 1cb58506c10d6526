//! Gaussian Smoothing

/// Standard deviation of the smoothing kernel, in samples
pub const SMOOTHING_SIGMA: f64 = 7.0;

/// Kernel half-width in units of sigma
pub const TRUNCATE: f64 = 4.0;

/// 1-D Gaussian filter with reflect boundary handling.
///
/// The signal is extended past each edge by mirroring it about the edge
/// sample boundary (`d c b a | a b c d | d c b a`). Signals shorter than the
/// kernel radius keep mirroring periodically, so any length >= 1 works.
#[derive(Debug, Clone)]
pub struct GaussianSmoother {
    /// Normalized kernel weights, length 2 * radius + 1
    kernel: Vec<f64>,
    /// Taps on each side of the centre
    radius: usize,
    sigma: f64,
}

impl GaussianSmoother {
    /// Create a smoother for the given sigma
    pub fn new(sigma: f64) -> Self {
        let radius = (TRUNCATE * sigma + 0.5) as usize;
        let mut kernel: Vec<f64> = (0..=2 * radius)
            .map(|i| {
                let x = i as f64 - radius as f64;
                (-0.5 * (x / sigma).powi(2)).exp()
            })
            .collect();

        let total: f64 = kernel.iter().sum();
        for w in kernel.iter_mut() {
            *w /= total;
        }

        Self {
            kernel,
            radius,
            sigma,
        }
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn radius(&self) -> usize {
        self.radius
    }

    pub fn kernel(&self) -> &[f64] {
        &self.kernel
    }

    /// Smooth a signal, returning a new vector of the same length
    pub fn smooth(&self, signal: &[f64]) -> Vec<f64> {
        let n = signal.len();
        if n == 0 {
            return Vec::new();
        }

        let radius = self.radius as isize;
        (0..n as isize)
            .map(|i| {
                self.kernel
                    .iter()
                    .enumerate()
                    .map(|(k, w)| w * signal[reflect_index(i + k as isize - radius, n)])
                    .sum()
            })
            .collect()
    }
}

impl Default for GaussianSmoother {
    fn default() -> Self {
        Self::new(SMOOTHING_SIGMA)
    }
}

/// Map an out-of-range index back into `0..n` by half-sample reflection
fn reflect_index(i: isize, n: usize) -> usize {
    let period = 2 * n as isize;
    let m = i.rem_euclid(period) as usize;
    if m < n {
        m
    } else {
        2 * n - 1 - m
    }
}
