//! Summary statistics for a single metric series.

use serde::Serialize;

/// Count, mean, extrema and sample standard deviation of a series
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct SummaryStats {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Sample standard deviation (divisor `count - 1`), 0 for a single value
    pub std_dev: f64,
}

impl SummaryStats {
    /// Compute statistics for a series, `None` when it is empty
    pub fn from_values(data: &[f64]) -> Option<Self> {
        if data.is_empty() {
            return None;
        }

        let n = data.len();
        let mean = data.iter().sum::<f64>() / n as f64;

        let min = data.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        Some(SummaryStats {
            count: n,
            mean,
            min,
            max,
            std_dev: sample_std_dev(data, mean),
        })
    }
}

/// Bessel-corrected standard deviation around a precomputed mean
pub fn sample_std_dev(data: &[f64], mean: f64) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }
    // Two-pass for stability
    let variance = data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (data.len() - 1) as f64;
    variance.sqrt()
}
