//! Numeric helpers behind the scatter trend line and the distribution chart.
//!
//! Non-finite values (gaps in the data) are skipped by every function here.

use statrs::distribution::{Continuous, Normal};

use crate::error::{ChartError, ChartResult};

fn finite(values: &[f64]) -> Vec<f64> {
    values.iter().copied().filter(|v| v.is_finite()).collect()
}

/// Sample standard deviation (`n - 1` denominator). NaN for fewer than two values.
pub fn sample_std_dev(values: &[f64]) -> f64 {
    use statrs::statistics::Statistics;
    finite(values).std_dev()
}

/// Smallest and largest finite value.
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Round to `decimals` places, ties to the nearest even digit.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

/// `n` evenly spaced points starting at `start`, stepping `(end - start) / n`.
///
/// The end point itself is not included.
pub fn grid(start: f64, end: f64, n: usize) -> Vec<f64> {
    let step = (end - start) / n as f64;
    (0..n).map(|i| start + i as f64 * step).collect()
}

/// Ordinary least squares fit of `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OlsFit {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
}

impl OlsFit {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Pairs `(x, y)` where both coordinates are finite.
pub fn finite_pairs(x: &[f64], y: &[f64]) -> Vec<(f64, f64)> {
    x.iter()
        .zip(y)
        .map(|(&x, &y)| (x, y))
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect()
}

/// Fit over [`finite_pairs`].
pub fn ols(x: &[f64], y: &[f64]) -> ChartResult<OlsFit> {
    let pairs = finite_pairs(x, y);
    if pairs.len() < 2 {
        return Err(ChartError::InvalidData(
            "trend line needs at least two observations".to_string(),
        ));
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;
    let sxx: f64 = pairs.iter().map(|(x, _)| (x - mean_x).powi(2)).sum();
    let sxy: f64 = pairs.iter().map(|(x, y)| (x - mean_x) * (y - mean_y)).sum();
    if sxx == 0.0 {
        return Err(ChartError::InvalidData(
            "trend line needs at least two distinct x values".to_string(),
        ));
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;
    let ss_tot: f64 = pairs.iter().map(|(_, y)| (y - mean_y).powi(2)).sum();
    let ss_res: f64 = pairs
        .iter()
        .map(|(x, y)| (y - (slope * x + intercept)).powi(2))
        .sum();
    let r_squared = if ss_tot == 0.0 {
        1.0
    } else {
        1.0 - ss_res / ss_tot
    };

    Ok(OlsFit {
        slope,
        intercept,
        r_squared,
    })
}

/// Gaussian kernel density estimate of `samples`, evaluated at `points`.
///
/// Bandwidth follows Scott's rule: the sample standard deviation times
/// `n^(-1/5)`.
pub fn gaussian_kde(samples: &[f64], points: &[f64]) -> ChartResult<Vec<f64>> {
    let samples = finite(samples);
    let std = sample_std_dev(&samples);
    if !(std.is_finite() && std > 0.0) {
        return Err(ChartError::InvalidData(
            "density estimate needs at least two distinct observations".to_string(),
        ));
    }
    let n = samples.len() as f64;
    let bandwidth = std * n.powf(-0.2);
    let kernels = samples
        .iter()
        .map(|&mean| Normal::new(mean, bandwidth))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ChartError::InvalidData(e.to_string()))?;

    Ok(points
        .iter()
        .map(|&x| kernels.iter().map(|k| k.pdf(x)).sum::<f64>() / n)
        .collect())
}
