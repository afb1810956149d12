//! Sample statistics over per-trial thresholds.
//!
//! - mean: arithmetic mean, NaN for an empty sample
//! - stddev: sample standard deviation (n − 1 denominator), NaN below two values
//! - confidence interval: mean ± 1.96 · stddev / √n

/// z-score for a two-sided 95% normal confidence interval.
pub const CONFIDENCE_95: f64 = 1.96;

/// Arithmetic mean of the sample.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample variance with Bessel's correction.
pub fn variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let mu = mean(values);
    let squares: f64 = values.iter().map(|v| (v - mu) * (v - mu)).sum();
    squares / (values.len() - 1) as f64
}

/// Sample standard deviation.
pub fn stddev(values: &[f64]) -> f64 {
    variance(values).sqrt()
}

/// Lower and upper bounds of the 95% confidence interval for the mean.
pub fn confidence_interval(mean: f64, stddev: f64, samples: usize) -> (f64, f64) {
    let half_width = CONFIDENCE_95 * stddev / (samples as f64).sqrt();
    (mean - half_width, mean + half_width)
}
