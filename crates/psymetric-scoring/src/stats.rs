//! Normal-distribution helpers.
//!
//! `erf` uses the Abramowitz–Stegun 7.1.26 rational approximation
//! (maximum absolute error 1.5e-7) so derived scores are reproducible
//! without a statistics dependency.

const A1: f64 = 0.254_829_592;
const A2: f64 = -0.284_496_736;
const A3: f64 = 1.421_413_741;
const A4: f64 = -1.453_152_027;
const A5: f64 = 1.061_405_429;
const P: f64 = 0.327_591_1;

pub fn erf(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();
    let t = 1.0 / (1.0 + P * x);
    let poly = ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t;
    sign * (1.0 - poly * (-x * x).exp())
}

/// Standard normal cumulative distribution function.
pub fn normal_cdf(z: f64) -> f64 {
    0.5 + 0.5 * erf(z / std::f64::consts::SQRT_2)
}

/// `None` when the standard deviation cannot describe a distribution.
pub fn z_score(raw: f64, mean: f64, std_dev: f64) -> Option<f64> {
    if !(std_dev.is_finite() && std_dev > 0.0 && mean.is_finite()) {
        return None;
    }
    Some((raw - mean) / std_dev)
}

/// Percentile rank (0–100) of a z-score, rounded half away from zero.
pub fn percentile_from_z(z: f64) -> f64 {
    (100.0 * normal_cdf(z)).round()
}

/// T-score (mean 50, SD 10) of a z-score, rounded half away from zero.
pub fn t_score_from_z(z: f64) -> f64 {
    (50.0 + 10.0 * z).round()
}
