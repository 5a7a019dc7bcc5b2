//! Numeric helpers shared by the valuation and screening passes.
//!
//! Every rate-like quantity is clamped into a documented domain before use, and
//! divisions that can blow up (zero shares, zero price) are coerced back to a
//! finite value instead of leaking NaN or infinity into scores.

/// Clamp `value` into `[min, max]`.
///
/// Unlike `f64::clamp` this never panics when `min > max`; the upper bound wins,
/// which is what the terminal-growth clamp needs when the discount rate is at
/// its floor.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Replace NaN and infinities with 0.0.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Min-max normalize `value` into `[0, 1]`.
/// A degenerate range maps to the midpoint; a non-finite value maps to 0.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if (max - min).abs() < f64::EPSILON {
        return 0.5;
    }
    if !value.is_finite() {
        return 0.0;
    }
    clamp((value - min) / (max - min), 0.0, 1.0)
}

/// Compute the mean of a data slice.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_bounds() {
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
        assert_eq!(clamp(-3.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(3.0, 0.0, 1.0), 1.0);
        // Inverted range collapses to the upper bound
        assert_eq!(clamp(0.5, 0.2, 0.1), 0.1);
    }

    #[test]
    fn test_finite_or_zero() {
        assert_eq!(finite_or_zero(1.25), 1.25);
        assert_eq!(finite_or_zero(f64::NAN), 0.0);
        assert_eq!(finite_or_zero(f64::INFINITY), 0.0);
        assert_eq!(finite_or_zero(5.0 / 0.0), 0.0);
    }

    #[test]
    fn test_normalize() {
        assert!((normalize(0.35, 0.1, 0.6) - 0.5).abs() < 1e-12);
        assert_eq!(normalize(0.0, 0.1, 0.6), 0.0);
        assert_eq!(normalize(1.0, 0.1, 0.6), 1.0);
        assert_eq!(normalize(0.3, 0.2, 0.2), 0.5);
        assert_eq!(normalize(f64::NAN, 0.1, 0.6), 0.0);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), 0.0);
        assert!((mean(&[1.0, 2.0, 3.0, 4.0]) - 2.5).abs() < 1e-12);
    }
}
