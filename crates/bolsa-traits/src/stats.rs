//! Statistical helpers shared by the factor implementations.

use ndarray::Array1;

/// Mean and sample standard deviation (N-1 denominator) of a slice.
///
/// Returns `None` for fewer than two values, where the sample standard
/// deviation is undefined.
#[must_use]
pub fn mean_std(values: &[f64]) -> Option<(f64, f64)> {
    if values.len() < 2 {
        return None;
    }
    let arr = Array1::from_vec(values.to_vec());
    let mean = arr.mean()?;
    let std = arr.std(1.0);
    Some((mean, std))
}

/// Simple moving average over the trailing `window` values.
///
/// Returns `None` when fewer than `window` values are available or the
/// window is zero.
#[must_use]
pub fn trailing_mean(values: &[f64], window: usize) -> Option<f64> {
    if window == 0 || values.len() < window {
        return None;
    }
    let tail = &values[values.len() - window..];
    Some(tail.iter().sum::<f64>() / window as f64)
}

/// Round to the given number of decimal places.
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_std() {
        let (mean, std) = mean_std(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_relative_eq!(mean, 3.0);
        assert_relative_eq!(std, 2.5_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_mean_std_too_short() {
        assert!(mean_std(&[]).is_none());
        assert!(mean_std(&[1.0]).is_none());
    }

    #[test]
    fn test_trailing_mean() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_relative_eq!(trailing_mean(&values, 2).unwrap(), 3.5);
        assert_relative_eq!(trailing_mean(&values, 4).unwrap(), 2.5);
        assert!(trailing_mean(&values, 5).is_none());
        assert!(trailing_mean(&values, 0).is_none());
    }

    #[test]
    fn test_round_to() {
        assert_relative_eq!(round_to(3.14159, 2), 3.14, epsilon = 1e-12);
        assert_relative_eq!(round_to(-2.5, 0), -3.0);
        assert_relative_eq!(round_to(7.04, 1), 7.0);
    }
}
