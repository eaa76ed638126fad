//! Threshold generation.

/// Offset added to the first ladder level so it sits just above the minimum.
pub const LADDER_OFFSET: f64 = 0.01;

/// Upper bound on the number of thresholds a plot may use.
pub const MAX_LEVELS: usize = 1024;

/// Evenly spaced ladder of `count` thresholds over `[min, max]`.
///
/// `delta = (max - min) / (count - 0.95)` and `t_i = min + 0.01 + i * delta`,
/// so the first level clears the minimum and the last one lands just below
/// the maximum.
pub fn linear_ladder(min: f64, max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return vec![];
    }
    let delta = (max - min) / (count as f64 - 0.95);
    (0..count)
        .map(|i| min + LADDER_OFFSET + i as f64 * delta)
        .collect()
}

/// Generate contour levels automatically based on data range and interval
///
/// Levels are the multiples of `interval` inside `[min, max]`. Returns no
/// levels when the range holds more than [`MAX_LEVELS`] of them.
pub fn interval_levels(min: f64, max: f64, interval: f64) -> Vec<f64> {
    if !interval.is_finite() || interval <= 0.0 || !min.is_finite() || !max.is_finite() || max < min {
        return vec![];
    }
    if interval_level_count(min, max, interval) > MAX_LEVELS as f64 {
        return vec![];
    }

    // Start from first multiple of interval at or above min
    let first = (min / interval).ceil() as i64;
    let last = (max / interval).floor() as i64;
    (first..=last).map(|k| k as f64 * interval).collect()
}

/// Approximate number of `interval` steps across `[min, max]`.
pub fn interval_level_count(min: f64, max: f64, interval: f64) -> f64 {
    (max - min) / interval + 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_ladder_eight() {
        let levels = linear_ladder(0.0, 100.0, 8);
        assert_eq!(levels.len(), 8);
        assert!((levels[0] - 0.01).abs() < 1e-12);
        let delta = 100.0 / 7.05;
        assert!((levels[7] - (0.01 + 7.0 * delta)).abs() < 1e-9);
        assert!(levels[7] < 100.0);
        assert!(levels.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_linear_ladder_empty() {
        assert!(linear_ladder(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn test_interval_levels() {
        assert_eq!(interval_levels(0.0, 20.0, 5.0), vec![0.0, 5.0, 10.0, 15.0, 20.0]);
        assert_eq!(interval_levels(-7.0, 7.0, 5.0), vec![-5.0, 0.0, 5.0]);
        assert!(interval_levels(0.0, 20.0, 0.0).is_empty());
        assert!(interval_levels(5.0, 1.0, 1.0).is_empty());
    }

    #[test]
    fn test_interval_levels_too_dense() {
        assert!(interval_levels(0.0, 1.0, 1e-300).is_empty());
        assert!(interval_level_count(0.0, 1.0, 1e-300) > MAX_LEVELS as f64);
        assert_eq!(interval_levels(0.0, 1023.0, 1.0).len(), MAX_LEVELS);
    }
}
