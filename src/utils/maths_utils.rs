use argminmax::ArgMinMax;
use itertools::Itertools;
use statrs::statistics::Statistics;

/// Arithmetic mean. `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().mean())
}

/// Index of the largest value (first occurrence).
#[inline]
pub fn arg_max(values: &[f64]) -> Option<usize> {
    if values.is_empty() {
        return None;
    }
    Some(values.argmax())
}

/// Index of the smallest value (first occurrence).
#[inline]
pub fn arg_min(values: &[f64]) -> Option<usize> {
    if values.is_empty() {
        return None;
    }
    Some(values.argmin())
}

/// Period-over-period differences: `out[i] = v[i + 1] - v[i]`. One shorter than the input.
pub fn period_diffs(values: &[f64]) -> Vec<f64> {
    values.iter().tuple_windows().map(|(a, b)| b - a).collect()
}

/// Period-over-period percent change (x100). One shorter than the input.
/// A zero previous value yields 0.0 rather than an infinite change.
pub fn pct_changes(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .tuple_windows()
        .map(|(prev, next)| {
            if prev.abs() <= f64::EPSILON {
                0.0
            } else {
                (next - prev) / prev * 100.0
            }
        })
        .collect()
}

/// Running total of a series.
pub fn running_sum(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .scan(0.0, |acc, v| {
            *acc += v;
            Some(*acc)
        })
        .collect()
}

/// Whole units, half away from zero.
#[inline]
pub fn round_units(value: f64) -> i64 {
    value.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_and_empty() {
        assert_eq!(mean(&[]), None);
        assert_relative_eq!(mean(&[10.0, 20.0, 33.0]).unwrap(), 21.0);
    }

    #[test]
    fn test_arg_extremes_take_first_occurrence() {
        let values = [3.0, 9.0, 1.0, 9.0, 1.0];
        assert_eq!(arg_max(&values), Some(1));
        assert_eq!(arg_min(&values), Some(2));
        assert_eq!(arg_max(&[]), None);
    }

    #[test]
    fn test_diffs_and_pct_changes() {
        let values = [100.0, 110.0, 99.0];
        assert_eq!(period_diffs(&values), vec![10.0, -11.0]);

        let pct = pct_changes(&values);
        assert_relative_eq!(pct[0], 10.0);
        assert_relative_eq!(pct[1], -10.0);

        assert_eq!(pct_changes(&[0.0, 5.0]), vec![0.0]);
        assert!(period_diffs(&[1.0]).is_empty());
    }

    #[test]
    fn test_running_sum() {
        assert_eq!(running_sum(&[1.0, 2.0, 3.5]), vec![1.0, 3.0, 6.5]);
        assert!(running_sum(&[]).is_empty());
    }

    #[test]
    fn test_round_units() {
        assert_eq!(round_units(44.5), 45);
        assert_eq!(round_units(-2.5), -3);
        assert_eq!(round_units(12.49), 12);
    }
}
