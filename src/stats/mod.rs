//! Descriptive statistics over numeric series.
//!
//! The outputs feed dashboard labels directly, so every degenerate case is
//! defined to a safe value: an empty (or fully non-finite) input yields an
//! all-zero summary rather than an error or NaN.

use crate::domain::{IndicatorRecord, StatSummary};

/// Compute mean/median/stddev/min/max over a numeric series.
///
/// Non-finite values are filtered out before any computation. Standard
/// deviation is the population form (divide by N).
pub fn calculate_statistics(values: &[f64]) -> StatSummary {
    let mut vals: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if vals.is_empty() {
        return StatSummary::zero();
    }

    vals.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = vals.len();
    let mean = vals.iter().sum::<f64>() / n as f64;

    let median = if n % 2 == 1 {
        vals[n / 2]
    } else {
        (vals[n / 2 - 1] + vals[n / 2]) / 2.0
    };

    let variance = vals.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64;

    StatSummary {
        mean,
        median,
        std_dev: variance.sqrt(),
        min: vals[0],
        max: vals[n - 1],
    }
}

/// Convenience: statistics over the values of a record slice.
pub fn summarize_records(records: &[IndicatorRecord]) -> StatSummary {
    let values: Vec<f64> = records.iter().map(|r| r.value).collect();
    calculate_statistics(&values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_all_zero_summary() {
        let s = calculate_statistics(&[]);
        assert_eq!(s, StatSummary::zero());
    }

    #[test]
    fn non_finite_values_are_filtered() {
        let s = calculate_statistics(&[f64::NAN, 10.0, f64::INFINITY, 20.0]);
        assert!((s.mean - 15.0).abs() < 1e-12);
        assert!((s.min - 10.0).abs() < 1e-12);
        assert!((s.max - 20.0).abs() < 1e-12);
    }

    #[test]
    fn all_non_finite_behaves_like_empty() {
        let s = calculate_statistics(&[f64::NAN, f64::NEG_INFINITY]);
        assert_eq!(s, StatSummary::zero());
    }

    #[test]
    fn median_even_length_is_mean_of_middle_two() {
        let s = calculate_statistics(&[4.0, 1.0, 3.0, 2.0]);
        assert!((s.median - 2.5).abs() < 1e-12);
    }

    #[test]
    fn median_odd_length_is_middle_element() {
        let s = calculate_statistics(&[5.0, 1.0, 3.0]);
        assert!((s.median - 3.0).abs() < 1e-12);
    }

    #[test]
    fn std_dev_is_population_form() {
        // Population stddev of [2, 4, 4, 4, 5, 5, 7, 9] is exactly 2.
        let s = calculate_statistics(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((s.std_dev - 2.0).abs() < 1e-12);
        assert!((s.mean - 5.0).abs() < 1e-12);
    }
}
