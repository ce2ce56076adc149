//! Correlation and regression between indicator series.

pub mod ols;

pub use ols::*;

use crate::domain::CorrelationResult;

/// Pearson correlation plus the OLS regression line between two series.
///
/// Pairs are filtered together: a pair is excluded when either side is
/// non-finite. Degenerate inputs never surface NaN:
///
/// - fewer than two valid pairs: coefficient and slope are `0.0`
/// - a constant series (zero variance): coefficient `0.0`, slope `0.0`,
///   intercept = mean of the y side
pub fn correlate(xs: &[f64], ys: &[f64]) -> CorrelationResult {
    let pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys.iter())
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|(&x, &y)| (x, y))
        .collect();

    let n = pairs.len();
    if n < 2 {
        return CorrelationResult {
            coefficient: 0.0,
            slope: 0.0,
            intercept: 0.0,
        };
    }

    let nf = n as f64;
    let sum_x: f64 = pairs.iter().map(|(x, _)| x).sum();
    let sum_y: f64 = pairs.iter().map(|(_, y)| y).sum();
    let sum_xx: f64 = pairs.iter().map(|(x, _)| x * x).sum();
    let sum_yy: f64 = pairs.iter().map(|(_, y)| y * y).sum();
    let sum_xy: f64 = pairs.iter().map(|(x, y)| x * y).sum();

    // Clamp tiny negative rounding residue before the square roots.
    let var_x = (nf * sum_xx - sum_x * sum_x).max(0.0);
    let var_y = (nf * sum_yy - sum_y * sum_y).max(0.0);

    let coefficient = if var_x <= 0.0 || var_y <= 0.0 {
        0.0
    } else {
        ((nf * sum_xy - sum_x * sum_y) / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0)
    };

    let (intercept, slope) = if var_x <= 0.0 {
        // Constant x: the least-squares line is flat through the y mean.
        (sum_y / nf, 0.0)
    } else {
        let pair_xs: Vec<f64> = pairs.iter().map(|(x, _)| *x).collect();
        let pair_ys: Vec<f64> = pairs.iter().map(|(_, y)| *y).collect();
        ols::linear_fit(&pair_xs, &pair_ys).unwrap_or_else(|| {
            // SVD refused the system; the closed-form normal equations still
            // apply since var_x > 0.
            let slope = (nf * sum_xy - sum_x * sum_y) / (nf * sum_xx - sum_x * sum_x);
            ((sum_y - slope * sum_x) / nf, slope)
        })
    };

    CorrelationResult {
        coefficient,
        slope,
        intercept,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_positive_correlation() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let ys = [2.0, 4.0, 6.0, 8.0];

        let r = correlate(&xs, &ys);
        assert!((r.coefficient - 1.0).abs() < 1e-9);
        assert!((r.slope - 2.0).abs() < 1e-9);
        assert!(r.intercept.abs() < 1e-9);
    }

    #[test]
    fn self_correlation_of_non_constant_series_is_one() {
        let xs = [3.0, 1.0, 4.0, 1.5, 9.0];
        let r = correlate(&xs, &xs);
        assert!((r.coefficient - 1.0).abs() < 1e-9);
    }

    #[test]
    fn coefficient_stays_within_unit_interval() {
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
        let ys = [2.1, 1.9, 3.2, 3.8, 5.3];
        let r = correlate(&xs, &ys);
        assert!(r.coefficient >= -1.0 && r.coefficient <= 1.0);
    }

    #[test]
    fn constant_series_yields_zero_coefficient() {
        let xs = [5.0, 5.0, 5.0];
        let ys = [1.0, 2.0, 3.0];

        let r = correlate(&xs, &ys);
        assert_eq!(r.coefficient, 0.0);
        assert_eq!(r.slope, 0.0);
        assert!((r.intercept - 2.0).abs() < 1e-9);
    }

    #[test]
    fn pairs_with_a_non_finite_side_are_dropped_together() {
        let xs = [1.0, f64::NAN, 3.0, 4.0];
        let ys = [2.0, 100.0, f64::NAN, 8.0];

        // Only (1,2) and (4,8) survive: a perfect y = 2x line.
        let r = correlate(&xs, &ys);
        assert!((r.coefficient - 1.0).abs() < 1e-9);
        assert!((r.slope - 2.0).abs() < 1e-9);
    }

    #[test]
    fn fewer_than_two_pairs_defaults_to_zero() {
        let r = correlate(&[1.0], &[2.0]);
        assert_eq!(r.coefficient, 0.0);
        assert_eq!(r.slope, 0.0);

        let r = correlate(&[], &[]);
        assert_eq!(r.coefficient, 0.0);
    }

    #[test]
    fn negative_correlation() {
        let xs = [1.0, 2.0, 3.0];
        let ys = [6.0, 4.0, 2.0];

        let r = correlate(&xs, &ys);
        assert!((r.coefficient - (-1.0)).abs() < 1e-9);
        assert!((r.slope - (-2.0)).abs() < 1e-9);
        assert!((r.intercept - 8.0).abs() < 1e-9);
    }
}
