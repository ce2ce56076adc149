//! Least squares solver.
//!
//! The regression problems here are tiny (two columns: intercept + slope),
//! but real indicator series can be nearly constant, which makes the design
//! matrix ill-conditioned. We solve via SVD so those cases degrade gracefully
//! instead of panicking, and fall back to `None` when even a relaxed
//! tolerance cannot produce finite coefficients.

use nalgebra::{DMatrix, DVector};

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the system is too ill-conditioned to solve robustly.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = x.clone().svd(true, true);

    // Try progressively looser tolerances if the strict solve fails.
    for &tol in &[1e-10, 1e-8, 1e-6] {
        if let Ok(beta) = svd.solve(y, tol) {
            if beta.iter().all(|v| v.is_finite()) {
                return Some(beta);
            }
        }
    }

    None
}

/// Fit `y = intercept + slope * x` by least squares.
///
/// Returns `(intercept, slope)`, or `None` when the solver rejects the
/// system. Callers are expected to have filtered non-finite pairs already.
pub fn linear_fit(xs: &[f64], ys: &[f64]) -> Option<(f64, f64)> {
    debug_assert_eq!(xs.len(), ys.len());
    if xs.len() < 2 {
        return None;
    }

    let n = xs.len();
    let mut design = DMatrix::zeros(n, 2);
    for (i, &x) in xs.iter().enumerate() {
        design[(i, 0)] = 1.0;
        design[(i, 1)] = x;
    }
    let y = DVector::from_row_slice(ys);

    let beta = solve_least_squares(&design, &y)?;
    Some((beta[0], beta[1]))
}
