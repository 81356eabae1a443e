//! Evaluation-grid helpers for curve sampling.
//!
//! The plotting layer samples continuous families on a dense, evenly spaced
//! grid (typically 200 points) and discrete families on an integer grid.
//! Both helpers are also used by the numerical-integration checks in the
//! test suites.

use dv_core::{Real, Size};

/// `n` evenly spaced sample points over `[lo, hi]`, endpoints included.
pub fn linspace(lo: Real, hi: Real, n: Size) -> Vec<Real> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![lo];
    }
    let step = (hi - lo) / (n as Real - 1.0);
    (0..n).map(|i| lo + i as Real * step).collect()
}

/// The integers covering `[lo, hi]`, as `Real` evaluation points.
pub fn integer_grid(lo: Real, hi: Real) -> Vec<Real> {
    let start = lo.floor() as i64;
    let end = hi.ceil() as i64;
    (start..=end).map(|k| k as Real).collect()
}
