//! Floating-point comparison utilities.
//!
//! The engine hands its consumers plain `f64`s; these helpers are the
//! comparisons used on them: tolerance checks in the test suites, and the
//! integer-grid test the discrete families and their validity predicates
//! gate on.

use dv_core::Real;

/// Default tolerance for [`close`].
pub const EPSILON: Real = 1e-10;

/// True if `a` and `b` differ by at most `epsilon`.
#[inline]
pub fn close(a: Real, b: Real, epsilon: Real) -> bool {
    (a - b).abs() <= epsilon
}

/// True if `x` lies on the integer grid.
///
/// Discrete families carry probability mass only at integers: their mass
/// functions evaluate to 0 where this is false, and the integrality of
/// count parameters (binomial N, negative-binomial r) is checked with it.
#[inline]
pub fn is_integer(x: Real) -> bool {
    x.floor() == x
}
