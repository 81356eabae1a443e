//! Normal (Gaussian) distribution.

use dv_core::Real;

use super::Distribution;
use crate::special::{standard_normal_cdf, standard_normal_pdf};

/// Normal distribution with location `mu` and standard deviation `sigma`.
#[derive(Debug, Clone, Copy)]
pub struct Normal {
    mu: Real,
    sigma: Real,
}

impl Normal {
    /// Create a normal distribution with mean `mu` and standard deviation
    /// `sigma` (`sigma > 0`; not re-checked here).
    pub fn new(mu: Real, sigma: Real) -> Self {
        Self { mu, sigma }
    }

    /// Location parameter μ.
    pub fn mu(&self) -> Real {
        self.mu
    }

    /// Scale parameter σ.
    pub fn sigma(&self) -> Real {
        self.sigma
    }
}

impl Distribution for Normal {
    fn pdf(&self, x: Real) -> Real {
        standard_normal_pdf((x - self.mu) / self.sigma) / self.sigma
    }

    fn cdf(&self, x: Real) -> Real {
        standard_normal_cdf((x - self.mu) / self.sigma)
    }

    fn mean(&self) -> Option<Real> {
        Some(self.mu)
    }

    fn variance(&self) -> Option<Real> {
        Some(self.sigma * self.sigma)
    }

    fn median(&self) -> Option<Real> {
        Some(self.mu)
    }

    fn mode(&self) -> Option<Real> {
        Some(self.mu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::linspace;
    use approx::assert_abs_diff_eq;

    #[test]
    fn standard_normal_values() {
        let d = Normal::new(0.0, 1.0);
        assert_abs_diff_eq!(d.pdf(0.0), 0.3989422804014327, epsilon = 1e-12);
        assert_eq!(d.cdf(0.0), 0.5);
        assert_abs_diff_eq!(d.cdf(1.96), 0.975, epsilon = 1e-4);
    }

    #[test]
    fn cdf_symmetric_about_mean() {
        let d = Normal::new(2.0, 0.5);
        assert_eq!(d.cdf(2.0), 0.5);
        for &dx in &[0.25, 0.5, 1.0, 2.0] {
            let sum = d.cdf(2.0 + dx) + d.cdf(2.0 - dx);
            assert!((sum - 1.0).abs() < 1e-6, "cdf(2±{dx}) sums to {sum}");
        }
    }

    #[test]
    fn pdf_integrates_to_one() {
        let d = Normal::new(1.0, 2.0);
        let xs = linspace(1.0 - 16.0, 1.0 + 16.0, 1601);
        let h = xs[1] - xs[0];
        let mut integral = 0.0;
        for w in xs.windows(2) {
            integral += 0.5 * h * (d.pdf(w[0]) + d.pdf(w[1]));
        }
        assert_abs_diff_eq!(integral, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn summary_statistics() {
        let d = Normal::new(-1.5, 3.0);
        assert_eq!(d.mean(), Some(-1.5));
        assert_eq!(d.variance(), Some(9.0));
        assert_eq!(d.median(), Some(-1.5));
        assert_eq!(d.mode(), Some(-1.5));
    }
}
