//! Log-normal distribution.

use dv_core::Real;

use super::{Distribution, Normal};

/// Log-normal distribution: `ln X` is normal with mean `mu` and standard
/// deviation `sigma`.
#[derive(Debug, Clone, Copy)]
pub struct LogNormal {
    mu: Real,
    sigma: Real,
}

impl LogNormal {
    /// Create a log-normal distribution (`sigma > 0`; not re-checked
    /// here).
    pub fn new(mu: Real, sigma: Real) -> Self {
        Self { mu, sigma }
    }

    /// Log-scale location μ.
    pub fn mu(&self) -> Real {
        self.mu
    }

    /// Log-scale standard deviation σ.
    pub fn sigma(&self) -> Real {
        self.sigma
    }
}

impl Distribution for LogNormal {
    fn pdf(&self, x: Real) -> Real {
        if x <= 0.0 {
            return 0.0;
        }
        Normal::new(self.mu, self.sigma).pdf(x.ln()) / x
    }

    fn cdf(&self, x: Real) -> Real {
        if x <= 0.0 {
            return 0.0;
        }
        Normal::new(self.mu, self.sigma).cdf(x.ln())
    }

    fn mean(&self) -> Option<Real> {
        Some((self.mu + self.sigma * self.sigma / 2.0).exp())
    }

    fn variance(&self) -> Option<Real> {
        let sigma2 = self.sigma * self.sigma;
        Some((sigma2.exp() - 1.0) * (2.0 * self.mu + sigma2).exp())
    }

    fn median(&self) -> Option<Real> {
        Some(self.mu.exp())
    }

    fn mode(&self) -> Option<Real> {
        Some((self.mu - self.sigma * self.sigma).exp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn zero_outside_support() {
        let d = LogNormal::new(0.0, 1.0);
        assert_eq!(d.pdf(0.0), 0.0);
        assert_eq!(d.pdf(-1.0), 0.0);
        assert_eq!(d.cdf(0.0), 0.0);
    }

    #[test]
    fn cdf_at_median_is_half() {
        let d = LogNormal::new(1.5, 0.75);
        let median = d.median().unwrap();
        assert_eq!(d.cdf(median), 0.5);
    }

    #[test]
    fn summary_statistics() {
        let d = LogNormal::new(1.0, 1.0);
        assert_abs_diff_eq!(d.mean().unwrap(), (1.5f64).exp(), epsilon = 1e-12);
        assert_abs_diff_eq!(
            d.variance().unwrap(),
            (1f64.exp() - 1.0) * (3f64).exp(),
            epsilon = 1e-10
        );
        assert_abs_diff_eq!(d.median().unwrap(), 1f64.exp(), epsilon = 1e-12);
        assert_abs_diff_eq!(d.mode().unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn pdf_matches_transformed_normal() {
        let d = LogNormal::new(0.5, 1.25);
        let n = Normal::new(0.5, 1.25);
        let x: Real = 2.0;
        assert_abs_diff_eq!(d.pdf(x), n.pdf(x.ln()) / x, epsilon = 1e-15);
    }
}
