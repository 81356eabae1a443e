//! Poisson distribution.

use dv_core::Real;

use super::Distribution;
use crate::comparison::is_integer;
use crate::special::factorial;

/// Poisson distribution with rate `lambda`.
#[derive(Debug, Clone, Copy)]
pub struct Poisson {
    lambda: Real,
}

impl Poisson {
    /// Create a Poisson distribution with rate `lambda` (> 0; not
    /// re-checked here).
    pub fn new(lambda: Real) -> Self {
        Self { lambda }
    }

    /// Rate parameter λ.
    pub fn lambda(&self) -> Real {
        self.lambda
    }
}

impl Distribution for Poisson {
    /// Probability mass `λˣ e^{−λ}/x!`; 0 at non-integers and negatives.
    fn pdf(&self, x: Real) -> Real {
        if x < 0.0 || !is_integer(x) {
            return 0.0;
        }
        self.lambda.powf(x) * (-self.lambda).exp() / factorial(x as u64)
    }

    /// Direct summation of the mass function over `0..=⌊x⌋`.
    fn cdf(&self, x: Real) -> Real {
        if x < 0.0 {
            return 0.0;
        }
        let mut sum = 0.0;
        for k in 0..=x.floor() as u64 {
            sum += self.pdf(k as Real);
        }
        sum
    }

    fn mean(&self) -> Option<Real> {
        Some(self.lambda)
    }

    fn variance(&self) -> Option<Real> {
        Some(self.lambda)
    }
}
