//! Negative binomial distribution.

use dv_core::Real;

use super::Distribution;
use crate::comparison::is_integer;
use crate::special::binomial_coefficient;

/// Negative binomial distribution: number of successes observed before `r`
/// failures occur, each trial succeeding with probability `p`.
///
/// Like [`super::Binomial`], `r` is carried as a `Real`; its integrality is
/// gated by the catalog's validity predicate.
#[derive(Debug, Clone, Copy)]
pub struct NegativeBinomial {
    r: Real,
    p: Real,
}

impl NegativeBinomial {
    /// Create a negative binomial distribution (`r` a positive integer,
    /// `0 < p < 1`; not re-checked here).
    pub fn new(r: Real, p: Real) -> Self {
        Self { r, p }
    }

    /// Required number of failures r.
    pub fn r(&self) -> Real {
        self.r
    }

    /// Per-trial success probability p.
    pub fn p(&self) -> Real {
        self.p
    }
}

impl Distribution for NegativeBinomial {
    /// Probability mass `C(x+r−1, x)·pˣ·(1−p)ʳ`; 0 at non-integers and
    /// negatives.
    fn pdf(&self, x: Real) -> Real {
        if x < 0.0 || !is_integer(x) {
            return 0.0;
        }
        binomial_coefficient((x + self.r - 1.0) as u64, x as u64)
            * self.p.powf(x)
            * (1.0 - self.p).powf(self.r)
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
        Some(self.r * self.p / (1.0 - self.p))
    }

    fn variance(&self) -> Option<Real> {
        let q = 1.0 - self.p;
        Some(self.r * self.p / (q * q))
    }
}
