//! Probability distribution function sets.
//!
//! One module per family, each a small parameter-holding struct
//! implementing the [`Distribution`] capability trait. The family set is
//! closed: the catalog crate selects among these ten, and there is no
//! open-ended registration.

pub mod beta;
pub mod binomial;
pub mod chi_square;
pub mod gamma;
pub mod log_normal;
pub mod negative_binomial;
pub mod normal;
pub mod poisson;
pub mod student_t;
pub mod weibull;

pub use beta::Beta;
pub use binomial::Binomial;
pub use chi_square::ChiSquared;
pub use gamma::Gamma;
pub use log_normal::LogNormal;
pub use negative_binomial::NegativeBinomial;
pub use normal::Normal;
pub use poisson::Poisson;
pub use student_t::StudentT;
pub use weibull::Weibull;

use dv_core::Real;

/// Density, cumulative, and summary-statistic functions of one family.
///
/// `pdf` and `cdf` are total over the reals: points outside the support
/// evaluate to exactly 0, never NaN, so plotting and CDF-range checks do
/// not branch. Summary statistics return `None` where the family has no
/// closed form or where the closed form is undefined at the current
/// parameter values (e.g. the Student-t mean for ν ≤ 1).
///
/// Parameter validity (positive scales, 0 < p < 1, …) is gated by the
/// catalog's validity predicates, not re-checked here; results for invalid
/// parameters are unspecified and may be NaN.
pub trait Distribution {
    /// Probability density (continuous) or mass (discrete) at `x`.
    fn pdf(&self, x: Real) -> Real;

    /// Cumulative probability P(X ≤ x).
    fn cdf(&self, x: Real) -> Real;

    /// Mean, where defined.
    fn mean(&self) -> Option<Real> {
        None
    }

    /// Variance, where defined.
    fn variance(&self) -> Option<Real> {
        None
    }

    /// Median, where a closed form (or documented approximation) exists.
    fn median(&self) -> Option<Real> {
        None
    }

    /// Mode, where defined.
    fn mode(&self) -> Option<Real> {
        None
    }
}
