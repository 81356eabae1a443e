//! Scaled chi-squared distribution definitions.

use dv_core::Real;
use dv_math::distributions::{ChiSquared, Distribution};

use crate::distribution::{DistributionDef, Family, Reference};
use crate::parameter::{Parameter, ValueKind};
use crate::parametrization::{DerivedQuantity, Parametrization, Quantity};

/// Degrees of freedom ν.
pub static NU: Parameter = Parameter {
    name: "nu",
    label: "\\nu",
    legal_range: (0.0, Real::INFINITY),
    interactive_range: (1.0, 10.0),
    log_scale: false,
    default_value: 3.0,
    value_kind: ValueKind::Discrete,
    conjugate_prior: None,
    description: "degrees of freedom",
};

/// Scale parameter σ.
pub static SIGMA: Parameter = Parameter {
    name: "sigma",
    label: "\\sigma",
    legal_range: (0.0, Real::INFINITY),
    interactive_range: (0.1, 10.0),
    log_scale: true,
    default_value: 1.0,
    value_kind: ValueKind::Continuous,
    conjugate_prior: None,
    description: "scale",
};

fn density(x: Real, p: &[Real]) -> Real {
    ChiSquared::new(p[0], p[1]).pdf(x)
}

fn cdf(x: Real, p: &[Real]) -> Real {
    ChiSquared::new(p[0], p[1]).cdf(x)
}

fn validity(p: &[Real]) -> bool {
    p[0] > 0.0 && p[1] > 0.0
}

fn plot_range(_p: &[Real]) -> (Real, Real) {
    (0.0, 40.0)
}

fn mean(p: &[Real]) -> Option<Real> {
    ChiSquared::new(p[0], p[1]).mean()
}

fn variance(p: &[Real]) -> Option<Real> {
    ChiSquared::new(p[0], p[1]).variance()
}

/// The scaled parametrization.
pub fn scaled() -> Parametrization {
    Parametrization {
        name: "scaled",
        params: vec![NU, SIGMA],
        density_fn: density,
        cdf_fn: cdf,
        density_display: "\\frac{1}{(2\\sigma)^\\frac{\\nu}{2}\\Gamma\\left(\\frac{\\nu}{2}\\right)}x^{\\frac{\\nu}{2}-1}\\exp\\left\\{-\\frac{x}{2\\sigma}\\right\\}",
        support: (0.0, Real::INFINITY),
        support_display: "[0,\\infty)",
        plot_range_fn: plot_range,
        validity_fn: validity,
        conjugate_prior: None,
        quantities: vec![
            DerivedQuantity {
                quantity: Quantity::Mean,
                display: "\\sigma\\nu",
                eval: mean,
            },
            DerivedQuantity {
                quantity: Quantity::Variance,
                display: "2\\nu\\sigma^2",
                eval: variance,
            },
        ],
        note: None,
    }
}

/// The catalog entry for the chi-squared family.
pub fn definition() -> DistributionDef {
    DistributionDef {
        family: Family::ChiSquared,
        label: "Chi-squared",
        parametrizations: vec![scaled()],
        note: "The chi-squared distribution is widely used in statistical inference, \
               particularly in hypothesis testing and confidence interval construction. It \
               describes the distribution of the sum of squared standard normal random \
               variables. It is fundamental in chi-squared tests, analysis of variance, and \
               other statistical procedures.",
        reference: Reference {
            name: "Wikipedia",
            link: "https://en.wikipedia.org/wiki/Chi-squared_distribution",
        },
    }
}
