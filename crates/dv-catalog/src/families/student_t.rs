//! Student's t distribution definitions.

use dv_core::Real;
use dv_math::distributions::{Distribution, StudentT};

use crate::distribution::{DistributionDef, Family, Reference};
use crate::parameter::{Parameter, ValueKind};
use crate::parametrization::{DerivedQuantity, Parametrization, Quantity};

/// Degrees of freedom ν.
pub static NU: Parameter = Parameter {
    name: "nu",
    label: "\\nu",
    legal_range: (0.0, Real::INFINITY),
    interactive_range: (1.0, 50.0),
    log_scale: false,
    default_value: 5.0,
    value_kind: ValueKind::Discrete,
    conjugate_prior: None,
    description: "degrees of freedom",
};

/// Location parameter μ.
pub static MU: Parameter = Parameter {
    name: "mu",
    label: "\\mu",
    legal_range: (Real::NEG_INFINITY, Real::INFINITY),
    interactive_range: (-8.0, 8.0),
    log_scale: false,
    default_value: 0.0,
    value_kind: ValueKind::Continuous,
    conjugate_prior: None,
    description: "location",
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
    StudentT::new(p[0], p[1], p[2]).pdf(x)
}

fn cdf(x: Real, p: &[Real]) -> Real {
    StudentT::new(p[0], p[1], p[2]).cdf(x)
}

fn validity(p: &[Real]) -> bool {
    p[0] > 0.0 && p[2] > 0.0
}

fn plot_range(p: &[Real]) -> (Real, Real) {
    (p[1] - 10.0, p[1] + 10.0)
}

fn mean(p: &[Real]) -> Option<Real> {
    StudentT::new(p[0], p[1], p[2]).mean()
}

fn variance(p: &[Real]) -> Option<Real> {
    StudentT::new(p[0], p[1], p[2]).variance()
}

fn median(p: &[Real]) -> Option<Real> {
    StudentT::new(p[0], p[1], p[2]).median()
}

fn mode(p: &[Real]) -> Option<Real> {
    StudentT::new(p[0], p[1], p[2]).mode()
}

/// The location/scale parametrization.
pub fn location_scale() -> Parametrization {
    Parametrization {
        name: "location/scale",
        params: vec![NU, MU, SIGMA],
        density_fn: density,
        cdf_fn: cdf,
        density_display: "\\frac{\\Gamma\\left(\\frac{\\nu+1}{2}\\right)}{\\sqrt{\\pi\\nu\\sigma^2}\\Gamma\\left(\\frac{\\nu}{2}\\right)}\\left(1+\\frac{(x-\\mu)^2}{\\nu\\sigma^2}\\right)^{-\\frac{\\nu+1}{2}}",
        support: (Real::NEG_INFINITY, Real::INFINITY),
        support_display: "(-\\infty,\\infty)",
        plot_range_fn: plot_range,
        validity_fn: validity,
        conjugate_prior: None,
        quantities: vec![
            DerivedQuantity {
                quantity: Quantity::Mean,
                display: "\\mu, \\nu>1",
                eval: mean,
            },
            DerivedQuantity {
                quantity: Quantity::Variance,
                display: "\\frac{\\nu}{\\nu-2}\\sigma^2, \\nu>2",
                eval: variance,
            },
            DerivedQuantity {
                quantity: Quantity::Median,
                display: "\\mu",
                eval: median,
            },
            DerivedQuantity {
                quantity: Quantity::Mode,
                display: "\\mu",
                eval: mode,
            },
        ],
        note: None,
    }
}

/// The catalog entry for the Student-t family.
pub fn definition() -> DistributionDef {
    DistributionDef {
        family: Family::StudentT,
        label: "Student's t",
        parametrizations: vec![location_scale()],
        note: "Student's t-distribution is used when estimating the mean of a normally \
               distributed population when the sample size is small and the population standard \
               deviation is unknown. It has heavier tails than the normal distribution, providing \
               more conservative estimates. As degrees of freedom increase, it approaches the \
               normal distribution.",
        reference: Reference {
            name: "Wikipedia",
            link: "https://en.wikipedia.org/wiki/Student%27s_t-distribution",
        },
    }
}
