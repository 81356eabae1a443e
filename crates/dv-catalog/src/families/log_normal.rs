//! Log-normal distribution definitions.
//!
//! Catalogued in μ/σ² coordinates; the callables compute σ = √σ² before
//! delegating to the formula set.

use dv_core::Real;
use dv_math::distributions::{Distribution, LogNormal};

use crate::distribution::{DistributionDef, Family, Reference};
use crate::parameter::{Parameter, ValueKind};
use crate::parametrization::{DerivedQuantity, Parametrization, Quantity};

/// Log-scale location μ.
pub static MU: Parameter = Parameter {
    name: "mu",
    label: "\\mu",
    legal_range: (Real::NEG_INFINITY, Real::INFINITY),
    interactive_range: (-2.0, 2.0),
    log_scale: false,
    default_value: 1.0,
    value_kind: ValueKind::Continuous,
    conjugate_prior: Some("normal"),
    description: "log-scale",
};

/// Log-scale variance σ².
pub static SIGMA2: Parameter = Parameter {
    name: "sigma2",
    label: "\\sigma^2",
    legal_range: (0.0, Real::INFINITY),
    interactive_range: (0.1, 10.0),
    log_scale: true,
    default_value: 1.0,
    value_kind: ValueKind::Continuous,
    conjugate_prior: Some("inversegamma"),
    description: "shape",
};

fn density(x: Real, p: &[Real]) -> Real {
    LogNormal::new(p[0], p[1].sqrt()).pdf(x)
}

fn cdf(x: Real, p: &[Real]) -> Real {
    LogNormal::new(p[0], p[1].sqrt()).cdf(x)
}

fn validity(p: &[Real]) -> bool {
    p[1] > 0.0
}

fn plot_range(_p: &[Real]) -> (Real, Real) {
    (0.0, 15.0)
}

fn mean(p: &[Real]) -> Option<Real> {
    LogNormal::new(p[0], p[1].sqrt()).mean()
}

fn variance(p: &[Real]) -> Option<Real> {
    LogNormal::new(p[0], p[1].sqrt()).variance()
}

fn median(p: &[Real]) -> Option<Real> {
    LogNormal::new(p[0], p[1].sqrt()).median()
}

fn mode(p: &[Real]) -> Option<Real> {
    LogNormal::new(p[0], p[1].sqrt()).mode()
}

/// The μ/σ² parametrization.
pub fn mu_sigma2() -> Parametrization {
    Parametrization {
        name: "mu/sigma2",
        params: vec![MU, SIGMA2],
        density_fn: density,
        cdf_fn: cdf,
        density_display: "\\left(\\pi\\sigma^2x^2\\right)^{-\\frac{1}{2}}\\exp\\left\\{-\\frac{1}{2\\sigma^2}\\left(\\log(x)-\\mu\\right)^2\\right\\}",
        support: (0.0, Real::INFINITY),
        support_display: "(0,\\infty)",
        plot_range_fn: plot_range,
        validity_fn: validity,
        conjugate_prior: Some("normalinversegamma"),
        quantities: vec![
            DerivedQuantity {
                quantity: Quantity::Mean,
                display: "\\exp\\left\\{\\mu + \\frac{\\sigma^2}{2}\\right\\}",
                eval: mean,
            },
            DerivedQuantity {
                quantity: Quantity::Variance,
                display: "\\left(e^{\\sigma^2}-1\\right)\\exp\\left\\{2\\mu + \\sigma^2\\right\\}",
                eval: variance,
            },
            DerivedQuantity {
                quantity: Quantity::Median,
                display: "e^\\mu",
                eval: median,
            },
            DerivedQuantity {
                quantity: Quantity::Mode,
                display: "\\exp\\left\\{\\mu-\\sigma^2\\right\\}",
                eval: mode,
            },
        ],
        note: None,
    }
}

/// The catalog entry for the log-normal family.
pub fn definition() -> DistributionDef {
    DistributionDef {
        family: Family::LogNormal,
        label: "Log-normal",
        parametrizations: vec![mu_sigma2()],
        note: "The log-normal distribution describes variables whose logarithm is normally \
               distributed. It is commonly used to model variables that are always positive and \
               have long right tails, such as income, stock prices, and particle sizes. The \
               distribution is skewed and multiplicative rather than additive.",
        reference: Reference {
            name: "Wikipedia",
            link: "https://en.wikipedia.org/wiki/Log-normal_distribution",
        },
    }
}
