//! Poisson distribution definitions.

use dv_core::Real;
use dv_math::distributions::{Distribution, Poisson};

use crate::distribution::{DistributionDef, Family, Reference};
use crate::parameter::{Parameter, ValueKind};
use crate::parametrization::{DerivedQuantity, Parametrization, Quantity};

/// Rate parameter λ.
pub static LAMBDA: Parameter = Parameter {
    name: "lambda",
    label: "\\lambda",
    legal_range: (0.0, Real::INFINITY),
    interactive_range: (0.1, 10.0),
    log_scale: true,
    default_value: 1.0,
    value_kind: ValueKind::Continuous,
    conjugate_prior: None,
    description: "rate",
};

fn density(x: Real, p: &[Real]) -> Real {
    Poisson::new(p[0]).pdf(x)
}

fn cdf(x: Real, p: &[Real]) -> Real {
    Poisson::new(p[0]).cdf(x)
}

fn validity(p: &[Real]) -> bool {
    p[0] > 0.0
}

fn plot_range(_p: &[Real]) -> (Real, Real) {
    (0.0, 25.0)
}

fn mean(p: &[Real]) -> Option<Real> {
    Poisson::new(p[0]).mean()
}

fn variance(p: &[Real]) -> Option<Real> {
    Poisson::new(p[0]).variance()
}

/// The rate parametrization.
pub fn rate() -> Parametrization {
    Parametrization {
        name: "rate",
        params: vec![LAMBDA],
        density_fn: density,
        cdf_fn: cdf,
        density_display: "\\frac{\\lambda^x}{x!} \\exp\\left\\{-\\lambda\\right\\}",
        support: (0.0, Real::INFINITY),
        support_display: "[0,\\infty)",
        plot_range_fn: plot_range,
        validity_fn: validity,
        conjugate_prior: Some("gamma"),
        quantities: vec![
            DerivedQuantity {
                quantity: Quantity::Mean,
                display: "\\lambda",
                eval: mean,
            },
            DerivedQuantity {
                quantity: Quantity::Variance,
                display: "\\lambda",
                eval: variance,
            },
        ],
        note: None,
    }
}

/// The catalog entry for the Poisson family.
pub fn definition() -> DistributionDef {
    DistributionDef {
        family: Family::Poisson,
        label: "Poisson",
        parametrizations: vec![rate()],
        note: "The Poisson distribution describes the number of events occurring in a fixed \
               interval of time or space, given a constant average rate of occurrence. It is \
               used to model rare events such as radioactive decay, traffic accidents, and \
               system failures. The distribution is skewed and becomes more symmetric as the \
               rate increases.",
        reference: Reference {
            name: "Wikipedia",
            link: "https://en.wikipedia.org/wiki/Poisson_distribution",
        },
    }
}
