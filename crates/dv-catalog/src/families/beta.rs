//! Beta distribution definitions.

use dv_core::Real;
use dv_math::distributions::{Beta, Distribution};

use crate::distribution::{DistributionDef, Family, Reference};
use crate::parameter::{Parameter, ValueKind};
use crate::parametrization::{DerivedQuantity, Parametrization, Quantity};

/// Shape parameter a.
pub static A: Parameter = Parameter {
    name: "a",
    label: "a",
    legal_range: (0.0, Real::INFINITY),
    interactive_range: (0.1, 10.0),
    log_scale: true,
    default_value: 1.0,
    value_kind: ValueKind::Continuous,
    conjugate_prior: None,
    description: "shape",
};

/// Shape parameter b.
pub static B: Parameter = Parameter {
    name: "b",
    label: "b",
    legal_range: (0.0, Real::INFINITY),
    interactive_range: (0.1, 10.0),
    log_scale: true,
    default_value: 1.0,
    value_kind: ValueKind::Continuous,
    conjugate_prior: None,
    description: "shape",
};

fn density(x: Real, p: &[Real]) -> Real {
    Beta::new(p[0], p[1]).pdf(x)
}

fn cdf(x: Real, p: &[Real]) -> Real {
    Beta::new(p[0], p[1]).cdf(x)
}

fn validity(p: &[Real]) -> bool {
    p[0] > 0.0 && p[1] > 0.0
}

fn plot_range(_p: &[Real]) -> (Real, Real) {
    (0.0, 1.0)
}

fn mean(p: &[Real]) -> Option<Real> {
    Beta::new(p[0], p[1]).mean()
}

fn variance(p: &[Real]) -> Option<Real> {
    Beta::new(p[0], p[1]).variance()
}

fn median(p: &[Real]) -> Option<Real> {
    Beta::new(p[0], p[1]).median()
}

fn mode(p: &[Real]) -> Option<Real> {
    Beta::new(p[0], p[1]).mode()
}

/// The a/b parametrization.
pub fn a_b() -> Parametrization {
    Parametrization {
        name: "a/b",
        params: vec![A, B],
        density_fn: density,
        cdf_fn: cdf,
        density_display: "\\frac{1}{B(a,b)} x^{a-1} (1-x)^{b-1}",
        support: (0.0, 1.0),
        support_display: "(0,1)",
        plot_range_fn: plot_range,
        validity_fn: validity,
        conjugate_prior: None,
        quantities: vec![
            DerivedQuantity {
                quantity: Quantity::Mean,
                display: "\\frac{a}{a+b}",
                eval: mean,
            },
            DerivedQuantity {
                quantity: Quantity::Variance,
                display: "\\frac{ab}{(a+b)^2(a+b+1)}",
                eval: variance,
            },
            DerivedQuantity {
                quantity: Quantity::Median,
                display: "no closed form",
                eval: median,
            },
            DerivedQuantity {
                quantity: Quantity::Mode,
                display: "\\frac{a-1}{a+b-2}, a>1, b>1",
                eval: mode,
            },
        ],
        note: None,
    }
}

/// The catalog entry for the beta family.
pub fn definition() -> DistributionDef {
    DistributionDef {
        family: Family::Beta,
        label: "Beta",
        parametrizations: vec![a_b()],
        note: "The beta distribution is defined on the interval [0,1] and is often used to \
               model probabilities and proportions. It is conjugate to the binomial distribution \
               and is commonly used in Bayesian statistics. The distribution can take many \
               shapes depending on its parameters, from uniform to U-shaped to bell-shaped.",
        reference: Reference {
            name: "Wikipedia",
            link: "https://en.wikipedia.org/wiki/Beta_distribution",
        },
    }
}
