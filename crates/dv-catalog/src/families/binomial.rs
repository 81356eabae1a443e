//! Binomial distribution definitions.

use dv_core::Real;
use dv_math::comparison::is_integer;
use dv_math::distributions::{Binomial, Distribution};

use crate::distribution::{DistributionDef, Family, Reference};
use crate::parameter::{Parameter, ValueKind};
use crate::parametrization::{DerivedQuantity, Parametrization, Quantity};

/// Number of trials N.
pub static N: Parameter = Parameter {
    name: "N",
    label: "N",
    legal_range: (0.0, Real::INFINITY),
    interactive_range: (1.0, 100.0),
    log_scale: false,
    default_value: 20.0,
    value_kind: ValueKind::Discrete,
    conjugate_prior: None,
    description: "sample size",
};

/// Success probability p.
pub static P: Parameter = Parameter {
    name: "p",
    label: "p",
    legal_range: (0.0, 1.0),
    interactive_range: (0.0, 1.0),
    log_scale: false,
    default_value: 0.5,
    value_kind: ValueKind::Continuous,
    conjugate_prior: Some("beta"),
    description: "probability of success",
};

fn density(x: Real, p: &[Real]) -> Real {
    Binomial::new(p[0], p[1]).pdf(x)
}

fn cdf(x: Real, p: &[Real]) -> Real {
    Binomial::new(p[0], p[1]).cdf(x)
}

fn validity(p: &[Real]) -> bool {
    p[0] > 0.0 && is_integer(p[0]) && p[1] > 0.0 && p[1] < 1.0
}

fn plot_range(p: &[Real]) -> (Real, Real) {
    (0.0, p[0])
}

fn mean(p: &[Real]) -> Option<Real> {
    Binomial::new(p[0], p[1]).mean()
}

fn variance(p: &[Real]) -> Option<Real> {
    Binomial::new(p[0], p[1]).variance()
}

/// The N/p parametrization.
pub fn probability() -> Parametrization {
    Parametrization {
        name: "probability",
        params: vec![N, P],
        density_fn: density,
        cdf_fn: cdf,
        density_display: "\\binom{N}{x} p^x (1-p)^{N-x}",
        support: (0.0, Real::INFINITY),
        support_display: "[0,N]",
        plot_range_fn: plot_range,
        validity_fn: validity,
        conjugate_prior: Some("beta"),
        quantities: vec![
            DerivedQuantity {
                quantity: Quantity::Mean,
                display: "Np",
                eval: mean,
            },
            DerivedQuantity {
                quantity: Quantity::Variance,
                display: "Np(1-p)",
                eval: variance,
            },
        ],
        note: None,
    }
}

/// The catalog entry for the binomial family.
pub fn definition() -> DistributionDef {
    DistributionDef {
        family: Family::Binomial,
        label: "Binomial",
        parametrizations: vec![probability()],
        note: "The binomial distribution describes the number of successes in a fixed number of \
               independent Bernoulli trials, each with the same probability of success. It is \
               fundamental in probability theory and statistics, used in quality control, survey \
               sampling, and many other applications involving counting successes.",
        reference: Reference {
            name: "Wikipedia",
            link: "https://en.wikipedia.org/wiki/Binomial_distribution",
        },
    }
}
