//! Negative binomial distribution definitions.

use dv_core::Real;
use dv_math::comparison::is_integer;
use dv_math::distributions::{Distribution, NegativeBinomial};

use crate::distribution::{DistributionDef, Family, Reference};
use crate::parameter::{Parameter, ValueKind};
use crate::parametrization::{DerivedQuantity, Parametrization, Quantity};

/// Required number of successes r.
pub static R: Parameter = Parameter {
    name: "r",
    label: "r",
    legal_range: (0.0, Real::INFINITY),
    interactive_range: (1.0, 50.0),
    log_scale: false,
    default_value: 20.0,
    value_kind: ValueKind::Discrete,
    conjugate_prior: None,
    description: "number of successes required",
};

/// Probability parameter p.
pub static P: Parameter = Parameter {
    name: "p",
    label: "p",
    legal_range: (0.0, 1.0),
    interactive_range: (0.0, 1.0),
    log_scale: false,
    default_value: 0.2,
    value_kind: ValueKind::Continuous,
    conjugate_prior: Some("beta"),
    description: "probability of failure",
};

fn density(x: Real, p: &[Real]) -> Real {
    NegativeBinomial::new(p[0], p[1]).pdf(x)
}

fn cdf(x: Real, p: &[Real]) -> Real {
    NegativeBinomial::new(p[0], p[1]).cdf(x)
}

fn validity(p: &[Real]) -> bool {
    p[0] > 0.0 && is_integer(p[0]) && p[1] > 0.0 && p[1] < 1.0
}

fn plot_range(_p: &[Real]) -> (Real, Real) {
    (0.0, 50.0)
}

fn mean(p: &[Real]) -> Option<Real> {
    NegativeBinomial::new(p[0], p[1]).mean()
}

fn variance(p: &[Real]) -> Option<Real> {
    NegativeBinomial::new(p[0], p[1]).variance()
}

/// The r/p parametrization.
pub fn probability() -> Parametrization {
    Parametrization {
        name: "probability",
        params: vec![R, P],
        density_fn: density,
        cdf_fn: cdf,
        density_display: "\\binom{x+r-1}{x} p^x (1-p)^{r}",
        support: (0.0, Real::INFINITY),
        support_display: "[0,\\infty)",
        plot_range_fn: plot_range,
        validity_fn: validity,
        conjugate_prior: Some("beta"),
        quantities: vec![
            DerivedQuantity {
                quantity: Quantity::Mean,
                display: "\\frac{rp}{1-p}",
                eval: mean,
            },
            DerivedQuantity {
                quantity: Quantity::Variance,
                display: "\\frac{rp}{(1-p)^2}",
                eval: variance,
            },
        ],
        note: None,
    }
}

/// The catalog entry for the negative binomial family.
pub fn definition() -> DistributionDef {
    DistributionDef {
        family: Family::NegativeBinomial,
        label: "Negative binomial",
        parametrizations: vec![probability()],
        note: "The negative binomial distribution describes the number of failures before a \
               specified number of successes occurs in a sequence of independent Bernoulli \
               trials. It is more flexible than the Poisson distribution for modeling \
               overdispersed count data and is used in ecology, epidemiology, and insurance.",
        reference: Reference {
            name: "Wikipedia",
            link: "https://en.wikipedia.org/wiki/Negative_binomial_distribution",
        },
    }
}
