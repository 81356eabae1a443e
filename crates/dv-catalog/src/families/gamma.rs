//! Gamma distribution definitions.

use dv_core::Real;
use dv_math::distributions::{Distribution, Gamma};

use crate::distribution::{DistributionDef, Family, Reference};
use crate::parameter::{Parameter, ValueKind};
use crate::parametrization::{DerivedQuantity, Parametrization, Quantity};

/// Shape parameter k.
pub static SHAPE: Parameter = Parameter {
    name: "k",
    label: "k",
    legal_range: (0.0, Real::INFINITY),
    interactive_range: (0.1, 10.0),
    log_scale: true,
    default_value: 1.0,
    value_kind: ValueKind::Continuous,
    conjugate_prior: None,
    description: "shape",
};

/// Scale parameter s.
pub static SCALE: Parameter = Parameter {
    name: "s",
    label: "s",
    legal_range: (0.0, Real::INFINITY),
    interactive_range: (0.1, 10.0),
    log_scale: true,
    default_value: 1.0,
    value_kind: ValueKind::Continuous,
    conjugate_prior: Some("inversegamma"),
    description: "scale",
};

fn density(x: Real, p: &[Real]) -> Real {
    Gamma::new(p[0], p[1]).pdf(x)
}

fn cdf(x: Real, p: &[Real]) -> Real {
    Gamma::new(p[0], p[1]).cdf(x)
}

fn validity(p: &[Real]) -> bool {
    p[0] > 0.0 && p[1] > 0.0
}

/// Mean plus four standard deviations, starting just off the origin pole.
fn plot_range(p: &[Real]) -> (Real, Real) {
    let (k, s) = (p[0], p[1]);
    (0.01, k * s + 4.0 * (k * s * s).sqrt())
}

fn mean(p: &[Real]) -> Option<Real> {
    Gamma::new(p[0], p[1]).mean()
}

fn variance(p: &[Real]) -> Option<Real> {
    Gamma::new(p[0], p[1]).variance()
}

fn mode(p: &[Real]) -> Option<Real> {
    Gamma::new(p[0], p[1]).mode()
}

/// The shape/scale parametrization.
pub fn shape_scale() -> Parametrization {
    Parametrization {
        name: "shape/scale",
        params: vec![SHAPE, SCALE],
        density_fn: density,
        cdf_fn: cdf,
        density_display: "\\frac{1}{\\Gamma(k)s^{k}} x^{k - 1} \\exp\\left\\{-\\frac{x}{s}\\right\\}",
        support: (0.0, Real::INFINITY),
        support_display: "(0,\\infty)",
        plot_range_fn: plot_range,
        validity_fn: validity,
        conjugate_prior: None,
        quantities: vec![
            DerivedQuantity {
                quantity: Quantity::Mean,
                display: "ks",
                eval: mean,
            },
            DerivedQuantity {
                quantity: Quantity::Variance,
                display: "ks^2",
                eval: variance,
            },
            DerivedQuantity {
                quantity: Quantity::Mode,
                display: "(k-1)s, k\\geq 1",
                eval: mode,
            },
        ],
        note: None,
    }
}

/// The catalog entry for the gamma family.
pub fn definition() -> DistributionDef {
    DistributionDef {
        family: Family::Gamma,
        label: "Gamma",
        parametrizations: vec![shape_scale()],
        note: "The gamma distribution is a two-parameter family of continuous probability \
               distributions. It is commonly used to model waiting times, life spans, and other \
               positive random variables. The distribution is skewed and becomes more symmetric \
               as the shape parameter increases. It generalizes the exponential distribution and \
               is conjugate to many other distributions.",
        reference: Reference {
            name: "Wikipedia",
            link: "https://en.wikipedia.org/wiki/Gamma_distribution",
        },
    }
}
