//! Three-parameter Weibull distribution definitions.

use dv_core::Real;
use dv_math::distributions::{Distribution, Weibull};

use crate::distribution::{DistributionDef, Family, Reference};
use crate::parameter::{Parameter, ValueKind};
use crate::parametrization::{DerivedQuantity, Parametrization, Quantity};

/// Shift parameter x₀.
pub static SHIFT: Parameter = Parameter {
    name: "x0",
    label: "x_0",
    legal_range: (Real::NEG_INFINITY, Real::INFINITY),
    interactive_range: (-3.0, 5.0),
    log_scale: false,
    default_value: 0.0,
    value_kind: ValueKind::Continuous,
    conjugate_prior: None,
    description: "shift",
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

fn density(x: Real, p: &[Real]) -> Real {
    Weibull::new(p[0], p[1], p[2]).pdf(x)
}

fn cdf(x: Real, p: &[Real]) -> Real {
    Weibull::new(p[0], p[1], p[2]).cdf(x)
}

fn validity(p: &[Real]) -> bool {
    p[1] > 0.0 && p[2] > 0.0
}

fn plot_range(p: &[Real]) -> (Real, Real) {
    (p[0], p[0] + 10.0)
}

fn mean(p: &[Real]) -> Option<Real> {
    Weibull::new(p[0], p[1], p[2]).mean()
}

fn variance(p: &[Real]) -> Option<Real> {
    Weibull::new(p[0], p[1], p[2]).variance()
}

fn median(p: &[Real]) -> Option<Real> {
    Weibull::new(p[0], p[1], p[2]).median()
}

fn mode(p: &[Real]) -> Option<Real> {
    Weibull::new(p[0], p[1], p[2]).mode()
}

/// The shift/scale/shape parametrization.
pub fn shift_scale_shape() -> Parametrization {
    Parametrization {
        name: "shift/scale/shape",
        params: vec![SHIFT, SCALE, SHAPE],
        density_fn: density,
        cdf_fn: cdf,
        density_display: "\\frac{k}{s}\\left(\\frac{x-x_0}{s}\\right)^{k-1} \\exp\\left\\{-\\left(\\frac{x-x_0}{s}\\right)^k\\right\\}",
        support: (0.0, Real::INFINITY),
        support_display: "(x_0,\\infty)",
        plot_range_fn: plot_range,
        validity_fn: validity,
        conjugate_prior: None,
        quantities: vec![
            DerivedQuantity {
                quantity: Quantity::Mean,
                display: "x_0 + s\\Gamma\\left(1+\\frac{1}{k}\\right)",
                eval: mean,
            },
            DerivedQuantity {
                quantity: Quantity::Variance,
                display: "s^2\\Gamma\\left(1+\\frac{2}{k}\\right) - \\left(x_0 + s\\Gamma\\left(1+\\frac{1}{k}\\right)\\right)^2",
                eval: variance,
            },
            DerivedQuantity {
                quantity: Quantity::Mode,
                display: "s\\left(\\frac{k-1}{k}\\right)^{\\frac{1}{k}}, k > 1",
                eval: mode,
            },
            DerivedQuantity {
                quantity: Quantity::Median,
                display: "s\\left(\\log(2)\\right)^{\\frac{1}{k}}",
                eval: median,
            },
        ],
        note: None,
    }
}

/// The catalog entry for the Weibull family.
pub fn definition() -> DistributionDef {
    DistributionDef {
        family: Family::Weibull,
        label: "three-parameter Weibull",
        parametrizations: vec![shift_scale_shape()],
        note: "The Weibull distribution is widely used in reliability engineering and survival \
               analysis. It can model various failure rates and is flexible enough to \
               approximate many other distributions. The three-parameter version includes a \
               location parameter, making it suitable for modeling data that cannot start at \
               zero.",
        reference: Reference {
            name: "Wikipedia",
            link: "https://en.wikipedia.org/wiki/Weibull_distribution",
        },
    }
}
