//! Normal/Gaussian distribution definitions.
//!
//! The one family with two parametrizations: mean/standard-deviation and
//! mean/variance. The latter computes σ = √σ² before delegating, so both
//! coordinate systems share the same formula set.

use dv_core::Real;
use dv_math::distributions::{Distribution, Normal};

use crate::distribution::{DistributionDef, Family, Reference};
use crate::parameter::{Parameter, ValueKind};
use crate::parametrization::{DerivedQuantity, Parametrization, Quantity};

/// Location parameter μ.
pub static MU: Parameter = Parameter {
    name: "mu",
    label: "\\mu",
    legal_range: (Real::NEG_INFINITY, Real::INFINITY),
    interactive_range: (-5.0, 5.0),
    log_scale: false,
    default_value: 0.0,
    value_kind: ValueKind::Continuous,
    conjugate_prior: Some("normal"),
    description: "location",
};

/// Standard deviation σ.
pub static SIGMA: Parameter = Parameter {
    name: "sigma",
    label: "\\sigma",
    legal_range: (0.0, Real::INFINITY),
    interactive_range: (0.1, 10.0),
    log_scale: true,
    default_value: 1.0,
    value_kind: ValueKind::Continuous,
    conjugate_prior: None,
    description: "standard deviation",
};

/// Variance σ².
pub static SIGMA2: Parameter = Parameter {
    name: "sigma2",
    label: "\\sigma^2",
    legal_range: (0.0, Real::INFINITY),
    interactive_range: (0.1, 10.0),
    log_scale: true,
    default_value: 1.0,
    value_kind: ValueKind::Continuous,
    conjugate_prior: Some("inversegamma"),
    description: "variance",
};

const DENSITY_DISPLAY: &str =
    "\\left(2\\pi\\sigma^2\\right)^{-\\frac{1}{2}}\\exp\\left\\{-\\frac{1}{2\\sigma^2}\\left(x-\\mu\\right)^2\\right\\}";

// mean/standard-deviation coordinates

fn sd_density(x: Real, p: &[Real]) -> Real {
    Normal::new(p[0], p[1]).pdf(x)
}

fn sd_cdf(x: Real, p: &[Real]) -> Real {
    Normal::new(p[0], p[1]).cdf(x)
}

fn sd_validity(p: &[Real]) -> bool {
    p[1] > 0.0
}

fn sd_plot_range(p: &[Real]) -> (Real, Real) {
    (p[0] - 4.0 * p[1], p[0] + 4.0 * p[1])
}

fn sd_mean(p: &[Real]) -> Option<Real> {
    Normal::new(p[0], p[1]).mean()
}

fn sd_variance(p: &[Real]) -> Option<Real> {
    Normal::new(p[0], p[1]).variance()
}

fn sd_median(p: &[Real]) -> Option<Real> {
    Normal::new(p[0], p[1]).median()
}

fn sd_mode(p: &[Real]) -> Option<Real> {
    Normal::new(p[0], p[1]).mode()
}

/// The mean/standard-deviation parametrization.
pub fn mean_standard_deviation() -> Parametrization {
    Parametrization {
        name: "mean/standard deviation",
        params: vec![MU, SIGMA],
        density_fn: sd_density,
        cdf_fn: sd_cdf,
        density_display: DENSITY_DISPLAY,
        support: (Real::NEG_INFINITY, Real::INFINITY),
        support_display: "(-\\infty,\\infty)",
        plot_range_fn: sd_plot_range,
        validity_fn: sd_validity,
        conjugate_prior: None,
        quantities: vec![
            DerivedQuantity {
                quantity: Quantity::Mean,
                display: "\\mu",
                eval: sd_mean,
            },
            DerivedQuantity {
                quantity: Quantity::Variance,
                display: "\\sigma^2",
                eval: sd_variance,
            },
            DerivedQuantity {
                quantity: Quantity::Median,
                display: "\\mu",
                eval: sd_median,
            },
            DerivedQuantity {
                quantity: Quantity::Mode,
                display: "\\mu",
                eval: sd_mode,
            },
        ],
        note: None,
    }
}

// mean/variance coordinates: σ = √σ², then delegate

fn var_density(x: Real, p: &[Real]) -> Real {
    Normal::new(p[0], p[1].sqrt()).pdf(x)
}

fn var_cdf(x: Real, p: &[Real]) -> Real {
    Normal::new(p[0], p[1].sqrt()).cdf(x)
}

fn var_validity(p: &[Real]) -> bool {
    p[1] > 0.0
}

fn var_plot_range(p: &[Real]) -> (Real, Real) {
    let sigma = p[1].sqrt();
    (p[0] - 4.0 * sigma, p[0] + 4.0 * sigma)
}

fn var_mean(p: &[Real]) -> Option<Real> {
    Normal::new(p[0], p[1].sqrt()).mean()
}

fn var_variance(p: &[Real]) -> Option<Real> {
    Normal::new(p[0], p[1].sqrt()).variance()
}

fn var_median(p: &[Real]) -> Option<Real> {
    Normal::new(p[0], p[1].sqrt()).median()
}

fn var_mode(p: &[Real]) -> Option<Real> {
    Normal::new(p[0], p[1].sqrt()).mode()
}

/// The mean/variance parametrization.
pub fn mean_variance() -> Parametrization {
    Parametrization {
        name: "mean/variance",
        params: vec![MU, SIGMA2],
        density_fn: var_density,
        cdf_fn: var_cdf,
        density_display: DENSITY_DISPLAY,
        support: (Real::NEG_INFINITY, Real::INFINITY),
        support_display: "(-\\infty,\\infty)",
        plot_range_fn: var_plot_range,
        validity_fn: var_validity,
        conjugate_prior: Some("normalinversegamma"),
        quantities: vec![
            DerivedQuantity {
                quantity: Quantity::Mean,
                display: "\\mu",
                eval: var_mean,
            },
            DerivedQuantity {
                quantity: Quantity::Variance,
                display: "\\sigma^2",
                eval: var_variance,
            },
            DerivedQuantity {
                quantity: Quantity::Median,
                display: "\\mu",
                eval: var_median,
            },
            DerivedQuantity {
                quantity: Quantity::Mode,
                display: "\\mu",
                eval: var_mode,
            },
        ],
        note: None,
    }
}

/// The catalog entry for the normal family.
pub fn definition() -> DistributionDef {
    DistributionDef {
        family: Family::Normal,
        label: "Normal/Gaussian",
        parametrizations: vec![mean_standard_deviation(), mean_variance()],
        note: "The normal distribution is the most important probability distribution in \
               statistics, describing many natural phenomena. It is symmetric, bell-shaped, and \
               characterized by its mean and standard deviation. The central limit theorem states \
               that the sum of many independent random variables tends toward a normal \
               distribution, making it fundamental in statistical inference.",
        reference: Reference {
            name: "Wikipedia",
            link: "https://en.wikipedia.org/wiki/Normal_distribution",
        },
    }
}
