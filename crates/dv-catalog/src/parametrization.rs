//! Parametrization descriptors: one coordinate system for a family.
//!
//! A [`Parametrization`] closes its callables over the family's formula
//! set (and any reparametrization, e.g. σ = √σ² for the normal's
//! mean/variance coordinates). The checked evaluation methods assert the
//! parameter-vector arity, the engine's only fatal condition; every
//! numeric irregularity stays in-band (0, `None`, or IEEE NaN/∞).

use std::fmt;
use std::str::FromStr;

use dv_core::{Error, Real, Size};

use crate::parameter::Parameter;

/// Signature of the density / cdf callables: `(x, parameter values)`.
pub type EvalFn = fn(Real, &[Real]) -> Real;

/// Signature of validity predicates over a parameter vector.
pub type PredicateFn = fn(&[Real]) -> bool;

/// Signature of plot-range heuristics: parameter values to a finite
/// `(low, high)` window around the distribution's mass.
pub type RangeFn = fn(&[Real]) -> (Real, Real);

/// Signature of derived-quantity evaluators; `None` means the quantity is
/// mathematically undefined at the given parameter values.
pub type QuantityFn = fn(&[Real]) -> Option<Real>;

/// Names of the summary statistics a family may define.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    /// Expected value.
    Mean,
    /// Second central moment.
    Variance,
    /// 50th percentile.
    Median,
    /// Density maximizer.
    Mode,
}

impl Quantity {
    /// All quantities, in display order.
    pub const ALL: [Quantity; 4] = [
        Quantity::Mean,
        Quantity::Variance,
        Quantity::Median,
        Quantity::Mode,
    ];

    /// Lower-case name used for lookups.
    pub fn name(&self) -> &'static str {
        match self {
            Quantity::Mean => "mean",
            Quantity::Variance => "variance",
            Quantity::Median => "median",
            Quantity::Mode => "mode",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Quantity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mean" => Ok(Quantity::Mean),
            "variance" => Ok(Quantity::Variance),
            "median" => Ok(Quantity::Median),
            "mode" => Ok(Quantity::Mode),
            _ => Err(Error::UnknownQuantity(s.to_string())),
        }
    }
}

/// A summary statistic with a closed form (or documented approximation)
/// under one parametrization.
#[derive(Debug, Clone, Copy)]
pub struct DerivedQuantity {
    /// Which statistic this is.
    pub quantity: Quantity,
    /// LaTeX form of the closed-form expression, including any condition
    /// under which it holds (e.g. `\mu, \nu>1`).
    pub display: &'static str,
    /// Evaluate at a parameter vector; `None` where undefined.
    pub eval: QuantityFn,
}

/// One coordinate system for a distribution family.
///
/// A family may expose several (the normal by mean/standard-deviation or
/// mean/variance); each binds the ordered parameter list, the evaluation
/// callables, and the derived quantities defined in these coordinates.
#[derive(Debug, Clone)]
pub struct Parametrization {
    /// Parametrization name (e.g. "shape/scale").
    pub name: &'static str,
    /// Ordered parameter list; callables take values in this order.
    pub params: Vec<Parameter>,
    /// Density (or mass) callable.
    pub density_fn: EvalFn,
    /// Cumulative-distribution callable.
    pub cdf_fn: EvalFn,
    /// LaTeX form of the density formula.
    pub density_display: &'static str,
    /// Support interval; for the shifted Weibull this is the unshifted
    /// (x₀ = 0) support, the shifted form being carried in
    /// `support_display`.
    pub support: (Real, Real),
    /// LaTeX form of the support.
    pub support_display: &'static str,
    /// Plot-window heuristic.
    pub plot_range_fn: RangeFn,
    /// True iff a parameter vector is mathematically admissible.
    pub validity_fn: PredicateFn,
    /// Conjugate-prior family for this parametrization, informational.
    pub conjugate_prior: Option<&'static str>,
    /// The summary statistics defined in these coordinates.
    pub quantities: Vec<DerivedQuantity>,
    /// Free-form remark shown alongside the definition.
    pub note: Option<&'static str>,
}

impl Parametrization {
    /// Number of parameters; callables expect exactly this many values.
    pub fn arity(&self) -> Size {
        self.params.len()
    }

    /// Default parameter vector, in declared order.
    pub fn defaults(&self) -> Vec<Real> {
        self.params.iter().map(|p| p.default_value).collect()
    }

    fn check_arity(&self, values: &[Real]) {
        assert_eq!(
            values.len(),
            self.params.len(),
            "parameter vector for '{}' has arity {}, expected {}",
            self.name,
            values.len(),
            self.params.len()
        );
    }

    /// Density (or mass) at `x`; exactly 0 outside the support.
    pub fn density(&self, x: Real, values: &[Real]) -> Real {
        self.check_arity(values);
        (self.density_fn)(x, values)
    }

    /// Cumulative probability P(X ≤ x).
    pub fn cdf(&self, x: Real, values: &[Real]) -> Real {
        self.check_arity(values);
        (self.cdf_fn)(x, values)
    }

    /// True iff `values` is mathematically admissible. Evaluation is not
    /// gated on this; feeding an invalid vector to [`Self::density`] or
    /// [`Self::cdf`] gives unspecified (possibly NaN) results.
    pub fn is_valid(&self, values: &[Real]) -> bool {
        self.check_arity(values);
        (self.validity_fn)(values)
    }

    /// Finite `(low, high)` window to sample for plotting.
    pub fn plot_range(&self, values: &[Real]) -> (Real, Real) {
        self.check_arity(values);
        (self.plot_range_fn)(values)
    }

    /// The descriptor for `quantity`, if these coordinates define it at
    /// all; lets callers distinguish "family has no such closed form" from
    /// "undefined at these parameter values".
    pub fn derived(&self, quantity: Quantity) -> Option<&DerivedQuantity> {
        self.quantities.iter().find(|q| q.quantity == quantity)
    }

    /// Evaluate `quantity` at a parameter vector. `None` both when the
    /// family defines no such closed form and when the closed form is
    /// undefined at these values.
    pub fn quantity(&self, quantity: Quantity, values: &[Real]) -> Option<Real> {
        self.check_arity(values);
        (self.derived(quantity)?.eval)(values)
    }
}
