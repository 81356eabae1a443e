//! Distribution descriptors: identity grouping the parametrizations that
//! describe one family in different coordinates.

use std::fmt;

use dv_core::{Error, Result};

use crate::parameter::ValueKind;
use crate::parametrization::Parametrization;

/// The closed set of distribution families in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Normal/Gaussian.
    Normal,
    /// Gamma.
    Gamma,
    /// Student's t.
    StudentT,
    /// Scaled chi-squared.
    ChiSquared,
    /// Beta.
    Beta,
    /// Log-normal.
    LogNormal,
    /// Three-parameter Weibull.
    Weibull,
    /// Binomial.
    Binomial,
    /// Poisson.
    Poisson,
    /// Negative binomial.
    NegativeBinomial,
}

impl Family {
    /// All families, in catalog order.
    pub const ALL: [Family; 10] = [
        Family::Normal,
        Family::Gamma,
        Family::StudentT,
        Family::ChiSquared,
        Family::Beta,
        Family::LogNormal,
        Family::Weibull,
        Family::Binomial,
        Family::Poisson,
        Family::NegativeBinomial,
    ];

    /// Catalog identifier.
    pub fn name(&self) -> &'static str {
        match self {
            Family::Normal => "normal",
            Family::Gamma => "gamma",
            Family::StudentT => "studentt",
            Family::ChiSquared => "chisquare",
            Family::Beta => "beta",
            Family::LogNormal => "lognormal",
            Family::Weibull => "weibull",
            Family::Binomial => "binomial",
            Family::Poisson => "poisson",
            Family::NegativeBinomial => "negativebinomial",
        }
    }

    /// Integer or real valued; constant across the family's
    /// parametrizations, governing the downstream sampling strategy.
    pub fn value_kind(&self) -> ValueKind {
        match self {
            Family::Binomial | Family::Poisson | Family::NegativeBinomial => ValueKind::Discrete,
            _ => ValueKind::Continuous,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// External reference for a family (informational).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    /// Source name (e.g. "Wikipedia").
    pub name: &'static str,
    /// URL.
    pub link: &'static str,
}

/// Identity descriptor grouping one-to-many parametrizations of the same
/// underlying family.
#[derive(Debug, Clone)]
pub struct DistributionDef {
    /// Which family this is.
    pub family: Family,
    /// Display label (e.g. "Normal/Gaussian").
    pub label: &'static str,
    /// The family's coordinate systems; the first is the default.
    pub parametrizations: Vec<Parametrization>,
    /// Descriptive prose shown alongside the plot.
    pub note: &'static str,
    /// External reference link.
    pub reference: Reference,
}

impl DistributionDef {
    /// Catalog identifier, delegating to the family.
    pub fn name(&self) -> &'static str {
        self.family.name()
    }

    /// Integer or real valued. Lives on the family so parametrizations
    /// cannot disagree with their distribution by construction.
    pub fn value_kind(&self) -> ValueKind {
        self.family.value_kind()
    }

    /// The parametrization shown when the distribution is first selected.
    pub fn default_parametrization(&self) -> &Parametrization {
        &self.parametrizations[0]
    }

    /// Look up a parametrization by name.
    pub fn parametrization(&self, name: &str) -> Result<&Parametrization> {
        self.parametrizations
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| Error::UnknownParametrization(name.to_string()))
    }
}
