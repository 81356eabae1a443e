//! Student's t-distribution (location/scale parametrization).

use dv_core::Real;
use std::f64::consts::PI;

use super::Distribution;
use crate::special::{gamma, standard_normal_cdf};

/// Student's t-distribution with `df` degrees of freedom, location `mu`,
/// and scale `sigma`.
#[derive(Debug, Clone, Copy)]
pub struct StudentT {
    df: Real,
    location: Real,
    scale: Real,
}

impl StudentT {
    /// Create a Student-t distribution (`df > 0`, `sigma > 0`; not
    /// re-checked here).
    pub fn new(df: Real, location: Real, scale: Real) -> Self {
        Self {
            df,
            location,
            scale,
        }
    }

    /// Degrees of freedom ν.
    pub fn df(&self) -> Real {
        self.df
    }

    /// Location parameter μ.
    pub fn location(&self) -> Real {
        self.location
    }

    /// Scale parameter σ.
    pub fn scale(&self) -> Real {
        self.scale
    }
}

impl Distribution for StudentT {
    fn pdf(&self, x: Real) -> Real {
        let z = (x - self.location) / self.scale;
        let numerator = gamma((self.df + 1.0) / 2.0);
        let denominator = (PI * self.df).sqrt() * gamma(self.df / 2.0) * self.scale;
        (numerator / denominator) * (1.0 + z * z / self.df).powf(-(self.df + 1.0) / 2.0)
    }

    /// Approximate CDF: the normal limit for ν > 30, otherwise
    /// `½ + atan(z/√ν)/π`. Neither branch is the exact Student-t CDF;
    /// displayed statistics rely on this approximation as-is.
    fn cdf(&self, x: Real) -> Real {
        let z = (x - self.location) / self.scale;
        if self.df > 30.0 {
            return standard_normal_cdf(z);
        }
        0.5 + (z / self.df.sqrt()).atan() / PI
    }

    fn mean(&self) -> Option<Real> {
        if self.df > 1.0 {
            Some(self.location)
        } else {
            None
        }
    }

    fn variance(&self) -> Option<Real> {
        if self.df > 2.0 {
            Some(self.df / (self.df - 2.0) * self.scale * self.scale)
        } else {
            None
        }
    }

    fn median(&self) -> Option<Real> {
        Some(self.location)
    }

    fn mode(&self) -> Option<Real> {
        Some(self.location)
    }
}
