//! The static catalog of distribution definitions.

use std::sync::OnceLock;

use dv_core::{Error, Result, Size};

use crate::distribution::{DistributionDef, Family};
use crate::families;

/// Read-only collection of every distribution definition, in the fixed
/// catalog order of [`Family::ALL`].
///
/// Built once and never mutated; "current parameter values" is transient
/// UI state owned by the consumer, not by the catalog.
pub struct Catalog {
    distributions: Vec<DistributionDef>,
}

static INSTANCE: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// Build the catalog from the static family definitions.
    pub fn new() -> Self {
        Self {
            distributions: vec![
                families::normal::definition(),
                families::gamma::definition(),
                families::student_t::definition(),
                families::chi_squared::definition(),
                families::beta::definition(),
                families::log_normal::definition(),
                families::weibull::definition(),
                families::binomial::definition(),
                families::poisson::definition(),
                families::negative_binomial::definition(),
            ],
        }
    }

    /// The process-wide catalog, built on first use.
    pub fn instance() -> &'static Catalog {
        INSTANCE.get_or_init(Catalog::new)
    }

    /// Every distribution, in catalog order.
    pub fn all(&self) -> &[DistributionDef] {
        &self.distributions
    }

    /// The definition for `family`.
    ///
    /// Construction order matches [`Family::ALL`], so this is a direct
    /// index.
    pub fn get(&self, family: Family) -> &DistributionDef {
        &self.distributions[family as usize]
    }

    /// Look up a distribution by its catalog name.
    pub fn get_by_name(&self, name: &str) -> Result<&DistributionDef> {
        self.distributions
            .iter()
            .find(|d| d.name() == name)
            .ok_or_else(|| Error::UnknownDistribution(name.to_string()))
    }

    /// Number of distributions.
    pub fn len(&self) -> Size {
        self.distributions.len()
    }

    /// True if the catalog holds no distributions.
    pub fn is_empty(&self) -> bool {
        self.distributions.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
