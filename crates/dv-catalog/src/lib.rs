//! # dv-catalog
//!
//! The parametrization data model and static catalog of distviz-rs: ten
//! distribution families, each binding its ordered parameter list (with
//! slider metadata), density/cdf callables, validity predicate, plot-range
//! heuristic, and derived summary statistics into one queryable unit.
//!
//! All entities are immutable, built once at first use, and held for the
//! process lifetime; the UI layer enumerates [`Catalog::instance`] and
//! evaluates through [`Parametrization`]'s checked methods.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// The static catalog singleton.
pub mod catalog;

/// Distribution identity descriptors.
pub mod distribution;

/// Static definitions of the ten distribution families.
pub mod families;

/// Parameter metadata.
pub mod parameter;

/// Parametrization descriptors and derived quantities.
pub mod parametrization;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use catalog::Catalog;
pub use distribution::{DistributionDef, Family, Reference};
pub use parameter::{Parameter, ValueKind};
pub use parametrization::{DerivedQuantity, Parametrization, Quantity};
