//! Static definitions of the ten distribution families.
//!
//! One module per family, each exporting its parameter constants and a
//! `definition()` constructor wiring the formula set from `dv-math` into a
//! [`crate::DistributionDef`]. All metadata (slider ranges, log-scale
//! flags, defaults, conjugate-prior cross-references, notes, reference
//! links) is fixed at compile time.

pub mod beta;
pub mod binomial;
pub mod chi_squared;
pub mod gamma;
pub mod log_normal;
pub mod negative_binomial;
pub mod normal;
pub mod poisson;
pub mod student_t;
pub mod weibull;
