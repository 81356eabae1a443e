//! # distviz
//!
//! The numerical core of an interactive probability-distribution
//! explorer: special-function approximations, pdf/cdf/summary-statistic
//! formula sets for ten distribution families, and the static catalog of
//! parametrization descriptors a UI layer consumes.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `dv-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! distviz = "0.1"
//! ```
//!
//! ```rust
//! use distviz::catalog::{Catalog, Family, Quantity};
//!
//! let normal = Catalog::instance().get(Family::Normal);
//! let p = normal.default_parametrization();
//!
//! let values = p.defaults();
//! assert!(p.is_valid(&values));
//! assert!((p.density(0.0, &values) - 0.3989).abs() < 1e-4);
//! assert_eq!(p.cdf(0.0, &values), 0.5);
//! assert_eq!(p.quantity(Quantity::Mean, &values), Some(0.0));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use dv_core as core;

/// Special functions and distribution formula sets.
pub use dv_math as math;

/// The parametrization data model and static catalog.
pub use dv_catalog as catalog;
