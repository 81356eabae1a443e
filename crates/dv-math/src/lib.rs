//! # dv-math
//!
//! The numerical engine of distviz-rs: special-function approximations and
//! the per-family probability distribution function sets built on them,
//! plus the sampling and comparison utilities used when evaluating curves.
//!
//! Every function here is pure and synchronous: no shared state, no I/O,
//! and bounded loop counts, so callers may evaluate curves point-by-point
//! in tight loops or in parallel without coordination.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Floating-point comparison utilities.
pub mod comparison;

/// Probability distribution function sets.
pub mod distributions;

/// Decimal rounding for displayed statistics.
pub mod rounding;

/// Evaluation-grid helpers for curve sampling.
pub mod sampling;

/// Special-function approximations.
pub mod special;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use comparison::{close, is_integer};
pub use special::{standard_normal_cdf, standard_normal_pdf};
