//! # dv-core
//!
//! Core types and error definitions for distviz-rs.
//!
//! This crate provides the foundational building blocks shared across the
//! other crates in the workspace – numeric type aliases and the error
//! type used by the catalog's fallible lookups.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Alias used for array sizes / indices.
pub type Size = usize;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
