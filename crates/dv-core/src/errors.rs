//! Error types for distviz-rs.
//!
//! Only *lookups* fail in this library: asking the catalog for a
//! distribution, parametrization, or derived quantity that does not exist.
//! Numeric evaluation never errors – out-of-support points evaluate to 0,
//! undefined summary statistics to `None`, and arithmetic edge cases follow
//! IEEE-754 (NaN/∞) so that plotting loops stay free of control flow.

use thiserror::Error;

/// The top-level error type used throughout distviz-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// No distribution with the given name exists in the catalog.
    #[error("unknown distribution: {0}")]
    UnknownDistribution(String),

    /// The distribution has no parametrization with the given name.
    #[error("unknown parametrization: {0}")]
    UnknownParametrization(String),

    /// No derived quantity with the given name exists.
    #[error("unknown quantity: {0}")]
    UnknownQuantity(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout distviz-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use dv_core::{ensure, errors::Error};
/// fn positive(x: f64) -> dv_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use dv_core::{fail, errors::Error};
/// fn always_err() -> dv_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
