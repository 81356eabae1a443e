//! Special-function approximations.
//!
//! The numerical foundation of the engine: gamma and beta functions, the
//! regularized lower incomplete gamma, an incomplete-beta approximation,
//! the error function, and the combinatorial helpers. All functions are
//! pure, never panic, and represent out-of-domain inputs in-band (NaN/∞
//! per IEEE-754) so that curve-evaluation loops stay branch-free.
//!
//! Two of these are intentionally coarse and must not be replaced with
//! rigorous implementations without flagging the change, since displayed
//! statistics depend on their exact output: see [`incomplete_beta`] and
//! the series cutoff in [`lower_gamma_series`].

use dv_core::Real;
use std::f64::consts::{PI, SQRT_2};

/// Lanczos coefficients for `g = 7`.
const LANCZOS_G: usize = 7;
#[allow(clippy::excessive_precision)]
const LANCZOS_C: [f64; 9] = [
    0.99999999999980993,
    676.5203681218851,
    -1259.1392167224028,
    771.32342877765313,
    -176.61502916214059,
    12.507343278686905,
    -0.13857109526572012,
    9.9843695780195716e-6,
    1.5056327351493116e-7,
];

/// The gamma function Γ(z).
///
/// For `z < 0.5` applies the reflection identity
/// `Γ(z) = π / (sin(πz)·Γ(1−z))` (the recursive call always has argument
/// ≥ 0.5); otherwise evaluates the fixed 9-term Lanczos series.
/// Reproduces `Γ(n) = (n−1)!` for positive integers to better than 1e-6
/// relative error and diverges to ±∞ at zero and the negative integers.
pub fn gamma(z: Real) -> Real {
    if z < 0.5 {
        return PI / ((PI * z).sin() * gamma(1.0 - z));
    }

    let z = z - 1.0;
    let mut x = LANCZOS_C[0];
    for (i, &c) in LANCZOS_C.iter().enumerate().skip(1) {
        x += c / (z + i as Real);
    }
    let t = z + LANCZOS_G as Real + 0.5;
    (2.0 * PI).sqrt() * t.powf(z + 0.5) * (-t).exp() * x
}

/// The beta function `B(a, b) = Γ(a)Γ(b)/Γ(a+b)`, defined for `a, b > 0`.
pub fn beta(a: Real, b: Real) -> Real {
    gamma(a) * gamma(b) / gamma(a + b)
}

/// The regularized lower incomplete gamma function `P(shape, t)`.
///
/// Power-series expansion `Σ tⁱ/(shape·(shape+1)⋯(shape+i))`, truncated
/// once a term falls below 1e-10 or after 100 terms, then scaled by
/// `exp(−t)·t^shape/Γ(shape)`. Valid for moderate `t`: the fixed term cap
/// means accuracy degrades once `t` approaches the cap, and there is
/// deliberately no switch to a continued-fraction expansion in that
/// regime.
pub fn lower_gamma_series(shape: Real, t: Real) -> Real {
    if t <= 0.0 {
        return 0.0;
    }
    let mut term = 1.0 / shape;
    let mut sum = term;
    for i in 0..100 {
        term *= t / (shape + 1.0 + i as Real);
        sum += term;
        if term < 1e-10 {
            break;
        }
    }
    sum * (-t).exp() * t.powf(shape) / gamma(shape)
}

/// Incomplete-beta approximation `x^a·(1−x)^b / B(a,b)`.
///
/// This is **not** the regularized incomplete beta function: it is exact at
/// `x ∈ {0, 1}`, close to the true CDF near the distribution's mode, and
/// degrades away from it. The beta-family CDF is defined in terms of this
/// approximation and displayed statistics depend on its output, so it must
/// be preserved as-is; substituting a continued-fraction implementation is
/// a behavior change, not a bug fix.
pub fn incomplete_beta(x: Real, a: Real, b: Real) -> Real {
    if x == 0.0 {
        return 0.0;
    }
    if x == 1.0 {
        return 1.0;
    }
    x.powf(a) * (1.0 - x).powf(b) / beta(a, b)
}

/// The error function erf(x).
///
/// Abramowitz & Stegun 7.1.28 five-constant polynomial approximation;
/// maximum absolute error ≈ 1.5e-7.
pub fn erf(x: Real) -> Real {
    const A1: f64 = 0.254829592;
    const A2: f64 = -0.284496736;
    const A3: f64 = 1.421413741;
    const A4: f64 = -1.453152027;
    const A5: f64 = 1.061405429;
    const P: f64 = 0.3275911;

    let sign = if x >= 0.0 { 1.0 } else { -1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + P * x);
    let y = 1.0 - (((((A5 * t + A4) * t) + A3) * t + A2) * t + A1) * t * (-x * x).exp();

    sign * y
}

/// The standard normal cumulative distribution function
/// `Φ(x) = ½(1 + erf(x/√2))`.
///
/// Special-cases `x == 0` so symmetry holds exactly.
pub fn standard_normal_cdf(x: Real) -> Real {
    if x == 0.0 {
        return 0.5;
    }
    0.5 * (1.0 + erf(x / SQRT_2))
}

/// The standard normal probability density `φ(x) = exp(−x²/2)/√(2π)`.
#[inline]
pub fn standard_normal_pdf(x: Real) -> Real {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// `n!` by iterative product; `n ≤ 1` gives 1.
///
/// Returns ∞ once the product exceeds the `f64` range (n > 170).
pub fn factorial(n: u64) -> Real {
    if n <= 1 {
        return 1.0;
    }
    let mut result = 1.0;
    for i in 2..=n {
        result *= i as Real;
    }
    result
}

/// The binomial coefficient `C(n, k)` via the factorial ratio.
///
/// Returns 0 when `k > n` and 1 when `k ∈ {0, n}`.
pub fn binomial_coefficient(n: u64, k: u64) -> Real {
    if k > n {
        return 0.0;
    }
    if k == 0 || k == n {
        return 1.0;
    }
    factorial(n) / (factorial(k) * factorial(n - k))
}
