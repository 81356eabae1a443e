//! Parameter metadata for distribution parametrizations.

use dv_core::Real;

/// Whether values live on an integer grid or a dense real grid.
///
/// The distribution's kind governs the downstream sampling strategy
/// (integer bars vs a 200-point curve); the per-parameter kind governs the
/// slider's stepping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Integer-valued.
    Discrete,
    /// Real-valued.
    Continuous,
}

/// One scalar input to a distribution family.
///
/// Carries both the mathematical domain (`legal_range`, possibly
/// unbounded) and the metadata the UI builds a slider from: a finite
/// `interactive_range`, the `log_scale` flag, and the `default_value`
/// seeding the initial plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameter {
    /// Identifier (e.g. "mu").
    pub name: &'static str,
    /// Display form, as LaTeX (e.g. `\mu`).
    pub label: &'static str,
    /// Admissible mathematical values; bounds may be infinite.
    pub legal_range: (Real, Real),
    /// Finite interval the slider ranges over.
    pub interactive_range: (Real, Real),
    /// Whether the slider samples on a logarithmic scale; implies strictly
    /// positive `interactive_range` bounds.
    pub log_scale: bool,
    /// Initial slider position; lies within `interactive_range`.
    pub default_value: Real,
    /// Integer or real valued.
    pub value_kind: ValueKind,
    /// Conjugate-prior family, informational cross-reference only.
    pub conjugate_prior: Option<&'static str>,
    /// Short role description (e.g. "location").
    pub description: &'static str,
}
