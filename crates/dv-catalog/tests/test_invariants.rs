//! Property tests over every catalog entry at its default parameter
//! values: density non-negativity, CDF bounds, and CDF monotonicity on
//! the plot range.

use dv_catalog::{Catalog, Family, ValueKind};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn density_nonnegative_and_cdf_in_unit_interval(frac in 0.0_f64..=1.0) {
        for def in Catalog::instance().all() {
            for p in &def.parametrizations {
                let values = p.defaults();
                let (lo, hi) = p.plot_range(&values);
                let x = lo + frac * (hi - lo);

                let density = p.density(x, &values);
                prop_assert!(
                    density >= 0.0,
                    "{}/{}: density({x}) = {density}",
                    def.name(),
                    p.name
                );

                let cdf = p.cdf(x, &values);
                prop_assert!(
                    (-1e-9..=1.0 + 1e-9).contains(&cdf),
                    "{}/{}: cdf({x}) = {cdf} out of [0,1]",
                    def.name(),
                    p.name
                );
            }
        }
    }

    #[test]
    fn cdf_nondecreasing_on_plot_range(f1 in 0.0_f64..=1.0, f2 in 0.0_f64..=1.0) {
        let (flo, fhi) = if f1 <= f2 { (f1, f2) } else { (f2, f1) };
        for def in Catalog::instance().all() {
            // The beta CDF is the coarse x^a(1-x)^b/B(a,b) approximation,
            // which is not monotone away from the mode.
            if def.family == Family::Beta {
                continue;
            }
            for p in &def.parametrizations {
                let values = p.defaults();
                let (lo, hi) = p.plot_range(&values);
                let xlo = lo + flo * (hi - lo);
                let xhi = lo + fhi * (hi - lo);
                prop_assert!(
                    p.cdf(xlo, &values) <= p.cdf(xhi, &values) + 1e-9,
                    "{}/{}: cdf not monotone between {xlo} and {xhi}",
                    def.name(),
                    p.name
                );
            }
        }
    }
}

#[test]
fn cdf_spans_the_plot_window() {
    // The plot window covers the mass: the CDF is near its asymptotes at
    // the edges. Discrete families may carry a sizeable atom at the lower
    // edge (Poisson at λ = 1 has e⁻¹ at zero), so only the upper edge is
    // checked for them.
    for def in Catalog::instance().all() {
        for p in &def.parametrizations {
            let values = p.defaults();
            let (lo, hi) = p.plot_range(&values);
            if def.value_kind() == ValueKind::Continuous {
                assert!(
                    p.cdf(lo, &values) < 0.1,
                    "{}/{}: cdf({lo}) = {}",
                    def.name(),
                    p.name,
                    p.cdf(lo, &values)
                );
            }
            assert!(
                p.cdf(hi, &values) > 0.9,
                "{}/{}: cdf({hi}) = {}",
                def.name(),
                p.name,
                p.cdf(hi, &values)
            );
        }
    }
}
