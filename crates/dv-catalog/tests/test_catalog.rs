//! Structural tests over the whole catalog, plus end-to-end evaluation
//! scenarios exercised through the catalog surface rather than the raw
//! formula structs.

use dv_catalog::{Catalog, Family, Quantity, ValueKind};

#[test]
fn catalog_covers_all_ten_families() {
    let catalog = Catalog::instance();
    assert_eq!(catalog.len(), Family::ALL.len());
    assert!(!catalog.is_empty());
    for (def, family) in catalog.all().iter().zip(Family::ALL) {
        assert_eq!(def.family, family, "catalog order follows Family::ALL");
        assert_eq!(catalog.get(family).family, family);
    }
}

#[test]
fn lookups_by_name() {
    let catalog = Catalog::instance();
    for family in Family::ALL {
        let def = catalog
            .get_by_name(family.name())
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(def.family, family);
    }
    assert!(catalog.get_by_name("cauchy").is_err());

    let normal = catalog.get(Family::Normal);
    assert!(normal.parametrization("mean/variance").is_ok());
    assert!(normal.parametrization("precision").is_err());
}

#[test]
fn quantity_names_round_trip() {
    for q in Quantity::ALL {
        assert_eq!(q.name().parse::<Quantity>().unwrap(), q);
    }
    assert!("skewness".parse::<Quantity>().is_err());
}

#[test]
fn parameter_slider_invariants() {
    for def in Catalog::instance().all() {
        for p in &def.parametrizations {
            for param in &p.params {
                let (ilo, ihi) = param.interactive_range;
                assert!(
                    ilo.is_finite() && ihi.is_finite() && ilo < ihi,
                    "{}/{}: interactive range must be finite and ordered",
                    def.name(),
                    param.name
                );
                assert!(
                    (ilo..=ihi).contains(&param.default_value),
                    "{}/{}: default {} outside slider range",
                    def.name(),
                    param.name,
                    param.default_value
                );
                if param.log_scale {
                    assert!(
                        ilo > 0.0,
                        "{}/{}: log-scaled slider needs positive bounds",
                        def.name(),
                        param.name
                    );
                }
                let (llo, lhi) = param.legal_range;
                assert!(
                    llo <= ilo && ihi <= lhi,
                    "{}/{}: slider range escapes the legal range",
                    def.name(),
                    param.name
                );
            }
        }
    }
}

#[test]
fn every_default_vector_is_valid() {
    for def in Catalog::instance().all() {
        for p in &def.parametrizations {
            assert!(
                p.is_valid(&p.defaults()),
                "{}/{}: defaults fail the validity predicate",
                def.name(),
                p.name
            );
        }
    }
}

#[test]
fn plot_ranges_are_finite_and_ordered_at_defaults() {
    for def in Catalog::instance().all() {
        for p in &def.parametrizations {
            let (lo, hi) = p.plot_range(&p.defaults());
            assert!(
                lo.is_finite() && hi.is_finite() && lo < hi,
                "{}/{}: plot range ({lo}, {hi})",
                def.name(),
                p.name
            );
        }
    }
}

#[test]
fn value_kinds_partition_the_families() {
    let catalog = Catalog::instance();
    for family in Family::ALL {
        let expected = match family {
            Family::Binomial | Family::Poisson | Family::NegativeBinomial => ValueKind::Discrete,
            _ => ValueKind::Continuous,
        };
        assert_eq!(catalog.get(family).value_kind(), expected, "{family}");
    }
}

#[test]
fn validity_predicates_reject_inadmissible_vectors() {
    let catalog = Catalog::instance();

    let normal = catalog.get(Family::Normal).default_parametrization();
    assert!(!normal.is_valid(&[0.0, 0.0]));
    assert!(!normal.is_valid(&[0.0, -1.0]));

    let binomial = catalog.get(Family::Binomial).default_parametrization();
    assert!(binomial.is_valid(&[20.0, 0.5]));
    assert!(!binomial.is_valid(&[20.5, 0.5]), "non-integer N");
    assert!(!binomial.is_valid(&[20.0, 0.0]), "p at the boundary");
    assert!(!binomial.is_valid(&[20.0, 1.0]));

    let student_t = catalog.get(Family::StudentT).default_parametrization();
    assert!(!student_t.is_valid(&[0.0, 0.0, 1.0]), "zero degrees of freedom");
}

// ── End-to-end scenarios ─────────────────────────────────────────────────────

#[test]
fn normal_end_to_end() {
    let normal = Catalog::instance().get(Family::Normal);
    let p = normal.default_parametrization();
    assert_eq!(p.name, "mean/standard deviation");

    let v = [0.0, 1.0];
    assert!((p.density(0.0, &v) - 0.3989).abs() < 1e-4);
    assert_eq!(p.cdf(0.0, &v), 0.5);
    assert!((p.cdf(1.96, &v) - 0.975).abs() < 1e-4);

    assert_eq!(p.quantity(Quantity::Mean, &v), Some(0.0));
    assert_eq!(p.quantity(Quantity::Variance, &v), Some(1.0));
    assert_eq!(p.quantity(Quantity::Median, &v), Some(0.0));
    assert_eq!(p.quantity(Quantity::Mode, &v), Some(0.0));
}

#[test]
fn normal_variance_coordinates_delegate_through_sigma() {
    let normal = Catalog::instance().get(Family::Normal);
    let sd = normal.parametrization("mean/standard deviation").unwrap();
    let var = normal.parametrization("mean/variance").unwrap();
    for &x in &[-3.0, -0.5, 0.0, 2.0] {
        assert_eq!(sd.density(x, &[1.0, 3.0]), var.density(x, &[1.0, 9.0]));
        assert_eq!(sd.cdf(x, &[1.0, 3.0]), var.cdf(x, &[1.0, 9.0]));
    }
    assert_eq!(var.quantity(Quantity::Variance, &[1.0, 9.0]), Some(9.0));
}

#[test]
fn poisson_end_to_end() {
    let p = Catalog::instance()
        .get(Family::Poisson)
        .default_parametrization();
    let v = [4.0];
    assert!((p.density(4.0, &v) - 0.1954).abs() < 1e-4);
    assert_eq!(p.quantity(Quantity::Mean, &v), Some(4.0));
    assert_eq!(p.quantity(Quantity::Variance, &v), Some(4.0));
    assert_eq!(p.quantity(Quantity::Median, &v), None);
}

#[test]
fn binomial_end_to_end() {
    let p = Catalog::instance()
        .get(Family::Binomial)
        .default_parametrization();
    let v = [20.0, 0.5];
    assert_eq!(p.quantity(Quantity::Mean, &v), Some(10.0));
    assert_eq!(p.quantity(Quantity::Variance, &v), Some(5.0));
    assert!((p.cdf(10.0, &v) - 0.588).abs() < 1e-3);
    assert_eq!(p.cdf(20.0, &v), 1.0);
    assert_eq!(p.density(10.5, &v), 0.0, "mass only on the integer grid");
}

#[test]
fn student_t_mean_sentinel() {
    let t = Catalog::instance()
        .get(Family::StudentT)
        .default_parametrization();
    assert_eq!(t.quantity(Quantity::Mean, &[1.0, 3.0, 1.0]), None);
    assert_eq!(t.quantity(Quantity::Mean, &[2.0, 3.0, 1.0]), Some(3.0));
    assert_eq!(t.quantity(Quantity::Variance, &[2.0, 3.0, 1.0]), None);
    assert_eq!(t.quantity(Quantity::Median, &[1.0, 3.0, 1.0]), Some(3.0));
}

#[test]
fn beta_mode_sentinel_distinguishes_undefined_from_missing() {
    let catalog = Catalog::instance();

    // Defined in the coordinates, undefined at these values.
    let beta = catalog.get(Family::Beta).default_parametrization();
    assert!(beta.derived(Quantity::Mode).is_some());
    assert_eq!(beta.quantity(Quantity::Mode, &[0.5, 0.5]), None);
    assert_eq!(beta.quantity(Quantity::Mode, &[2.0, 2.0]), Some(0.5));

    // Not defined in the coordinates at all.
    let chi = catalog.get(Family::ChiSquared).default_parametrization();
    assert!(chi.derived(Quantity::Median).is_none());
    assert_eq!(chi.quantity(Quantity::Median, &[3.0, 1.0]), None);
}

#[test]
fn out_of_support_evaluation_returns_zero() {
    let catalog = Catalog::instance();
    for (family, x) in [
        (Family::Gamma, -1.0),
        (Family::ChiSquared, -0.5),
        (Family::LogNormal, -2.0),
        (Family::Poisson, -1.0),
        (Family::Binomial, -1.0),
        (Family::NegativeBinomial, -3.0),
    ] {
        let p = catalog.get(family).default_parametrization();
        let v = p.defaults();
        assert_eq!(p.density(x, &v), 0.0, "{family} density at {x}");
        assert_eq!(p.cdf(x, &v), 0.0, "{family} cdf at {x}");
    }

    let weibull = catalog.get(Family::Weibull).default_parametrization();
    assert_eq!(weibull.density(2.0, &[2.0, 1.0, 1.0]), 0.0, "at the shift");
}

#[test]
fn discrete_cdfs_are_running_sums() {
    let catalog = Catalog::instance();
    for family in [Family::Binomial, Family::Poisson, Family::NegativeBinomial] {
        let p = catalog.get(family).default_parametrization();
        let v = p.defaults();
        let (lo, hi) = p.plot_range(&v);
        let mut sum = 0.0;
        for x in dv_math::sampling::integer_grid(lo, hi) {
            if x < 0.0 {
                continue;
            }
            sum += p.density(x, &v);
            assert!(
                dv_math::close(p.cdf(x, &v), sum, 1e-9),
                "{family} cdf({x}) diverges from the running sum"
            );
        }
    }
}

#[test]
#[should_panic(expected = "arity")]
fn arity_mismatch_is_fatal() {
    let normal = Catalog::instance().get(Family::Normal);
    normal.default_parametrization().density(0.0, &[0.0]);
}
