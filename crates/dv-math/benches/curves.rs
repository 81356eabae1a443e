//! Curve-evaluation benchmarks: the engine's hot path is sampling a
//! pdf/cdf at every point of a plot grid (200 dense points for continuous
//! families, one per integer for discrete families).

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dv_math::distributions::{Binomial, Distribution, Gamma, Normal, Poisson};
use dv_math::sampling::{integer_grid, linspace};

fn bench_continuous_curves(c: &mut Criterion) {
    let xs = linspace(-4.0, 4.0, 200);

    let normal = Normal::new(0.0, 1.0);
    c.bench_function("normal pdf, 200-point curve", |b| {
        b.iter(|| xs.iter().map(|&x| normal.pdf(black_box(x))).sum::<f64>())
    });
    c.bench_function("normal cdf, 200-point curve", |b| {
        b.iter(|| xs.iter().map(|&x| normal.cdf(black_box(x))).sum::<f64>())
    });

    // The gamma cdf runs the incomplete-gamma series at every point.
    let gamma = Gamma::new(3.0, 2.0);
    let xs_pos = linspace(0.01, 20.0, 200);
    c.bench_function("gamma cdf, 200-point curve", |b| {
        b.iter(|| xs_pos.iter().map(|&x| gamma.cdf(black_box(x))).sum::<f64>())
    });
}

fn bench_discrete_curves(c: &mut Criterion) {
    let binomial = Binomial::new(20.0, 0.5);
    let ks = integer_grid(0.0, 20.0);
    c.bench_function("binomial pmf, integer grid", |b| {
        b.iter(|| ks.iter().map(|&k| binomial.pdf(black_box(k))).sum::<f64>())
    });
    // Each cdf point re-sums the pmf from zero; the grid sweep is quadratic
    // in the trial count.
    c.bench_function("binomial cdf, integer grid", |b| {
        b.iter(|| ks.iter().map(|&k| binomial.cdf(black_box(k))).sum::<f64>())
    });

    let poisson = Poisson::new(4.0);
    let ks = integer_grid(0.0, 25.0);
    c.bench_function("poisson cdf, integer grid", |b| {
        b.iter(|| ks.iter().map(|&k| poisson.cdf(black_box(k))).sum::<f64>())
    });
}

criterion_group!(benches, bench_continuous_curves, bench_discrete_curves);
criterion_main!(benches);
