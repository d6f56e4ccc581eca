use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use ndarray::Array1;
use orbitize_priors::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn setup_priors() -> Vec<Prior> {
    vec![
        JeffreysPrior::new(0.001, 1e4).unwrap().into(),
        UniformPrior::new(0.0, 1.0).unwrap().into(),
        SinPrior.into(),
        UniformPrior::new(0.0, 2.0 * std::f64::consts::PI).unwrap().into(),
        UniformPrior::new(0.0, 2.0 * std::f64::consts::PI).unwrap().into(),
        UniformPrior::new(0.0, 1.0).unwrap().into(),
        GaussianPrior::new(56.95, 0.026).unwrap().into(),
        GaussianPrior::new(1.22, 0.08).unwrap().into(),
    ]
}

fn benchmark_priors(c: &mut Criterion) {
    let priors = setup_priors();
    let params = [10.0, 0.3, 1.2, 2.0, 4.0, 0.5, 56.9, 1.2];
    let values = Array1::linspace(-1.0, 200.0, 10_000);

    c.bench_function("all_lnpriors", |b| {
        b.iter(|| {
            let _ = black_box(all_lnpriors(black_box(&params), black_box(&priors)));
        });
    });

    c.bench_function("jeffreys_compute_lnprob", |b| {
        let prior = &priors[0];
        b.iter(|| {
            let _ = black_box(prior.compute_lnprob(black_box(values.view())));
        });
    });

    c.bench_function("jeffreys_draw_samples", |b| {
        let prior = &priors[0];
        let mut rng = StdRng::seed_from_u64(0);
        b.iter(|| {
            let _ = black_box(prior.draw_samples(black_box(10_000), &mut rng));
        });
    });

    c.bench_function("draw_walkers", |b| {
        let mut rng = StdRng::seed_from_u64(0);
        b.iter(|| {
            let _ = black_box(draw_walkers(black_box(&priors), black_box(1_000), &mut rng));
        });
    });
}

criterion_group!(benches, benchmark_priors);
criterion_main!(benches);
