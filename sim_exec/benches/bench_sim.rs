//! # Simulation Benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};

use sim_lib::{params::SimParams, path_gen, sim};

fn sim_benchmark(c: &mut Criterion) {
    let params = SimParams::default();

    c.bench_function("generate 600 samples", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(42);
            path_gen::generate(
                black_box(params.step_count),
                params.path_duration_s,
                params.noise_std_dev_m,
                &mut rng,
            )
            .unwrap()
        })
    });

    let mut rng = StdRng::seed_from_u64(42);
    let paths = path_gen::generate(
        params.step_count,
        params.path_duration_s,
        params.noise_std_dev_m,
        &mut rng,
    )
    .unwrap();

    c.bench_function("run 600 steps", |b| {
        b.iter(|| sim::run(black_box(&params), black_box(&paths.reference)).unwrap())
    });
}

criterion_group!(benches, sim_benchmark);
criterion_main!(benches);
