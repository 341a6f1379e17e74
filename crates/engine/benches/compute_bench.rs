//! Criterion benchmark for the full recomputation path (derived figures,
//! headline rounding, 21-sample chart series).
//!
//! The compute runs on every keystroke in the interactive app, so it should
//! stay comfortably in the sub-microsecond range.
//!
//! Run with: cargo bench -p engine --bench compute_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use engine::{compute, ScenarioInputs};

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("break_even_compute");
    group.sample_size(1000);

    let defaults = ScenarioInputs::default();
    group.bench_function("default_scenario", |b| {
        b.iter(|| black_box(compute(black_box(&defaults))));
    });

    // Degenerate path: single-sample series, no interpolation loop.
    let degenerate = ScenarioInputs {
        unit_production_cost: 105.0,
        ..Default::default()
    };
    group.bench_function("degenerate_scenario", |b| {
        b.iter(|| black_box(compute(black_box(&degenerate))));
    });

    group.finish();
}

criterion_group!(benches, bench_compute);
criterion_main!(benches);
