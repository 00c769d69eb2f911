//! Benchmarks for shape sampling and engine ticks.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use morphfield::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for shape in Shape::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(shape.label()),
            &shape,
            |b, &shape| {
                let mut rng = SmallRng::seed_from_u64(7);
                b.iter(|| {
                    black_box(morphfield::shapes::generate(
                        shape,
                        DEFAULT_PARTICLE_COUNT,
                        &mut rng,
                    ))
                })
            },
        );
    }

    group.finish();
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    group.bench_function("active", |b| {
        let mut engine = MorphEngine::seeded(Shape::Saturn, DEFAULT_PARTICLE_COUNT, 7);
        let control = ControlState::active(1.5);
        b.iter(|| engine.tick(black_box(1.0 / 60.0), control))
    });

    group.bench_function("idle", |b| {
        let mut engine = MorphEngine::seeded(Shape::Saturn, DEFAULT_PARTICLE_COUNT, 7);
        let control = ControlState::idle();
        b.iter(|| engine.tick(black_box(1.0 / 60.0), control))
    });

    group.bench_function("shape_switch", |b| {
        let mut engine = MorphEngine::seeded(Shape::Heart, DEFAULT_PARTICLE_COUNT, 7);
        let mut flip = false;
        b.iter(|| {
            flip = !flip;
            engine.set_shape(if flip { Shape::Sphere } else { Shape::Heart });
        })
    });

    group.finish();
}

criterion_group!(benches, bench_generate, bench_tick);
criterion_main!(benches);
