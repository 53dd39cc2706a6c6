//! Benchmark the per-tick hot path: movement, cleaning, battery.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use roomba_core::components::{FrameInput, RoomConfig};
use roomba_core::engine::Simulation;

fn bench_update(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let base = Simulation::with_rng(RoomConfig::default(), &mut rng);
    let input = FrameInput {
        right: true,
        down: true,
        clean: true,
        ..FrameInput::default()
    };

    c.bench_function("simulation_update", |b| {
        b.iter_batched(
            || base.clone(),
            |mut sim| {
                for _ in 0..60 {
                    sim.update(black_box(&input), 1.0 / 60.0);
                }
                sim
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_update);
criterion_main!(benches);
