// ===== aimforge/benches/calc_bench.rs =====
use aimforge::calculator::Calculator;
use aimforge::catalog::DeviceCatalog;
use aimforge::profile::{CalculatorProfile, ExperienceLevel, PlayStyle};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn criterion_benchmark(c: &mut Criterion) {
    let catalog = DeviceCatalog::builtin();
    let device = catalog
        .get("iPhone 15 Pro")
        .cloned()
        .expect("builtin device");
    let devices = catalog.devices().to_vec();

    let vip = Calculator::new();
    let free = Calculator::builder()
        .profile(CalculatorProfile::free())
        .build();

    c.bench_function("calculate (vip, apple flagship)", |b| {
        b.iter(|| {
            vip.calculate(
                black_box(&device),
                PlayStyle::Balanced,
                ExperienceLevel::Advanced,
                black_box(1.15),
            )
        })
    });

    c.bench_function("calculate (free, boost chain)", |b| {
        b.iter(|| {
            free.calculate(
                black_box(&device),
                PlayStyle::Aggressive,
                ExperienceLevel::Beginner,
                black_box(1.0),
            )
        })
    });

    c.bench_function("calculate_batch (builtin catalog)", |b| {
        b.iter(|| {
            vip.calculate_batch(
                black_box(&devices),
                PlayStyle::Balanced,
                ExperienceLevel::Intermediate,
                black_box(1.05),
            )
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
