use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use pairbonk::*;

fn lcg(seed: &mut u32) -> u32 {
    *seed = seed.wrapping_mul(1664525).wrapping_add(1013904223);
    *seed
}

fn unit(seed: &mut u32) -> f32 {
    lcg(seed) as f32 / u32::MAX as f32
}

fn bench_detect(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect");
    for n in [64usize, 256, 1024] {
        let mut seed = 7u32;
        let x: Vec<f32> = (0..n).map(|_| unit(&mut seed) * 200.0 - 100.0).collect();
        let y: Vec<f32> = (0..n).map(|_| unit(&mut seed) * 200.0 - 100.0).collect();
        let r: Vec<f32> = (0..n).map(|_| 0.5 + unit(&mut seed)).collect();
        let mut detector = CollisionDetector::default();
        let mut out = Vec::new();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let set = ParticleSet::from_slices(&x, &y, &r).unwrap();
                black_box(detector.detect_into(set, &mut out).unwrap())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_detect);
criterion_main!(benches);
