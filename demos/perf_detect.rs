use pairbonk::*;
use std::time::Instant;

fn lcg(seed: &mut u32) -> u32 {
    *seed = seed.wrapping_mul(1664525).wrapping_add(1013904223);
    *seed
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut detector = CollisionDetector::new(DetectorConfig {
        enable_timing: true,
        max_pairs: None,
    });

    let n = 4_000usize; // number of particles
    let mut seed = 1u32;
    let mut x = Vec::with_capacity(n);
    let mut y = Vec::with_capacity(n);
    let mut r = Vec::with_capacity(n);
    for _ in 0..n {
        x.push((lcg(&mut seed) as f32 / u32::MAX as f32) * 200.0 - 100.0);
        y.push((lcg(&mut seed) as f32 / u32::MAX as f32) * 200.0 - 100.0);
        r.push(0.25 + (lcg(&mut seed) as f32 / u32::MAX as f32) * 0.5);
    }

    let particles = match ParticleSet::from_slices(&x, &y, &r) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("bad input: {e}");
            return;
        }
    };
    let t0 = Instant::now();
    let pairs = match detector.detect(particles) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("detection failed: {e}");
            return;
        }
    };
    let wall = t0.elapsed();
    let stats = detector.stats();
    if let Some(t) = detector.timing() {
        println!(
            "N={} tests={} pairs={} detect={:.3}ms",
            n, stats.pair_tests, pairs.len(), t.detect_ms
        );
    } else {
        println!("N={} tests={} pairs={} wall={:?}", n, stats.pair_tests, pairs.len(), wall);
    }
}
