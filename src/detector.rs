use std::time::Instant;

use tracing::{debug, warn};

use crate::api::{CollisionDetectorApi, NarrowphaseApi};
use crate::error::DetectError;
use crate::narrowphase::{Narrowphase, pairwise_overlap};
use crate::types::*;

/// Brute-force all-pairs circle overlap detector.
///
/// Holds only configuration and diagnostics for the last call; every call
/// reads a fresh snapshot and produces a fresh result.
pub struct CollisionDetector {
    pub cfg: DetectorConfig,
    last_stats: DetectStats,
    last_timing: Option<DetectTiming>,
}

impl Default for CollisionDetector {
    fn default() -> Self {
        <Self as CollisionDetectorApi>::new(DetectorConfig::default())
    }
}

impl CollisionDetectorApi for CollisionDetector {
    fn new(cfg: DetectorConfig) -> Self {
        Self {
            cfg,
            last_stats: DetectStats::default(),
            last_timing: None,
        }
    }

    fn detect(&mut self, particles: ParticleSet<'_>) -> Result<Vec<CollisionPair>, DetectError> {
        let mut out = Vec::new();
        self.detect_into(particles, &mut out)?;
        Ok(out)
    }

    fn detect_into(
        &mut self,
        particles: ParticleSet<'_>,
        out: &mut Vec<CollisionPair>,
    ) -> Result<usize, DetectError> {
        out.clear();
        self.scan(particles, |i, j| out.push(CollisionPair::new(i, j)));
        Ok(out.len())
    }

    fn detect_flat(
        &mut self,
        particles: ParticleSet<'_>,
        n_pairs: &mut i32,
        pairs: &mut [i32],
    ) -> Result<usize, DetectError> {
        if particles.len() > i32::MAX as usize {
            return Err(DetectError::IndexOverflow(particles.len()));
        }
        *n_pairs = 0;
        let capacity = pairs.len();
        let mut k = 0usize;
        let mut needed = 0usize;
        self.scan(particles, |i, j| {
            needed += 2;
            if k + 2 <= capacity {
                // Indices fit: len() <= i32::MAX was checked above.
                pairs[k] = i as i32;
                pairs[k + 1] = j as i32;
                k += 2;
                *n_pairs += 1;
            }
        });
        if needed > capacity {
            warn!(needed, capacity, "pair buffer too small; output truncated");
            return Err(DetectError::CapacityExceeded { needed, capacity });
        }
        Ok(k / 2)
    }

    fn detect_contacts(&mut self, particles: ParticleSet<'_>) -> Result<Vec<Contact>, DetectError> {
        let pairs = self.detect(particles)?;
        let contacts = pairs
            .into_iter()
            .filter_map(|pair| {
                let a = particles.get(pair.i as usize);
                let b = particles.get(pair.j as usize);
                Narrowphase::overlap_circle_circle(a.center, a.radius, b.center, b.radius)
                    .map(|overlap| Contact { pair, overlap })
            })
            .collect();
        Ok(contacts)
    }

    fn detect_particles(&mut self, particles: &[Particle]) -> Vec<CollisionPair> {
        let x: Vec<f32> = particles.iter().map(|p| p.center.x).collect();
        let y: Vec<f32> = particles.iter().map(|p| p.center.y).collect();
        let r: Vec<f32> = particles.iter().map(|p| p.radius).collect();
        match ParticleSet::from_slices(&x, &y, &r) {
            Ok(set) => {
                let mut out = Vec::new();
                self.scan(set, |i, j| out.push(CollisionPair::new(i, j)));
                out
            }
            // Only reachable past u32::MAX particles.
            Err(err) => {
                warn!(%err, "particle slice rejected");
                Vec::new()
            }
        }
    }

    fn stats(&self) -> DetectStats {
        self.last_stats
    }

    fn timing(&self) -> Option<DetectTiming> {
        self.last_timing
    }
}

impl CollisionDetector {
    /// Upper-triangular scan: `i` over `0..n-1`, `j` over `i+1..n`, every pair
    /// tested, overlaps handed to `emit` in that order.
    fn scan(&mut self, particles: ParticleSet<'_>, mut emit: impl FnMut(u32, u32)) {
        let t0 = if self.cfg.enable_timing { Some(Instant::now()) } else { None };
        let (x, y, r) = (particles.x(), particles.y(), particles.r());
        let n = particles.len();
        let max_pairs = self.cfg.max_pairs.unwrap_or(usize::MAX);

        let mut pair_tests = 0usize;
        let mut pairs = 0usize;
        let mut dropped = 0usize;
        for i in 0..n.saturating_sub(1) {
            for j in (i + 1)..n {
                pair_tests += 1;
                if pairwise_overlap(x[i], y[i], r[i], x[j], y[j], r[j]) {
                    if pairs < max_pairs {
                        emit(i as u32, j as u32);
                        pairs += 1;
                    } else {
                        dropped += 1;
                    }
                }
            }
        }

        if dropped > 0 {
            warn!(max_pairs, dropped, "pair limit reached; extra pairs dropped");
        }
        debug!(particles = n, pair_tests, pairs, "collision scan complete");
        self.last_stats = DetectStats {
            particles: n,
            pair_tests,
            pairs,
            dropped,
        };
        self.last_timing = t0.map(|t| DetectTiming {
            detect_ms: t.elapsed().as_secs_f64() * 1000.0,
        });
    }
}

/// One-shot detection with a default detector. `x`, `y` and `r` must each hold `n` values.
pub fn detect_collisions(
    n: usize,
    x: &[f32],
    y: &[f32],
    r: &[f32],
) -> Result<Vec<CollisionPair>, DetectError> {
    let particles = ParticleSet::new(n, x, y, r)?;
    CollisionDetector::default().detect(particles)
}

/// One-shot detection in the host buffer convention (signed count, flat `i32` pairs).
pub fn detect_collisions_flat(
    n: i32,
    x: &[f32],
    y: &[f32],
    r: &[f32],
    n_pairs: &mut i32,
    pairs: &mut [i32],
) -> Result<usize, DetectError> {
    let n = usize::try_from(n).map_err(|_| DetectError::NegativeCount(i64::from(n)))?;
    let particles = ParticleSet::new(n, x, y, r)?;
    CollisionDetector::default().detect_flat(particles, n_pairs, pairs)
}

/// Flatten pairs into the host layout `[i0, j0, i1, j1, ...]`.
pub fn flatten_pairs(pairs: &[CollisionPair]) -> Vec<i32> {
    pairs
        .iter()
        .flat_map(|p| [p.i as i32, p.j as i32])
        .collect()
}
