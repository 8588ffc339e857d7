use glam::Vec2;

use crate::error::DetectError;

/// One circular particle (array-of-structs convenience input).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub center: Vec2,
    pub radius: f32,
}

impl Particle {
    pub fn new(x: f32, y: f32, r: f32) -> Self {
        Self {
            center: Vec2::new(x, y),
            radius: r,
        }
    }
}

/// Borrowed snapshot of `n` particles in the boundary layout: three contiguous
/// arrays of equal length, indexed by particle.
#[derive(Copy, Clone, Debug)]
pub struct ParticleSet<'a> {
    x: &'a [f32],
    y: &'a [f32],
    r: &'a [f32],
}

impl<'a> ParticleSet<'a> {
    /// Checked constructor: all three arrays must hold exactly `n` values.
    pub fn new(n: usize, x: &'a [f32], y: &'a [f32], r: &'a [f32]) -> Result<Self, DetectError> {
        if n > u32::MAX as usize {
            return Err(DetectError::IndexOverflow(n));
        }
        for (array, values) in [("x", x), ("y", y), ("r", r)] {
            if values.len() != n {
                return Err(DetectError::LengthMismatch {
                    array,
                    expected: n,
                    actual: values.len(),
                });
            }
        }
        Ok(Self { x, y, r })
    }

    /// Like [`ParticleSet::new`] with `n` taken from `x`.
    pub fn from_slices(x: &'a [f32], y: &'a [f32], r: &'a [f32]) -> Result<Self, DetectError> {
        Self::new(x.len(), x, y, r)
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self) -> &'a [f32] {
        self.x
    }

    pub fn y(&self) -> &'a [f32] {
        self.y
    }

    pub fn r(&self) -> &'a [f32] {
        self.r
    }

    /// Panics if `i >= len()`.
    pub fn get(&self, i: usize) -> Particle {
        Particle::new(self.x[i], self.y[i], self.r[i])
    }
}

/// Index pair of two overlapping particles. Always `i < j`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CollisionPair {
    pub i: u32,
    pub j: u32,
}

impl CollisionPair {
    pub fn new(i: u32, j: u32) -> Self {
        debug_assert!(i < j, "collision pair must satisfy i < j");
        Self { i, j }
    }
}

impl From<CollisionPair> for (u32, u32) {
    fn from(p: CollisionPair) -> Self {
        (p.i, p.j)
    }
}

/// Overlap contact result for a colliding pair.
#[derive(Copy, Clone, Debug)]
pub struct Overlap {
    /// Separating normal pointing from B into A ((0,0) when centers coincide).
    pub normal: Vec2,
    /// Penetration depth (≥ 0).
    pub depth: f32,
    /// Point on A's boundary facing B.
    pub contact: Vec2,
}

/// A collision pair together with its contact data.
#[derive(Copy, Clone, Debug)]
pub struct Contact {
    pub pair: CollisionPair,
    pub overlap: Overlap,
}

/// Detector configuration.
#[derive(Clone, Debug, Default)]
pub struct DetectorConfig {
    /// Enable internal timing instrumentation (adds small overhead when true).
    pub enable_timing: bool,
    /// Maximum number of pairs to emit per call; extra are dropped. `None` is unbounded.
    pub max_pairs: Option<usize>,
}

/// Counters for the last detection call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DetectStats {
    pub particles: usize,
    /// Narrowphase tests run; always n*(n-1)/2.
    pub pair_tests: usize,
    /// Pairs emitted.
    pub pairs: usize,
    /// Overlapping pairs dropped because of `max_pairs`.
    pub dropped: usize,
}

/// Timing for the last detection call.
#[derive(Copy, Clone, Debug, Default)]
pub struct DetectTiming {
    pub detect_ms: f64,
}

/// Number of unordered pairs among `n` particles, n*(n-1)/2 (saturating).
pub fn max_pair_count(n: usize) -> usize {
    if n % 2 == 0 {
        (n / 2).saturating_mul(n.saturating_sub(1))
    } else {
        n.saturating_mul((n - 1) / 2)
    }
}

/// Flat `i32` slots needed to hold every possible pair of `n` particles.
pub fn flat_capacity(n: usize) -> usize {
    max_pair_count(n).saturating_mul(2)
}
