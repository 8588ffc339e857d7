use glam::Vec2;

use crate::error::DetectError;
use crate::types::*;

/// Public API contract for the brute-force pair detector.
pub trait CollisionDetectorApi {
    /// Construct a new detector with the given configuration.
    fn new(cfg: DetectorConfig) -> Self
    where
        Self: Sized;

    // --- Detection ---------------------------------------------------------

    /// Return every overlapping pair `(i, j)`, `i < j`, ordered by `i` then `j`.
    fn detect(&mut self, particles: ParticleSet<'_>) -> Result<Vec<CollisionPair>, DetectError>;

    /// Clear `out` and refill it with the pairs of `particles`. Returns the pair count.
    fn detect_into(
        &mut self,
        particles: ParticleSet<'_>,
        out: &mut Vec<CollisionPair>,
    ) -> Result<usize, DetectError>;

    /// Host buffer convention: count goes to `n_pairs`, pairs are written as
    /// consecutive `i, j` integers from offset 0.
    fn detect_flat(
        &mut self,
        particles: ParticleSet<'_>,
        n_pairs: &mut i32,
        pairs: &mut [i32],
    ) -> Result<usize, DetectError>;

    /// Same pairs in the same order, with contact data for the response stage.
    fn detect_contacts(&mut self, particles: ParticleSet<'_>) -> Result<Vec<Contact>, DetectError>;

    /// Array-of-structs input.
    fn detect_particles(&mut self, particles: &[Particle]) -> Vec<CollisionPair>;

    // --- Diagnostics -------------------------------------------------------

    /// Counters for the last call.
    fn stats(&self) -> DetectStats;

    /// Timing for the last call (only when `enable_timing` is set).
    fn timing(&self) -> Option<DetectTiming>;
}

/// Circle/circle primitive tests.
pub trait NarrowphaseApi {
    /// Strict overlap: tangent circles do not collide.
    fn overlap_circles(c0: Vec2, r0: f32, c1: Vec2, r1: f32) -> bool;

    /// `Some` exactly when [`NarrowphaseApi::overlap_circles`] holds.
    fn overlap_circle_circle(c0: Vec2, r0: f32, c1: Vec2, r1: f32) -> Option<Overlap>;
}
