use glam::Vec2;

use crate::api::NarrowphaseApi;
use crate::types::*;

/// Strict circle overlap on raw scalars: `dx*dx + dy*dy < r*r`.
///
/// Operands are taken in the order `dx = x2 - x1`, `dy = y2 - y1`, `r = r2 + r1`
/// so results match the host kernel bit for bit. Tangent circles do not collide;
/// any NaN operand yields `false`.
#[inline]
pub fn pairwise_overlap(x1: f32, y1: f32, r1: f32, x2: f32, y2: f32, r2: f32) -> bool {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let r = r2 + r1;
    dx * dx + dy * dy < r * r
}

/// Narrowphase circle tests.
pub struct Narrowphase;

impl NarrowphaseApi for Narrowphase {
    #[inline]
    fn overlap_circles(c0: Vec2, r0: f32, c1: Vec2, r1: f32) -> bool {
        pairwise_overlap(c0.x, c0.y, r0, c1.x, c1.y, r1)
    }

    fn overlap_circle_circle(c0: Vec2, r0: f32, c1: Vec2, r1: f32) -> Option<Overlap> {
        if !Self::overlap_circles(c0, r0, c1, r1) {
            return None;
        }
        let delta = c0 - c1;
        let dist2 = delta.length_squared();
        let rsum = r0 + r1;
        if dist2 == 0.0 {
            // Coincident centers; undefined normal.
            return Some(Overlap {
                normal: Vec2::ZERO,
                depth: rsum,
                contact: c0,
            });
        }
        let dist = dist2.sqrt();
        let normal = delta / dist; // from B into A
        // Rounding can put dist a hair above rsum even when the strict test passed.
        let depth = (rsum - dist).max(0.0);
        let contact = c0 - normal * r0;
        Some(Overlap {
            normal,
            depth,
            contact,
        })
    }
}
