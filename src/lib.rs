//! pairbonk: brute-force circle overlap detection (stateless, no resolution)

pub mod types;
pub mod api;
pub mod error;
pub mod narrowphase;
pub mod detector;

pub use crate::types::*;
pub use crate::api::*;
pub use crate::error::DetectError;
pub use crate::detector::{CollisionDetector, detect_collisions, detect_collisions_flat, flatten_pairs};
pub use crate::narrowphase::pairwise_overlap;
