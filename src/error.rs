use thiserror::Error;

/// Caller contract violations. Degenerate geometry (NaN, negative radius) is never an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DetectError {
    #[error("array `{array}` has length {actual}, expected {expected}")]
    LengthMismatch {
        array: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("negative particle count: {0}")]
    NegativeCount(i64),
    #[error("pair buffer too small: need {needed} slots, have {capacity}")]
    CapacityExceeded { needed: usize, capacity: usize },
    #[error("particle count {0} exceeds the u32 index range")]
    IndexOverflow(usize),
}
