//! Validation errors.

use thiserror::Error;

/// Reasons a riddle is rejected before searching.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("volume can't be less than 1")]
    InvalidVolume,

    #[error("Jug X and Y are the same")]
    DuplicateJugs,

    #[error("Z amount ({target}) is larger than the largest Jug can hold ({largest})")]
    TargetExceedsCapacity { target: i64, largest: i64 },
}
