//! Action failures.

use crate::core::JugLabel;
use thiserror::Error;

/// Errors raised while applying an action.
///
/// Both variants indicate jugs that should never exist once input has been
/// validated, so the search aborts on them instead of backtracking.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OperationError {
    #[error("invalid volume {volume} for {jug}")]
    InvalidVolume { jug: JugLabel, volume: i64 },

    #[error("invalid received jug state: {jug} holds {value} of {volume}")]
    InvalidState {
        jug: JugLabel,
        value: i64,
        volume: i64,
    },
}
