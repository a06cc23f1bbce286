//! Search errors.

use crate::ops::OperationError;
use crate::validation::ValidationError;
use thiserror::Error;

/// Errors that end a top-level solve.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    /// Input was rejected before searching
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Every reachable state was explored without reaching the target
    #[error("No Solution")]
    NoSolution,

    /// An action failed; treated as a defect, never as a dead end
    #[error("operation failed: {0}")]
    Operation(#[from] OperationError),
}
