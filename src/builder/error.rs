//! Build errors for riddle configuration.

use crate::validation::ValidationError;
use thiserror::Error;

/// Errors that can occur when building a riddle.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Jug X capacity not specified. Call .jug_x(volume) before .build()")]
    MissingJugX,

    #[error("Jug Y capacity not specified. Call .jug_y(volume) before .build()")]
    MissingJugY,

    #[error("Target amount not specified. Call .target(amount) before .build()")]
    MissingTarget,

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}
