//! Jug actions: fill, transfer and empty.
//!
//! Each action is a pure function of a `(source, other)` jug pair. The
//! result distinguishes a real transition, a no-op the search should skip,
//! and a hard failure.

mod action;
mod error;

pub use action::{Action, Transition};
pub use error::OperationError;
