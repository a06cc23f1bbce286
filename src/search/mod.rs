//! Depth-first search over reachable jug states.
//!
//! The engine explores `(x_value, y_value)` states depth-first on an
//! explicit frame stack, trying each jug position in turn and, per jug, the
//! actions in [`Action::ALL`](crate::ops::Action::ALL) order. A [`VisitedSet`] scoped to one top-level search stops it from
//! revisiting states, which bounds the stack by `(cx + 1) * (cy + 1)` frames.
//!
//! The first path found is returned. It is deterministic for a given input
//! but not necessarily the shortest.

mod engine;
mod error;
mod visited;

pub use engine::{search, solve, Report, SearchOutcome, SearchStats, Solver};
pub use error::SearchError;
pub use visited::VisitedSet;
