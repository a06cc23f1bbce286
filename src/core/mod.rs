//! Core jug types.
//!
//! This module contains the pure values the search works with:
//! - Jugs and their stable labels
//! - Positional jug pairs and label-based state keys
//! - Recorded steps and solutions
//!
//! Nothing here mutates shared state; every value is owned by the search
//! node that created it.

mod history;
mod jug;
mod state;

pub use history::{Solution, Step};
pub use jug::{Jug, JugLabel};
pub use state::{JugPair, StateKey};
