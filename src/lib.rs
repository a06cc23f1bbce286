//! Jugsolve: a pure solver for the two-jug water riddle
//!
//! Given two jugs of integer capacities and a target amount, find a
//! sequence of fill, empty and transfer actions that leaves one jug holding
//! exactly the target.
//!
//! # Core Concepts
//!
//! - **Jugs**: Labelled containers and positional pairs of them (`core`)
//! - **Actions**: Pure fill/transfer/empty transitions (`ops`)
//! - **Validation**: Structural pre-checks on input (`validation`)
//! - **Search**: Memoized depth-first exploration of states (`search`)
//!
//! # Example
//!
//! ```rust
//! use jugsolve::{solve, StateKey};
//!
//! let solution = solve(3, 5, 4).unwrap();
//!
//! assert_eq!(solution.steps()[0].description, "Fill Jug X");
//! assert_eq!(solution.final_state(), StateKey::new(3, 4));
//! ```

pub mod builder;
pub mod core;
pub mod ops;
pub mod search;
pub mod validation;

// Re-export commonly used types
pub use builder::{BuildError, Riddle, RiddleBuilder};
pub use core::{Jug, JugLabel, JugPair, Solution, StateKey, Step};
pub use ops::{Action, OperationError, Transition};
pub use search::{solve, SearchError, SearchOutcome, VisitedSet};
pub use validation::{validate_input, ValidationError};
