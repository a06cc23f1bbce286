//! Builder API for riddle configuration.
//!
//! [`RiddleBuilder`] collects the two capacities and the target, then runs
//! input validation in `build`, so a [`Riddle`] is always valid input for
//! the search. The [`riddle!`](crate::riddle) macro is shorthand for it.
//!
//! # Example
//!
//! ```
//! use jugsolve::builder::Riddle;
//!
//! let riddle = Riddle::builder().jug_x(3).jug_y(5).target(4).build().unwrap();
//! let solution = riddle.solve().unwrap();
//! assert_eq!(solution.len(), 11);
//! ```

pub mod error;
pub mod macros;
pub mod riddle;

pub use error::BuildError;
pub use riddle::{Riddle, RiddleBuilder};
