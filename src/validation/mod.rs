//! Input pre-checks run before any search begins.
//!
//! Two entry points share the same three rules:
//!
//! - [`validate_input`] fails fast, returning the first violated rule in
//!   order. This is what [`solve`](crate::search::solve) uses.
//! - [`validate_all`] evaluates every rule and accumulates all violations
//!   in a Stillwater `Validation`, for callers that want complete feedback.
//!
//! Passing validation does not mean a solution exists; see
//! [`is_solvable`] for the exact criterion.
//!
//! # Example
//!
//! ```rust
//! use jugsolve::validation::{validate_input, ValidationError};
//!
//! assert_eq!(validate_input(3, 5, 2), Ok(()));
//! assert_eq!(validate_input(3, 3, 2), Err(ValidationError::DuplicateJugs));
//! assert_eq!(
//!     validate_input(3, 5, 7),
//!     Err(ValidationError::TargetExceedsCapacity { target: 7, largest: 5 })
//! );
//! ```

pub mod rules;
pub mod violations;

pub use rules::{gcd, is_solvable, validate_all, validate_input};
pub use violations::ValidationError;
