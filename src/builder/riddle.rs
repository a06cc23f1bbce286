//! Builder for validated riddles.

use crate::builder::error::BuildError;
use crate::core::{JugPair, Solution};
use crate::search::{Report, SearchError, Solver};
use crate::validation::validate_input;
use serde::{Deserialize, Serialize};

/// A validated riddle: two jug capacities and a target amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Riddle {
    capacity_x: i64,
    capacity_y: i64,
    target: i64,
}

impl Riddle {
    /// Start building a riddle.
    pub fn builder() -> RiddleBuilder {
        RiddleBuilder::new()
    }

    pub fn capacity_x(&self) -> i64 {
        self.capacity_x
    }

    pub fn capacity_y(&self) -> i64 {
        self.capacity_y
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    /// Both jugs empty, X first.
    pub fn initial_pair(&self) -> JugPair {
        JugPair::new(self.capacity_x, self.capacity_y)
    }

    /// Search with a fresh solver, keeping the search statistics.
    pub fn run(&self) -> Result<Report, SearchError> {
        Solver::new(self.initial_pair(), self.target).run()
    }

    /// Search with a fresh solver.
    pub fn solve(&self) -> Result<Solution, SearchError> {
        self.run().map(|report| report.solution)
    }
}

/// Builder for constructing riddles with a fluent API.
#[derive(Clone, Debug, Default)]
pub struct RiddleBuilder {
    capacity_x: Option<i64>,
    capacity_y: Option<i64>,
    target: Option<i64>,
}

impl RiddleBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the capacity of Jug X (required).
    pub fn jug_x(mut self, volume: i64) -> Self {
        self.capacity_x = Some(volume);
        self
    }

    /// Set the capacity of Jug Y (required).
    pub fn jug_y(mut self, volume: i64) -> Self {
        self.capacity_y = Some(volume);
        self
    }

    /// Set the amount to measure (required).
    pub fn target(mut self, amount: i64) -> Self {
        self.target = Some(amount);
        self
    }

    /// Build the riddle, running input validation.
    pub fn build(self) -> Result<Riddle, BuildError> {
        let capacity_x = self.capacity_x.ok_or(BuildError::MissingJugX)?;
        let capacity_y = self.capacity_y.ok_or(BuildError::MissingJugY)?;
        let target = self.target.ok_or(BuildError::MissingTarget)?;

        validate_input(capacity_x, capacity_y, target)?;

        Ok(Riddle {
            capacity_x,
            capacity_y,
            target,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateKey;
    use crate::validation::ValidationError;

    #[test]
    fn builder_creates_riddle() {
        let riddle = Riddle::builder().jug_x(3).jug_y(5).target(4).build().unwrap();

        assert_eq!(riddle.capacity_x(), 3);
        assert_eq!(riddle.capacity_y(), 5);
        assert_eq!(riddle.target(), 4);
        assert_eq!(riddle.initial_pair().key(), StateKey::origin());
    }

    #[test]
    fn builder_requires_every_field() {
        assert_eq!(
            RiddleBuilder::new().jug_y(5).target(4).build(),
            Err(BuildError::MissingJugX)
        );
        assert_eq!(
            RiddleBuilder::new().jug_x(3).target(4).build(),
            Err(BuildError::MissingJugY)
        );
        assert_eq!(
            RiddleBuilder::new().jug_x(3).jug_y(5).build(),
            Err(BuildError::MissingTarget)
        );
    }

    #[test]
    fn builder_validates_input() {
        let result = Riddle::builder().jug_x(3).jug_y(5).target(7).build();
        assert_eq!(
            result,
            Err(BuildError::Invalid(ValidationError::TargetExceedsCapacity {
                target: 7,
                largest: 5,
            }))
        );
    }

    #[test]
    fn riddle_solves_and_reports() {
        let riddle = Riddle::builder().jug_x(5).jug_y(3).target(4).build().unwrap();

        let report = riddle.run().unwrap();
        assert_eq!(report.solution.final_state(), StateKey::new(4, 0));
        assert_eq!(report.stats.expanded, 12);
        assert_eq!(riddle.solve().unwrap(), report.solution);
    }
}
