//! Recorded steps and the solution they form.
//!
//! The search assembles steps while unwinding, so its raw output runs from
//! the goal back to the start. [`Solution`] stores them initial-first.

use super::jug::JugLabel;
use super::state::StateKey;
use crate::ops::Action;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Record of one transition taken.
///
/// # Example
///
/// ```rust
/// use jugsolve::core::{Step, StateKey};
/// use jugsolve::ops::Action;
///
/// let step = Step::new(Action::Fill, "Fill Jug X", StateKey::new(3, 0));
/// assert_eq!(step.state(), StateKey::new(3, 0));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Which action produced this state
    pub action: Action,
    /// Human-readable description, e.g. "Transfer from Jug X to Jug Y"
    pub description: String,
    /// Jug X value after the action
    pub x_value: i64,
    /// Jug Y value after the action
    pub y_value: i64,
}

impl Step {
    pub fn new(action: Action, description: impl Into<String>, state: StateKey) -> Self {
        Self {
            action,
            description: description.into(),
            x_value: state.x_value,
            y_value: state.y_value,
        }
    }

    /// Resulting state after the step.
    pub fn state(&self) -> StateKey {
        StateKey::new(self.x_value, self.y_value)
    }
}

/// Ordered sequence of steps from the empty state to a goal state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    steps: Vec<Step>,
}

impl Solution {
    /// Build from steps already in initial-to-final order.
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// Build from the goal-first sequence produced while unwinding the search.
    pub fn from_unwound(mut steps: Vec<Step>) -> Self {
        steps.reverse();
        Self { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// State after the last step, or the origin for an empty solution.
    pub fn final_state(&self) -> StateKey {
        self.steps
            .last()
            .map(Step::state)
            .unwrap_or_else(StateKey::origin)
    }

    /// Every state visited, starting with the empty origin.
    ///
    /// ```rust
    /// use jugsolve::core::{Solution, Step, StateKey};
    /// use jugsolve::ops::Action;
    ///
    /// let solution = Solution::new(vec![
    ///     Step::new(Action::Fill, "Fill Jug X", StateKey::new(3, 0)),
    /// ]);
    /// assert_eq!(solution.path(), vec![StateKey::new(0, 0), StateKey::new(3, 0)]);
    /// ```
    pub fn path(&self) -> Vec<StateKey> {
        std::iter::once(StateKey::origin())
            .chain(self.steps.iter().map(Step::state))
            .collect()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>30}\t\t{:>5}\t\t{:>5}",
            "",
            JugLabel::X.name(),
            JugLabel::Y.name()
        )?;
        for step in &self.steps {
            writeln!(
                f,
                "{:>30}\t\t{:>5}\t\t{:>5}",
                step.description, step.x_value, step.y_value
            )?;
        }
        Ok(())
    }
}
