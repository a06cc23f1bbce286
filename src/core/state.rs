//! Jug pair snapshots and the label-based state key.
//!
//! A [`JugPair`] is positional: actions return `[source, other]`, so after
//! "Transfer from Jug Y to Jug X" the Y jug sits at position 0. Anything
//! that identifies a state goes through [`JugPair::key`], which looks jugs
//! up by label.

use super::jug::{Jug, JugLabel};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label-ordered `(x_value, y_value)` pair identifying a search state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateKey {
    pub x_value: i64,
    pub y_value: i64,
}

impl StateKey {
    pub fn new(x_value: i64, y_value: i64) -> Self {
        Self { x_value, y_value }
    }

    /// The all-empty starting state.
    pub fn origin() -> Self {
        Self::new(0, 0)
    }

    /// Total quantity held across both jugs.
    pub fn total(&self) -> i64 {
        self.x_value + self.y_value
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x_value, self.y_value)
    }
}

/// Ordered pair of jug snapshots at one point in the search.
///
/// # Example
///
/// ```rust
/// use jugsolve::core::{JugPair, StateKey};
///
/// let pair = JugPair::new(3, 5);
/// assert_eq!(pair.key(), StateKey::origin());
/// assert!(!pair.holds(4));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JugPair {
    jugs: [Jug; 2],
}

impl JugPair {
    /// Initial pair: both jugs empty, X at position 0.
    pub fn new(x_volume: i64, y_volume: i64) -> Self {
        Self {
            jugs: [
                Jug::new(JugLabel::X, x_volume),
                Jug::new(JugLabel::Y, y_volume),
            ],
        }
    }

    /// Build a pair from jugs in positional order.
    pub fn from_jugs(first: Jug, second: Jug) -> Self {
        Self {
            jugs: [first, second],
        }
    }

    /// Jug at position `index` (0 or 1).
    pub fn jug(&self, index: usize) -> &Jug {
        &self.jugs[index % 2]
    }

    /// The jug that is not at position `index`.
    pub fn other(&self, index: usize) -> &Jug {
        &self.jugs[(index + 1) % 2]
    }

    pub fn jugs(&self) -> &[Jug; 2] {
        &self.jugs
    }

    /// Jug carrying `label`, wherever it sits.
    pub fn by_label(&self, label: JugLabel) -> &Jug {
        if self.jugs[0].label() == label {
            &self.jugs[0]
        } else {
            &self.jugs[1]
        }
    }

    /// State key computed by label, not by position.
    pub fn key(&self) -> StateKey {
        StateKey::new(
            self.by_label(JugLabel::X).value(),
            self.by_label(JugLabel::Y).value(),
        )
    }

    /// True when either jug holds exactly `target`.
    pub fn holds(&self, target: i64) -> bool {
        self.jugs.iter().any(|jug| jug.value() == target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_pair_starts_at_origin() {
        let pair = JugPair::new(3, 5);
        assert_eq!(pair.key(), StateKey::origin());
        assert_eq!(pair.jug(0).label(), JugLabel::X);
        assert_eq!(pair.other(0).label(), JugLabel::Y);
    }

    #[test]
    fn key_is_independent_of_position() {
        let x = Jug::with_value(JugLabel::X, 3, 1);
        let y = Jug::with_value(JugLabel::Y, 5, 4);

        let straight = JugPair::from_jugs(x, y);
        let swapped = JugPair::from_jugs(y, x);

        assert_eq!(straight.key(), StateKey::new(1, 4));
        assert_eq!(swapped.key(), StateKey::new(1, 4));
        assert_eq!(swapped.jug(0).label(), JugLabel::Y);
    }

    #[test]
    fn holds_checks_both_jugs() {
        let pair = JugPair::from_jugs(
            Jug::with_value(JugLabel::Y, 5, 4),
            Jug::with_value(JugLabel::X, 3, 3),
        );
        assert!(pair.holds(4));
        assert!(pair.holds(3));
        assert!(!pair.holds(2));
    }

    #[test]
    fn state_key_totals_and_displays() {
        let key = StateKey::new(2, 5);
        assert_eq!(key.total(), 7);
        assert_eq!(key.to_string(), "(2, 5)");
    }
}
